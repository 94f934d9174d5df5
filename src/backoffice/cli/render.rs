//! # Rendering
//!
//! Turns API results into terminal text. Every `render_*` function returns a
//! `String` so output can be checked in tests; the handlers in `commands.rs`
//! do the printing.
//!
//! ## List Layout
//!
//! Product rows are laid out in fixed columns around a fill column:
//! - favorite marker (2 chars)
//! - id (`  3. `)
//! - title and brand (fill), truncated to fit
//! - price (10 chars, right-aligned)
//! - stock level, rating (colored by tier)
//! - relative creation time (14 chars, right-aligned)

use backoffice::api::{CmdMessage, MessageLevel, Summary};
use backoffice::config::{BackofficeConfig, KEYS};
use backoffice::model::{Product, RatingTier, RecordId, StockLevel, User};
use backoffice::query::Page;
use chrono::{DateTime, Utc};
use colored::Colorize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const FAVORITE_MARKER: &str = "★";

const TIME_WIDTH: usize = 14;
const PRICE_WIDTH: usize = 10;
const STOCK_WIDTH: usize = 8;
const RATING_WIDTH: usize = 6;
const EMAIL_WIDTH: usize = 30;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn render_product_list(
    page: &Page<Product>,
    is_favorite: impl Fn(RecordId) -> bool,
) -> String {
    if page.is_empty() {
        return format!("No products found.\n{}", render_page_footer(page));
    }

    let mut out: String = page
        .data
        .iter()
        .map(|product| product_row(product, is_favorite(product.id)))
        .collect();
    out.push_str(&render_page_footer(page));
    out
}

pub fn render_favorites(products: &[Product]) -> String {
    if products.is_empty() {
        return "No favorites yet.\n".to_string();
    }
    products.iter().map(|p| product_row(p, true)).collect()
}

fn product_row(product: &Product, favorite: bool) -> String {
    let left_prefix = if favorite {
        format!("{} ", FAVORITE_MARKER)
    } else {
        "  ".to_string()
    };
    let idx_str = format!("{:>3}. ", product.id);

    let fixed_width = left_prefix.width()
        + idx_str.width()
        + PRICE_WIDTH
        + 1
        + STOCK_WIDTH
        + RATING_WIDTH
        + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);

    let label = format!("{} · {}", product.title, product.brand);
    let title_display = truncate_to_width(&label, available);
    let padding = available.saturating_sub(title_display.width());

    let price = format!("{:>width$}", format_price(product.price), width = PRICE_WIDTH);

    format!(
        "{}{}{}{}{} {}{}{}\n",
        left_prefix.yellow(),
        idx_str,
        title_display,
        " ".repeat(padding),
        price,
        stock_label(product.stock_level()),
        rating_label(product.rating, product.rating_tier()),
        format_time_ago(product.created_at).dimmed()
    )
}

pub fn render_user_list(page: &Page<User>) -> String {
    if page.is_empty() {
        return format!("No users found.\n{}", render_page_footer(page));
    }

    let mut out = String::new();
    for user in &page.data {
        let idx_str = format!("  {:>3}. ", user.id);
        let fixed_width = idx_str.width() + EMAIL_WIDTH + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let label = format!("{} ({})", user.full_name(), user.username);
        let name_display = truncate_to_width(&label, available);
        let padding = available.saturating_sub(name_display.width());

        let email = truncate_to_width(&user.email, EMAIL_WIDTH);
        let email_padding = EMAIL_WIDTH.saturating_sub(email.width());

        out.push_str(&format!(
            "{}{}{}{}{}{}\n",
            idx_str,
            name_display,
            " ".repeat(padding),
            email.cyan(),
            " ".repeat(email_padding),
            format_time_ago(user.created_at).dimmed()
        ));
    }
    out.push_str(&render_page_footer(page));
    out
}

pub fn render_page_footer<R>(page: &Page<R>) -> String {
    let mut footer = format!(
        "Page {} of {} ({} total)",
        page.page,
        page.total_pages.max(1),
        page.total
    );
    if page.has_next() {
        footer.push_str(&format!(", next: --page {}", page.page + 1));
    }
    format!("{}\n", footer.dimmed())
}

pub fn render_product(product: &Product, favorite: bool) -> String {
    let marker = if favorite {
        format!(" {}", FAVORITE_MARKER).yellow().to_string()
    } else {
        String::new()
    };

    let mut out = format!(
        "{} {}{}\n",
        format!("{}.", product.id).yellow(),
        product.title.bold(),
        marker
    );
    out.push_str("--------------------------------\n");
    out.push_str(&format!("{}\n\n", product.description));
    out.push_str(&field("Brand", &product.brand));
    out.push_str(&field("Category", &product.category));
    out.push_str(&field(
        "Price",
        &format!(
            "{} ({}% off: {})",
            format_price(product.price),
            product.discount_percentage,
            format_price(product.discounted_price())
        ),
    ));
    out.push_str(&field(
        "Stock",
        &format!("{} {}", product.stock, stock_label(product.stock_level()).trim_end()),
    ));
    out.push_str(&field(
        "Rating",
        rating_label(product.rating, product.rating_tier()).trim_end(),
    ));
    out.push_str(&field("Thumbnail", &product.thumbnail));
    for image in &product.images {
        out.push_str(&field("Image", image));
    }
    out.push_str(&timestamps(product.created_at, product.updated_at));
    out
}

pub fn render_user(user: &User) -> String {
    let mut out = format!(
        "{} {}\n",
        format!("{}.", user.id).yellow(),
        user.full_name().bold()
    );
    out.push_str("--------------------------------\n");
    out.push_str(&field("Username", &user.username));
    out.push_str(&field("Email", &user.email));
    out.push_str(&field("Phone", &user.phone));
    out.push_str(&field(
        "Born",
        &format!("{} (age {}, {})", user.birth_date, user.age, user.gender),
    ));
    out.push_str(&field(
        "Address",
        &format!(
            "{}, {} {}",
            user.address.address, user.address.postal_code, user.address.city
        ),
    ));
    out.push_str(&field(
        "Company",
        &format!(
            "{}, {} ({})",
            user.company.name, user.company.title, user.company.department
        ),
    ));
    out.push_str(&field("University", &user.university));
    out.push_str(&timestamps(user.created_at, user.updated_at));
    out
}

pub fn render_summary(summary: &Summary) -> String {
    format!(
        "{}\n{}\n{}\n",
        field_line("Products", summary.products),
        field_line("Users", summary.users),
        field_line("Favorites", summary.favorites)
    )
}

pub fn render_config(config: &BackofficeConfig) -> String {
    KEYS.iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}\n", key, value)))
        .collect()
}

fn field(name: &str, value: &str) -> String {
    format!("{:<12}{}\n", format!("{}:", name).dimmed(), value)
}

fn field_line(name: &str, value: usize) -> String {
    format!("{:<11}{}", format!("{}:", name), value.to_string().bold())
}

fn timestamps(created: DateTime<Utc>, updated: DateTime<Utc>) -> String {
    format!(
        "\n{}\n",
        format!(
            "created {} · updated {}",
            format_time_ago(created).trim_start(),
            format_time_ago(updated).trim_start()
        )
        .dimmed()
    )
}

fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

fn stock_label(level: StockLevel) -> String {
    let text = format!("{:<width$}", format!("{:?}", level), width = STOCK_WIDTH);
    match level {
        StockLevel::High => text.green().to_string(),
        StockLevel::Medium => text.yellow().to_string(),
        StockLevel::Low => text.red().to_string(),
    }
}

fn rating_label(rating: f64, tier: RatingTier) -> String {
    let text = format!("{:<width$}", format!("{:.1}", rating), width = RATING_WIDTH);
    match tier {
        RatingTier::Good => text.green().to_string(),
        RatingTier::Fair => text.yellow().to_string(),
        RatingTier::Poor => text.red().to_string(),
    }
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice::store::seed;

    fn plain() {
        colored::control::set_override(false);
    }

    fn page_of<R: Clone>(data: Vec<R>, page: usize, limit: usize, total: usize) -> Page<R> {
        Page {
            data,
            total,
            page,
            limit,
            total_pages: total.div_ceil(limit),
        }
    }

    #[test]
    fn test_product_list_marks_favorites() {
        plain();
        let products = seed::products();
        let page = page_of(products[..2].to_vec(), 1, 10, 2);

        let out = render_product_list(&page, |id| id == 2);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("    1. iPhone 9 · Apple"));
        assert!(lines[1].starts_with(&format!("{}   2. iPhone X", FAVORITE_MARKER)));
        assert!(lines[0].contains("$549.00"));
        assert_eq!(lines[2], "Page 1 of 1 (2 total)");
    }

    #[test]
    fn test_product_rows_fit_line_width() {
        plain();
        let mut products = seed::products();
        products[0].title = "A".repeat(200);
        let page = page_of(products, 1, 10, 5);

        let out = render_product_list(&page, |_| false);
        let first = out.lines().next().unwrap();
        assert!(first.contains('…'));
        assert_eq!(first.width(), LINE_WIDTH);
    }

    #[test]
    fn test_empty_list() {
        plain();
        let page: Page<Product> = page_of(Vec::new(), 1, 10, 0);
        let out = render_product_list(&page, |_| false);
        assert!(out.starts_with("No products found."));
        assert!(out.contains("Page 1 of 1 (0 total)"));

        let users: Page<User> = page_of(Vec::new(), 1, 10, 0);
        assert!(render_user_list(&users).starts_with("No users found."));
    }

    #[test]
    fn test_favorites_list() {
        plain();
        assert_eq!(render_favorites(&[]), "No favorites yet.\n");

        let out = render_favorites(&seed::products()[2..3]);
        assert!(out.starts_with(&format!("{}   3. Samsung Universe 9", FAVORITE_MARKER)));
    }

    #[test]
    fn test_footer_points_to_next_page() {
        plain();
        let page = page_of(seed::products()[..2].to_vec(), 1, 2, 5);
        assert_eq!(
            render_page_footer(&page),
            "Page 1 of 3 (5 total), next: --page 2\n"
        );
    }

    #[test]
    fn test_user_list_shows_name_and_email() {
        plain();
        let page = page_of(seed::users(), 1, 10, 2);
        let out = render_user_list(&page);
        assert!(out.contains("Ahmet Yılmaz (ahmetyilmaz)"));
        assert!(out.contains("ayse.demir@example.com"));
    }

    #[test]
    fn test_product_detail() {
        plain();
        let product = &seed::products()[0];
        let out = render_product(product, true);
        assert!(out.starts_with(&format!("1. iPhone 9 {}", FAVORITE_MARKER)));
        assert!(out.contains("Brand:      Apple"));
        assert!(out.contains("Stock:      94 High"));
        assert!(out.contains("Rating:     4.7"));
    }

    #[test]
    fn test_user_detail() {
        plain();
        let out = render_user(&seed::users()[1]);
        assert!(out.starts_with("2. Ayşe Demir"));
        assert!(out.contains("Company:    Danışmanlık Ltd. Şti."));
    }

    #[test]
    fn test_summary_and_config() {
        plain();
        let out = render_summary(&Summary {
            products: 5,
            users: 2,
            favorites: 1,
        });
        assert_eq!(out, "Products:  5\nUsers:     2\nFavorites: 1\n");

        let config = render_config(&BackofficeConfig::default());
        assert!(config.starts_with("page-size = 10\n"));
        assert_eq!(config.lines().count(), KEYS.len());
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        assert_eq!(truncate_to_width("İstanbul Üniversitesi", 9).width(), 9);
    }
}
