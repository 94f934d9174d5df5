//! Demo catalogue loaded by [`InMemoryStore::seeded`](super::memory::InMemoryStore::seeded).

use crate::model::{Address, Bank, Company, Coordinates, Gender, Hair, Product, User};
use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;

static PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        product(
            1,
            "iPhone 9",
            "Elma gibi olmayan bir elma mobil telefon",
            (549.0, 12.96, 4.69, 94),
            ("Apple", "smartphones"),
        ),
        product(
            2,
            "iPhone X",
            "SIM-Free, Model A19211 6.5 inç Super Retina HD ekran, OLED teknolojisi, A12 Bionic çip ile...",
            (899.0, 17.94, 4.44, 34),
            ("Apple", "smartphones"),
        ),
        product(
            3,
            "Samsung Universe 9",
            "Galaxy'yi aşarak Evren'e giden Samsung'un yeni varyantı",
            (1249.0, 15.46, 4.09, 36),
            ("Samsung", "smartphones"),
        ),
        product(
            4,
            "MacBook Pro",
            "Apple M1 Pro chip ile güçlendirilmiş profesyonel laptop",
            (1999.0, 10.5, 4.8, 25),
            ("Apple", "laptops"),
        ),
        product(
            5,
            "Samsung Galaxy Tab S8",
            "Android tablet'in en iyi örneği, S Pen desteği ile",
            (799.0, 8.2, 4.6, 42),
            ("Samsung", "tablets"),
        ),
    ]
});

static USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        User {
            id: 1,
            first_name: "Ahmet".into(),
            last_name: "Yılmaz".into(),
            maiden_name: "Kaya".into(),
            age: 50,
            gender: Gender::Male,
            email: "ahmet.yilmaz@example.com".into(),
            phone: "+90 532 123 4567".into(),
            username: "ahmetyilmaz".into(),
            password: "9uQFF1Lh".into(),
            birth_date: date(2000, 12, 25),
            image: "https://robohash.org/Ahmet.png?set=set4".into(),
            blood_group: "A-".into(),
            height: 189.0,
            weight: 75.4,
            eye_color: "Kahverengi".into(),
            hair: Hair {
                color: "Siyah".into(),
                kind: "Düz".into(),
            },
            domain: "example.com".into(),
            ip: "117.29.86.254".into(),
            address: address(
                "Atatürk Caddesi No: 123",
                "İstanbul",
                (41.0082, 28.9784),
                "34000",
            ),
            mac_address: "13:69:BA:56:A3:74".into(),
            university: "İstanbul Teknik Üniversitesi".into(),
            bank: Bank {
                card_expire: "06/22".into(),
                card_number: "50380955204220685".into(),
                card_type: "maestro".into(),
                currency: "TL".into(),
                iban: "TR33 0001 0002 3456 7890 1234 56".into(),
            },
            company: Company {
                address: address(
                    "Levent Mahallesi, Büyükdere Caddesi No: 45",
                    "İstanbul",
                    (41.0782, 29.0174),
                    "34330",
                ),
                department: "Pazarlama".into(),
                name: "Teknoloji A.Ş.".into(),
                title: "Yazılım Geliştirici".into(),
            },
            ein: "20-9487066".into(),
            ssn: "661-64-2976".into(),
            user_agent: "Mozilla/5.0 (Windows NT 6.1 WOW64) AppleWebKit/534.54 (KHTML, like Gecko) Chrome/12.0.902.0 Safari/534.54".into(),
            created_at: day(1),
            updated_at: day(1),
        },
        User {
            id: 2,
            first_name: "Ayşe".into(),
            last_name: "Demir".into(),
            maiden_name: "Özkan".into(),
            age: 28,
            gender: Gender::Female,
            email: "ayse.demir@example.com".into(),
            phone: "+90 533 987 6543".into(),
            username: "aysedemir".into(),
            password: "CQutx25i8r".into(),
            birth_date: date(2003, 8, 2),
            image: "https://robohash.org/Ayse.png?set=set4".into(),
            blood_group: "O+".into(),
            height: 165.0,
            weight: 58.0,
            eye_color: "Kahverengi".into(),
            hair: Hair {
                color: "Kahverengi".into(),
                kind: "Dalgalı".into(),
            },
            domain: "example.com".into(),
            ip: "253.240.20.181".into(),
            address: address("Kızılay Meydanı No: 15", "Ankara", (39.9334, 32.8597), "06420"),
            mac_address: "13:F1:C2:37:24:FD".into(),
            university: "Orta Doğu Teknik Üniversitesi".into(),
            bank: Bank {
                card_expire: "10/23".into(),
                card_number: "5355920631952404".into(),
                card_type: "mastercard".into(),
                currency: "TL".into(),
                iban: "TR33 0001 0002 3456 7890 1234 57".into(),
            },
            company: Company {
                address: address(
                    "Çankaya Mahallesi, Atatürk Bulvarı No: 78",
                    "Ankara",
                    (39.9208, 32.8541),
                    "06690",
                ),
                department: "İnsan Kaynakları".into(),
                name: "Danışmanlık Ltd. Şti.".into(),
                title: "İnsan Kaynakları Uzmanı".into(),
            },
            ein: "52-5262907".into(),
            ssn: "447-08-9217".into(),
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/534.24 (KHTML, like Gecko) Chrome/11.0.696.3 Safari/534.24".into(),
            created_at: day(2),
            updated_at: day(2),
        },
    ]
});

pub fn products() -> Vec<Product> {
    PRODUCTS.clone()
}

pub fn users() -> Vec<User> {
    USERS.clone()
}

fn product(
    id: u64,
    title: &str,
    description: &str,
    (price, discount_percentage, rating, stock): (f64, f64, f64, u32),
    (brand, category): (&str, &str),
) -> Product {
    Product {
        id,
        title: title.to_string(),
        description: description.to_string(),
        price,
        discount_percentage,
        rating,
        stock,
        brand: brand.to_string(),
        category: category.to_string(),
        thumbnail: format!("https://images.example.com/products/{}/thumbnail.svg", id),
        images: (1..=2)
            .map(|n| format!("https://images.example.com/products/{}/{}.svg", id, n))
            .collect(),
        created_at: day(id as u32),
        updated_at: day(id as u32),
    }
}

fn address(street: &str, city: &str, (lat, lng): (f64, f64), postal_code: &str) -> Address {
    Address {
        address: street.to_string(),
        city: city.to_string(),
        coordinates: Coordinates { lat, lng },
        postal_code: postal_code.to_string(),
        state: city.to_string(),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Midnight UTC on the given day of January 2023.
fn day(d: u32) -> DateTime<Utc> {
    date(2023, 1, d)
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}
