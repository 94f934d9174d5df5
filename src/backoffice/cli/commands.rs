//! # CLI Dispatch
//!
//! - `run()`: parses arguments, installs logging, dispatches
//! - `init_context()`: builds `AppContext` with API and configuration
//! - `handle_*()`: per-command handlers that call the API and print output
//!
//! Product and user commands share one generic handler; the per-type bits
//! (sample payload, rendering) come from `CliRecord`.

use super::render::{
    print_messages, render_config, render_favorites, render_product, render_product_list,
    render_summary, render_user, render_user_list,
};
use super::setup::{Cli, Commands, FavoriteCommands, RecordCommands};
use backoffice::api::{BackofficeApi, CmdResult, ConfigAction};
use backoffice::config::{BackofficeConfig, Latency};
use backoffice::error::{BackofficeError, Result};
use backoffice::form::{ProductForm, UserForm};
use backoffice::model::{Product, Record, RecordPatch, User};
use backoffice::query::{ListQuery, Page};
use backoffice::store::memory::InMemoryStore;
use backoffice::store::Collection;
use clap::Parser;
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: BackofficeApi<InMemoryStore>,
    config_dir: PathBuf,
    json: bool,
}

/// Per-type CLI behavior for the record commands.
trait CliRecord: Record {
    fn sample() -> Self::New;
    fn render_page(page: &Page<Self>, ctx: &AppContext) -> String;
    fn render_one(&self, ctx: &AppContext) -> String;
}

impl CliRecord for Product {
    fn sample() -> Self::New {
        ProductForm::sample().into_new_product()
    }

    fn render_page(page: &Page<Self>, ctx: &AppContext) -> String {
        render_product_list(page, |id| ctx.api.is_favorite(id))
    }

    fn render_one(&self, ctx: &AppContext) -> String {
        render_product(self, ctx.api.is_favorite(self.id))
    }
}

impl CliRecord for User {
    fn sample() -> Self::New {
        UserForm::sample().into_new_user()
    }

    fn render_page(page: &Page<Self>, _ctx: &AppContext) -> String {
        render_user_list(page)
    }

    fn render_one(&self, _ctx: &AppContext) -> String {
        render_user(self)
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Products(cmd)) => handle_records::<Product>(&mut ctx, cmd),
        Some(Commands::Users(cmd)) => handle_records::<User>(&mut ctx, cmd),
        Some(Commands::Favorites(cmd)) => handle_favorites(&mut ctx, cmd),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Dashboard) | None => handle_dashboard(&ctx),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (tests driving `run` twice) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "backoffice", "backoffice")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| BackofficeError::Config("Could not determine config dir".into()))?,
    };

    let config = BackofficeConfig::load(&config_dir).unwrap_or_else(|e| {
        warn!(dir = %config_dir.display(), error = %e, "ignoring unreadable config");
        BackofficeConfig::default()
    });
    debug!(dir = %config_dir.display(), ?config, "loaded config");

    let mut api = BackofficeApi::new(InMemoryStore::seeded(), config);
    if cli.instant {
        api = api.with_latency(Latency::none());
    }

    Ok(AppContext {
        api,
        config_dir,
        json: cli.json,
    })
}

fn handle_records<R>(ctx: &mut AppContext, cmd: RecordCommands) -> Result<()>
where
    R: CliRecord,
    InMemoryStore: Collection<R>,
{
    match cmd {
        RecordCommands::List {
            page,
            limit,
            search,
        } => {
            let mut query = ListQuery::new(page, limit);
            if let Some(term) = search {
                query = query.with_search(term);
            }
            let page = ctx.api.list::<R>(&query)?;
            if ctx.json {
                return print_json(&page);
            }
            print!("{}", R::render_page(&page, ctx));
            Ok(())
        }
        RecordCommands::Show { id } => {
            let record = ctx.api.get::<R>(id)?;
            if ctx.json {
                return print_json(&record);
            }
            print!("{}", record.render_one(ctx));
            Ok(())
        }
        RecordCommands::Create { data, .. } => {
            let payload = match data {
                Some(raw) => parse_payload::<R::New>(&raw)?,
                None => R::sample(),
            };
            let result = ctx.api.create::<R>(payload)?;
            print_result(ctx, &result)
        }
        RecordCommands::Update { id, data } => {
            let mut patch: R::Patch = parse_payload(&data)?;
            patch.retarget(id);
            let result = ctx.api.update::<R>(patch)?;
            print_result(ctx, &result)
        }
        RecordCommands::Delete { id } => {
            let result = ctx.api.delete::<R>(id)?;
            print_result(ctx, &result)
        }
    }
}

fn handle_favorites(ctx: &mut AppContext, cmd: FavoriteCommands) -> Result<()> {
    let result = match cmd {
        FavoriteCommands::List => {
            let favorites = ctx.api.favorites().products();
            if ctx.json {
                return print_json(&favorites);
            }
            print!("{}", render_favorites(favorites));
            return Ok(());
        }
        FavoriteCommands::Toggle { ids } => ctx.api.toggle_favorites(&ids)?,
        FavoriteCommands::Add { ids } => ctx.api.add_favorites(&ids)?,
        FavoriteCommands::Remove { ids } => ctx.api.remove_favorites(&ids)?,
        FavoriteCommands::Clear => ctx.api.clear_favorites()?,
    };

    if ctx.json {
        return print_json(&result.records);
    }
    print_messages(&result.messages);
    print!("{}", render_favorites(ctx.api.favorites().products()));
    Ok(())
}

fn handle_dashboard(ctx: &AppContext) -> Result<()> {
    let summary = ctx.api.dashboard()?;
    if ctx.json {
        return print_json(&summary);
    }
    print!("{}", render_summary(&summary));
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let show_all = matches!(action, ConfigAction::ShowAll);
    let result = BackofficeApi::<InMemoryStore>::configure(&ctx.config_dir, action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_result<R: Serialize>(ctx: &AppContext, result: &CmdResult<R>) -> Result<()> {
    if ctx.json {
        return print_json(&result.records);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Parses a JSON payload given inline, or read from stdin when `raw` is "-".
fn parse_payload<T: DeserializeOwned>(raw: &str) -> Result<T> {
    let text = if raw == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        raw.to_string()
    };

    serde_json::from_str(&text)
        .map_err(|e| BackofficeError::Api(format!("Invalid JSON payload: {}", e)))
}
