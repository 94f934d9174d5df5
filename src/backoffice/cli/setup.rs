use backoffice::model::RecordId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "backoffice", bin_name = "backoffice", version = get_version())]
#[command(about = "Product and user catalogue for admin dashboards", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub config_dir: Option<PathBuf>,

    /// Skip the simulated backend latency
    #[arg(long, global = true, help_heading = "Options")]
    pub instant: bool,

    /// Print records as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse and edit products
    #[command(subcommand, alias = "p")]
    Products(RecordCommands),

    /// Browse and edit users
    #[command(subcommand, alias = "u")]
    Users(RecordCommands),

    /// Manage favorite products
    #[command(subcommand, alias = "fav")]
    Favorites(FavoriteCommands),

    /// Show catalogue totals
    Dashboard,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g. page-size)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum RecordCommands {
    /// List records, one page at a time
    #[command(alias = "ls")]
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Records per page (0 uses the configured page size)
        #[arg(short, long, default_value_t = 0)]
        limit: usize,

        /// Case-insensitive search term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show a single record
    #[command(alias = "v")]
    Show { id: RecordId },

    /// Create a record from a JSON payload or the sample data
    #[command(alias = "n")]
    Create {
        /// JSON payload, or "-" to read it from stdin
        #[arg(
            long,
            value_name = "JSON",
            conflicts_with = "sample",
            required_unless_present = "sample"
        )]
        data: Option<String>,

        /// Use the built-in sample record
        #[arg(long)]
        sample: bool,
    },

    /// Update a record with a partial JSON payload
    #[command(alias = "e")]
    Update {
        id: RecordId,

        /// JSON payload with the fields to change, or "-" for stdin
        #[arg(long, value_name = "JSON")]
        data: String,
    },

    /// Delete a record
    #[command(alias = "rm")]
    Delete { id: RecordId },
}

#[derive(Subcommand, Debug)]
pub enum FavoriteCommands {
    /// List favorite products
    #[command(alias = "ls")]
    List,

    /// Toggle products in or out of the favorites
    Toggle {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<RecordId>,
    },

    /// Add products to the favorites
    Add {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<RecordId>,
    },

    /// Remove products from the favorites
    #[command(alias = "rm")]
    Remove {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<RecordId>,
    },

    /// Remove every favorite
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_list_defaults() {
        let cli = parse(&["backoffice", "products", "list"]);
        match cli.command {
            Some(Commands::Products(RecordCommands::List {
                page,
                limit,
                search,
            })) => {
                assert_eq!(page, 1);
                assert_eq!(limit, 0);
                assert_eq!(search, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["backoffice", "u", "ls", "-s", "ayşe", "--instant", "--json"]);
        assert!(cli.instant);
        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Some(Commands::Users(RecordCommands::List { search: Some(ref s), .. })) if s == "ayşe"
        ));
    }

    #[test]
    fn test_create_requires_payload_or_sample() {
        assert!(Cli::try_parse_from(["backoffice", "products", "create"]).is_err());
        assert!(Cli::try_parse_from([
            "backoffice",
            "products",
            "create",
            "--sample",
            "--data",
            "{}"
        ])
        .is_err());

        let cli = parse(&["backoffice", "products", "create", "--sample"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Products(RecordCommands::Create { data: None, sample: true }))
        ));
    }

    #[test]
    fn test_favorites_take_many_ids() {
        let cli = parse(&["backoffice", "fav", "toggle", "1", "3"]);
        match cli.command {
            Some(Commands::Favorites(FavoriteCommands::Toggle { ids })) => {
                assert_eq!(ids, vec![1, 3])
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["backoffice", "products", "show", "abc"]).is_err());
    }
}
