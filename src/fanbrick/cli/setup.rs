use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use fanbrick::api::SortOrder;
use fanbrick::model::{Club, ColorToken};
use fanbrick::query::QueryConfig;
use std::path::PathBuf;

/// "0.3.0" for releases, "0.3.0@abc1234" for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("FANBRICK_GIT_HASH");
    const IS_RELEASE: &str = env!("FANBRICK_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "fanbrick", bin_name = "fanbrick", version = get_version())]
#[command(about = "A wall of football memories, one brick at a time", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $FANBRICK_DATA, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Search, facet filters and sort order shared by `list` and `calendar`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Search memories, quotes, clubs and tags (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only bricks with this emotion (repeat for several)
    #[arg(short, long = "emotion", value_name = "EMOTION")]
    pub emotions: Vec<String>,

    /// Only bricks with this tag (repeat for several)
    #[arg(short, long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Only favorite bricks
    #[arg(short, long)]
    pub favorites: bool,

    /// Sort order: date-desc, date-asc, emotion, popularity, favorites
    #[arg(long, default_value = "date-desc", value_parser = parse_sort)]
    pub sort: SortOrder,
}

impl FilterArgs {
    pub fn to_query(&self) -> QueryConfig {
        QueryConfig::new()
            .with_search(self.search.clone().unwrap_or_default())
            .with_emotions(self.emotions.iter().cloned())
            .with_tags(self.tags.iter().cloned())
            .favorites_only(self.favorites)
            .sorted_by(self.sort)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Place a new brick on the wall
    #[command(alias = "a")]
    Add {
        /// Your memory (up to 200 characters)
        memory: String,

        /// Brick color: primary, secondary, accent, highlight, muted, card
        #[arg(short, long, value_parser = parse_color)]
        color: Option<ColorToken>,

        /// Your club, e.g. "Liverpool FC"
        #[arg(long, value_parser = parse_club)]
        club: Option<Club>,

        /// Attach a local image (max 5MB)
        #[arg(short, long, value_name = "PATH")]
        image: Option<PathBuf>,

        /// Tag the brick (repeat for several)
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Author email for this brick (overrides config)
        #[arg(long)]
        email: Option<String>,
    },

    /// Show the wall
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show the wall as a month calendar
    #[command(alias = "cal")]
    Calendar {
        #[command(flatten)]
        filters: FilterArgs,

        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(long, value_parser = parse_month)]
        month: Option<NaiveDate>,

        /// Also list the bricks of this day (YYYY-MM-DD)
        #[arg(long, value_parser = parse_day)]
        day: Option<NaiveDate>,

        /// Step back this many months (repeatable: --prev --prev)
        #[arg(long, action = clap::ArgAction::Count)]
        prev: u8,

        /// Step forward this many months (repeatable)
        #[arg(long, action = clap::ArgAction::Count)]
        next: u8,
    },

    /// Toggle favorite on one or more bricks
    #[command(alias = "f")]
    Fav {
        /// Display indexes or ids (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        bricks: Vec<String>,
    },

    /// Show the full details of one or more bricks
    #[command(alias = "v")]
    View {
        /// Display indexes or ids (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        bricks: Vec<String>,
    },

    /// List the emotions and tags you can filter by
    Facets,

    /// Get or set configuration
    Config {
        /// Configuration key (author-email, seed-demo)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the data directory
    Init,
}

fn parse_sort(s: &str) -> Result<SortOrder, String> {
    s.parse()
}

fn parse_color(s: &str) -> Result<ColorToken, String> {
    s.parse()
}

fn parse_club(s: &str) -> Result<Club, String> {
    s.parse()
}

fn parse_month(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .map_err(|_| format!("Invalid month '{}', expected YYYY-MM", s))
}

fn parse_day(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid day '{}', expected YYYY-MM-DD", s))
}
