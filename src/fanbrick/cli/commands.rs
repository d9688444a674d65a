use super::render::{
    print_bricks, print_calendar, print_config, print_facets, print_full_bricks, print_list_header,
    print_messages,
};
use super::setup::{Cli, Commands, FilterArgs};
use chrono::{Local, NaiveDate};
use clap::Parser;
use directories::ProjectDirs;
use fanbrick::api::{BrickDraft, ConfigAction, FanbrickApi};
use fanbrick::calendar::shift_month;
use fanbrick::commands::submit::select_image;
use fanbrick::config::{ConfigKey, FanbrickConfig};
use fanbrick::error::{FanbrickError, Result};
use fanbrick::model::{Club, ColorToken};
use fanbrick::store::fs::FileStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DATA_DIR_ENV: &str = "FANBRICK_DATA";

struct AppContext {
    api: FanbrickApi<FileStore, StdRng>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;
    print_messages(&ctx.api.take_notices());

    match cli.command {
        Some(Commands::Add {
            memory,
            color,
            club,
            image,
            tags,
            email,
        }) => handle_add(&mut ctx, memory, color, club, image, tags, email),
        Some(Commands::List { filters }) => handle_list(&ctx, &filters),
        Some(Commands::Calendar {
            filters,
            month,
            day,
            prev,
            next,
        }) => handle_calendar(&ctx, &filters, month, day, i32::from(next) - i32::from(prev)),
        Some(Commands::Fav { bricks }) => handle_fav(&mut ctx, bricks),
        Some(Commands::View { bricks }) => handle_view(&ctx, bricks),
        Some(Commands::Facets) => handle_facets(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_list(&ctx, &FilterArgs::default()),
    }
}

/// Logs go to stderr so they never mix with rendered output.
/// `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "fanbrick=debug" } else { "fanbrick=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "fanbrick", "fanbrick")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| FanbrickError::Config("Could not determine data dir".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    debug!(data_dir = %data_dir.display(), "using data dir");

    let config = FanbrickConfig::load(&data_dir)?;
    let store = FileStore::new(data_dir.clone());
    let api = FanbrickApi::open(store, StdRng::from_entropy(), config, data_dir)?;

    Ok(AppContext { api })
}

fn handle_add(
    ctx: &mut AppContext,
    memory: String,
    color: Option<ColorToken>,
    club: Option<Club>,
    image: Option<PathBuf>,
    tags: Vec<String>,
    email: Option<String>,
) -> Result<()> {
    let mut draft = BrickDraft::new(memory).tags(tags);
    if let Some(color) = color {
        draft = draft.color(color);
    }
    if let Some(club) = club {
        draft = draft.club(club);
    }
    if let Some(path) = image {
        draft = draft.image(select_image(&path)?);
    }
    if let Some(email) = email {
        draft = draft.author(email);
    }

    let result = ctx.api.submit_brick(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, filters: &FilterArgs) -> Result<()> {
    let query = filters.to_query();
    let result = ctx.api.list(&query);
    print_list_header(&query);
    print_bricks(&result.listed_bricks);
    print_messages(&result.messages);
    Ok(())
}

fn handle_calendar(
    ctx: &AppContext,
    filters: &FilterArgs,
    month: Option<NaiveDate>,
    day: Option<NaiveDate>,
    step: i32,
) -> Result<()> {
    // A selected day with no --month opens that day's month.
    let base = month.or(day).unwrap_or_else(|| Local::now().date_naive());
    let month = shift_month(base, step);

    let result = ctx.api.calendar(&filters.to_query(), month, day);
    if let Some(calendar) = &result.calendar {
        print_calendar(calendar);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_fav(ctx: &mut AppContext, bricks: Vec<String>) -> Result<()> {
    let result = ctx.api.toggle_favorites(&bricks);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, bricks: Vec<String>) -> Result<()> {
    let result = ctx.api.view(&bricks)?;
    print_full_bricks(&result.listed_bricks);
    print_messages(&result.messages);
    Ok(())
}

fn handle_facets(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.facets();
    if let Some(facets) = &result.facets {
        print_facets(facets);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(ConfigKey::parse(k)?),
        (Some(k), Some(v)) => ConfigAction::Set(ConfigKey::parse(k)?, v),
    };
    let show_all = action == ConfigAction::ShowAll;

    let result = ctx.api.configure(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}
