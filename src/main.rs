//! Binary entrypoint for the tracker-overlay CLI.
//!
//! Commands:
//! - `init` - create a starter `config.toml`
//! - `status` - load the game data catalog and print collection sizes
//! - `item|quest|project|hideout <id>` - print a record summary
//! - `image <name-or-url> [--out <path>]` - resolve an item image from the data folders
//! - `css` - print the stylesheet injection script for the web view
//! - `hotkeys` - validate and print the saved hotkey bindings
//!
//! See the library crate docs for module-level details: `tracker_overlay::`.
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::{error, info};
use std::path::Path;

use tracker_overlay::config::Config;
use tracker_overlay::data::Catalog;
use tracker_overlay::display::{
    format_hideout_summary, format_item_summary, format_project_summary, format_quest_summary,
    rarity_color,
};
use tracker_overlay::images::ImageResolver;
use tracker_overlay::overlay::{css_injection_script, load_stylesheet};
use tracker_overlay::settings::UserSettings;

#[derive(Parser)]
#[command(name = "tracker-overlay")]
#[command(about = "Game data and overlay utilities for the tracker overlay")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// User settings file path
    #[arg(long, default_value = "settings.json", global = true)]
    settings: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init,
    /// Load all game data and show collection sizes
    Status,
    /// Show an item
    Item { id: String },
    /// Show a quest
    Quest { id: String },
    /// Show a project and its phases
    Project { id: String },
    /// Show a hideout module and its upgrade costs
    Hideout { id: String },
    /// Resolve an image filename or URL against the local data folders
    Image {
        reference: String,
        /// Write the decoded image out as PNG
        #[arg(short, long)]
        out: Option<String>,
    },
    /// Print the CSS injection script for the tracker page
    Css,
    /// Validate and print hotkey bindings from the settings file
    Hotkeys,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Init = cli.command {
        init_logging(&None, cli.verbose);
        info!("Initializing new overlay configuration");
        Config::create_default(&cli.config)?;
        info!("Configuration file created at {}", cli.config);
        return Ok(());
    }

    let config = Config::load(&cli.config)?;
    init_logging(&Some(config.clone()), cli.verbose);
    let lang = config.data.language.as_str();

    match cli.command {
        Commands::Init => unreachable!("handled above"),
        Commands::Status => {
            let catalog = Catalog::load(&config.data)?;
            println!("Data root: {}", config.data.data_root);
            println!("Items: {}", catalog.items().len());
            println!("Quests: {}", catalog.quests().len());
            println!("Projects: {}", catalog.projects().len());
            println!("Hideout modules: {}", catalog.hideout_modules().len());
        }
        Commands::Item { id } => {
            let catalog = Catalog::load(&config.data)?;
            let item = catalog
                .item(&id)
                .ok_or_else(|| anyhow!("No item with id '{}'", id))?;
            print!("{}", format_item_summary(item, lang));
            if let Some(rarity) = item.rarity {
                println!("Color: {}", rarity_color(rarity.as_str()).to_hex());
            }
        }
        Commands::Quest { id } => {
            let catalog = Catalog::load(&config.data)?;
            let quest = catalog
                .quest(&id)
                .ok_or_else(|| anyhow!("No quest with id '{}'", id))?;
            print!("{}", format_quest_summary(quest, lang));
        }
        Commands::Project { id } => {
            let catalog = Catalog::load(&config.data)?;
            let project = catalog
                .project(&id)
                .ok_or_else(|| anyhow!("No project with id '{}'", id))?;
            print!("{}", format_project_summary(project, lang));
        }
        Commands::Hideout { id } => {
            let catalog = Catalog::load(&config.data)?;
            let module = catalog
                .hideout_module(&id)
                .ok_or_else(|| anyhow!("No hideout module with id '{}'", id))?;
            print!("{}", format_hideout_summary(module, lang));
        }
        Commands::Image { reference, out } => {
            let resolver = ImageResolver::new(&config.data.data_root);
            match resolver.locate(&reference) {
                Some((path, img)) => {
                    println!("{} ({}x{})", path.display(), img.width(), img.height());
                    if let Some(out) = out {
                        img.save_with_format(&out, image::ImageFormat::Png)
                            .map_err(|e| anyhow!("Failed to write {}: {}", out, e))?;
                        info!("Wrote {}", out);
                    }
                }
                None => {
                    error!("No image found for '{}'", reference);
                    std::process::exit(1);
                }
            }
        }
        Commands::Css => {
            let css = load_stylesheet(config.overlay.custom_css.as_deref().map(Path::new));
            println!("{}", css_injection_script(&css));
        }
        Commands::Hotkeys => {
            let settings = UserSettings::load_or_default(&cli.settings);
            for (action, hotkey) in settings.hotkeys.parsed()? {
                println!("{:<22} {}", action, hotkey);
            }
        }
    }

    Ok(())
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .and_then(|c| c.logging.level.parse().ok())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    let log_file = config.as_ref().and_then(|c| c.logging.file.clone());
    if let Some(file) = log_file {
        if let Ok(f) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file)
        {
            let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
            // Echo to the console only when attached to a terminal
            let is_tty = atty::is(atty::Stream::Stderr);

            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());
                if let Ok(mut guard) = write_mutex.lock() {
                    let _ = writeln!(guard, "{}", line);
                }
                if is_tty {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
            let _ = builder.try_init();
            return;
        }
    }
    builder.format(|fmt, record| {
        let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
        writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
    });
    let _ = builder.try_init();
}
