//! CLI entry point for clubsite

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clubsite::commands::list::ListKind;
use clubsite::commands::show::ShowKind;
use clubsite::content::ProjectStatus;
use clubsite::query::{CategoryFilter, StatusFilter};

#[derive(Parser)]
#[command(name = "clubsite")]
#[command(version)]
#[command(about = "A static site generator for a student aerospace club", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site with sample content
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Clean the public folder
    Clean,

    /// List site content
    List {
        #[command(subcommand)]
        kind: ListCommand,
    },

    /// Show one record by id
    Show {
        #[arg(value_enum)]
        kind: ShowArg,

        /// Record id
        id: String,
    },

    /// Display version information
    Version,
}

#[derive(Subcommand)]
enum ListCommand {
    /// Events, filtered by status and category
    Events {
        /// all, upcoming or past
        #[arg(short, long, default_value = "upcoming")]
        status: StatusFilter,

        /// all, or a category name
        #[arg(short = 'k', long, default_value = "all")]
        category: CategoryFilter,
    },
    /// Featured upcoming events shown on the home page
    Featured,
    /// Project teams
    Projects {
        /// active or completed
        #[arg(short, long)]
        status: Option<ProjectStatus>,
    },
    /// Sponsors grouped by tier
    Sponsors,
    /// Executive team
    Team,
    /// News articles
    News {
        /// Maximum number of articles
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ShowArg {
    Event,
    Project,
    Sponsor,
    Member,
    News,
}

impl From<ListCommand> for ListKind {
    fn from(command: ListCommand) -> Self {
        match command {
            ListCommand::Events { status, category } => ListKind::Events { status, category },
            ListCommand::Featured => ListKind::Featured,
            ListCommand::Projects { status } => ListKind::Projects { status },
            ListCommand::Sponsors => ListKind::Sponsors,
            ListCommand::Team => ListKind::Team,
            ListCommand::News { limit } => ListKind::News { limit },
        }
    }
}

impl From<ShowArg> for ShowKind {
    fn from(arg: ShowArg) -> Self {
        match arg {
            ShowArg::Event => ShowKind::Event,
            ShowArg::Project => ShowKind::Project,
            ShowArg::Sponsor => ShowKind::Sponsor,
            ShowArg::Member => ShowKind::Member,
            ShowArg::News => ShowKind::News,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "clubsite=debug,info"
    } else {
        "clubsite=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            clubsite::commands::init::init_site(&target_dir)?;
            println!("Initialized new club site in {:?}", target_dir);
        }

        Commands::Generate { watch } => {
            let site = clubsite::Site::new(&base_dir)?;
            tracing::info!("Generating static files...");

            site.generate()?;
            println!("Generated successfully!");

            if watch {
                clubsite::commands::generate::watch(&site)?;
            }
        }

        Commands::Clean => {
            let site = clubsite::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { kind } => {
            let site = clubsite::Site::new(&base_dir)?;
            clubsite::commands::list::run(&site, &kind.into())?;
        }

        Commands::Show { kind, id } => {
            let site = clubsite::Site::new(&base_dir)?;
            clubsite::commands::show::run(&site, kind.into(), &id)?;
        }

        Commands::Version => {
            println!("clubsite version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
