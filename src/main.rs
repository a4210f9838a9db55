//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::content::ContentKind;
use folio::gallery::ImageFilter;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author = "Joel Kariyalil")]
#[command(version)]
#[command(about = "Content engine for a portfolio and blog site", long_about = None)]
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
    /// Write the JSON snapshot and copy content assets
    #[command(alias = "g")]
    Generate,

    /// Start a local server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Skip generating the snapshot before serving
        #[arg(long)]
        no_generate: bool,
    },

    /// List items of a kind (blog or project)
    List {
        kind: ContentKind,

        /// Only featured items
        #[arg(short, long)]
        featured: bool,
    },

    /// Show a single item
    Show {
        kind: ContentKind,
        slug: String,

        /// Print the full record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the tag vocabulary of a kind
    Tags { kind: ContentKind },

    /// Filter items by tags (all must match)
    Filter {
        kind: ContentKind,

        /// Comma separated tags
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,

        /// Group the matches by shared tags
        #[arg(short, long)]
        group: bool,
    },

    /// Validate front matter and asset references
    Check {
        /// Create missing assets directories
        #[arg(long)]
        fix: bool,
    },

    /// Create a new blog post or project
    New {
        kind: ContentKind,

        /// Title of the new item
        title: String,

        /// Directory name (defaults to the slugified title)
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// Manage the photo gallery index
    Gallery {
        #[command(subcommand)]
        command: GalleryCommands,
    },

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

#[derive(Subcommand)]
enum GalleryCommands {
    /// Rebuild the index from a directory of images
    Index {
        /// Directory holding the image files
        #[arg(default_value = "public/images/clicks")]
        dir: PathBuf,

        /// URL prefix the images are served under
        #[arg(short, long, default_value = "/images/clicks")]
        prefix: String,
    },

    /// List images, optionally filtered
    List {
        /// Comma separated tags
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,

        /// Case-insensitive search over name, description, location and tags
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Print the gallery tag vocabulary
    Tags,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
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
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Generate => {
            let app = folio::Folio::new(&base_dir)?;
            tracing::info!("Generating snapshot...");
            let stats = app.generate()?;
            println!(
                "Generated {} items and {} gallery images",
                stats.items, stats.images
            );
        }

        Commands::Server {
            port,
            ip,
            open,
            no_generate,
        } => {
            let app = folio::Folio::new(&base_dir)?;

            if !no_generate {
                tracing::info!("Generating snapshot...");
                app.generate()?;
            }

            tracing::info!("Starting server at http://{}:{}", ip, port);
            folio::server::start(&app, &ip, port, open).await?;
        }

        Commands::List { kind, featured } => {
            let app = folio::Folio::new(&base_dir)?;
            folio::commands::list::run(&app, kind, featured)?;
        }

        Commands::Show { kind, slug, json } => {
            let app = folio::Folio::new(&base_dir)?;
            folio::commands::show::run(&app, kind, &slug, json)?;
        }

        Commands::Tags { kind } => {
            let app = folio::Folio::new(&base_dir)?;
            folio::commands::list::tags(&app, kind)?;
        }

        Commands::Filter { kind, tags, group } => {
            let app = folio::Folio::new(&base_dir)?;
            folio::commands::filter::run(&app, kind, &tags, group)?;
        }

        Commands::Check { fix } => {
            let app = folio::Folio::new(&base_dir)?;
            let report = folio::commands::check::run(&app, fix)?;
            for (id, reason) in &report.invalid {
                println!("invalid  {}: {}", id, reason);
            }
            for (id, reference) in &report.missing_assets {
                println!("missing  {}: {}", id, reference);
            }
            if report.created_dirs > 0 {
                println!("Created {} assets directories", report.created_dirs);
            }
            if !report.is_clean() {
                anyhow::bail!(
                    "{} of {} items have problems",
                    report.invalid.len() + report.missing_assets.len(),
                    report.checked
                );
            }
            println!("Checked {} items, all good", report.checked);
        }

        Commands::New { kind, title, slug } => {
            let app = folio::Folio::new(&base_dir)?;
            tracing::info!("Creating new {} with title: {}", kind, title);
            folio::commands::new::create_item(&app, kind, &title, slug.as_deref())?;
        }

        Commands::Gallery { command } => {
            let app = folio::Folio::new(&base_dir)?;
            match command {
                GalleryCommands::Index { dir, prefix } => {
                    let dir = if dir.is_absolute() {
                        dir
                    } else {
                        base_dir.join(dir)
                    };
                    let count = folio::commands::gallery::index(&app, &dir, &prefix)?;
                    println!("Indexed {} images", count);
                }
                GalleryCommands::List { tags, query } => {
                    let filter = ImageFilter {
                        tags,
                        search_query: query,
                    };
                    folio::commands::gallery::list(&app, &filter)?;
                }
                GalleryCommands::Tags => folio::commands::gallery::tags(&app)?,
            }
        }

        Commands::Clean => {
            let app = folio::Folio::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            app.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
