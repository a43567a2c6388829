//! bandsite command line
//!
//! ```text
//! bandsite classify <URL>...
//! bandsite render [--config FILE] [--posts SRC] [--albums SRC] [--out DIR]
//! ```

mod config;
mod render;

use anyhow::Context;
use app_core::embeds::classify;
use clap::{ArgAction, Parser, Subcommand};
use config::SiteConfig;
use networking::ContentLoader;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bandsite")]
#[command(about = "Render the band site's news and album fragments", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify media URLs and print one JSON descriptor per line
    Classify {
        /// URLs to classify
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Load the data files and write the page fragments
    Render {
        /// Config file (defaults to ./bandsite.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Blog posts file or URL
        #[arg(long, env = "BANDSITE_POSTS")]
        posts: Option<String>,

        /// Albums file or URL
        #[arg(long, env = "BANDSITE_ALBUMS")]
        albums: Option<String>,

        /// Output directory
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// Write one JSON descriptor per URL, one per line
fn write_descriptors<W: Write>(out: &mut W, urls: &[String]) -> anyhow::Result<()> {
    for url in urls {
        serde_json::to_writer(&mut *out, &classify(url))?;
        writeln!(out)?;
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Classify { urls } => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            write_descriptors(&mut out, &urls)?;
            out.flush()?;
        }

        Commands::Render { config, posts, albums, out } => {
            let mut site = SiteConfig::resolve(config.as_deref()).context("loading config")?;
            if let Some(posts) = posts {
                site.data.posts = posts;
            }
            if let Some(albums) = albums {
                site.data.albums = albums;
            }
            if let Some(out) = out {
                site.output.dir = out;
            }

            let loader = ContentLoader::new();
            let fragments = render::render_site(&loader, &site).await;
            render::write_fragments(&site.output.dir, &fragments).await?;

            tracing::info!(
                count = fragments.len(),
                dir = %site.output.dir.display(),
                "render complete"
            );
        }
    }

    Ok(())
}
