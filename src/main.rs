use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cinepulse::{CinePulse, Config, FileStore, Genre, Source, Status, view};

#[derive(Parser, Debug)]
#[command(name = "cinepulse", version, about)]
struct Args {
    /// Directory holding the history blob and `config.toml`.
    ///
    /// Falls back to `CINEPULSE_DATA_DIR`, then `[storage] data_dir`, then `./.cinepulse`.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file (default: `<data-dir>/config.toml`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch a random film and quote, save the profile, and show it.
    Generate {
        #[arg(long, short, default_value_t = Genre::Fantasy)]
        genre: Genre,

        /// Run this many generations at once; each appends its own profile.
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// List saved profiles.
    History,
    /// Delete all saved profiles.
    Clear,
    /// Print the saved profiles as indented JSON.
    Export,
    /// List the available genres.
    Genres,
}

fn source_note(src: Source) -> &'static str {
    match src {
        Source::Live => "live",
        Source::Fallback => "offline fallback",
    }
}

/// Loads the config, builds the client and opens the history store.
///
/// An explicit `--config` must exist; the implicit `<data-dir>/config.toml` may not.
fn open_app(data_dir: Option<&Path>, config: Option<&Path>) -> anyhow::Result<CinePulse<FileStore>> {
    let config = match config {
        Some(path) => Config::load_required(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        // The config file may itself name the data dir, so resolve the flag/env first.
        None => Config::load(&Config::path(&Config::default().data_dir(data_dir)))?,
    };
    let data_dir = config.data_dir(data_dir);

    let client = config.client()?;
    Ok(CinePulse::open(&client, FileStore::new(&data_dir))?)
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Generate { genre, count } => {
            let app = open_app(args.data_dir.as_deref(), args.config.as_deref())?;
            eprintln!("{}", view::genre_label(genre));
            eprintln!("{}", Status::Loading);

            let runs = (0..count.max(1)).map(|_| app.generate_profile(genre));
            let mut failed = false;
            for outcome in futures::future::join_all(runs).await {
                match outcome {
                    Ok(generated) => {
                        println!("{}", view::render_profile(&generated.profile));
                        println!(
                            "(film: {}, quote: {})\n",
                            source_note(generated.film_source),
                            source_note(generated.quote_source)
                        );
                    }
                    Err(err) => {
                        tracing::error!("{err}");
                        failed = true;
                    }
                }
            }

            println!("History:");
            for line in app.render_history().await {
                println!("  {line}");
            }

            if failed {
                eprintln!("{}", Status::Failed);
                return Ok(ExitCode::FAILURE);
            }
            eprintln!("{}", Status::Generated);
        }
        Command::History => {
            let app = open_app(args.data_dir.as_deref(), args.config.as_deref())?;
            for line in app.render_history().await {
                println!("{line}");
            }
        }
        Command::Clear => {
            let app = open_app(args.data_dir.as_deref(), args.config.as_deref())?;
            app.clear_history().await?;
            println!("{}", view::EMPTY_HISTORY);
        }
        Command::Export => {
            let app = open_app(args.data_dir.as_deref(), args.config.as_deref())?;
            println!("{}", app.export_json().await?);
        }
        Command::Genres => {
            for g in Genre::ALL {
                println!("{g}");
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
