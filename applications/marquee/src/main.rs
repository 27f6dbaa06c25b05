/// Marquee - movie discovery and collection manager
use anyhow::Context;
use clap::{Parser, Subcommand};
use marquee::{ActionOutcome, App, AppConfig, SearchOutcome, TerminalFrontend};
use marquee_core::SearchMode;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Movie discovery and collection manager", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "MARQUEE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show collections and keep them up to date until interrupted
    Watch,
    /// Search by theme (optionally ending with a movie count) or Letterboxd URL
    Search {
        /// Search text, e.g. `heist movies 5`
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Where candidates may come from: library, mixed or discovery
        #[arg(short, long)]
        mode: Option<SearchMode>,
        /// Flip the select-all state before creating
        #[arg(long)]
        toggle_all: bool,
        /// Flip individual rows (1-based) before creating
        #[arg(long, num_args = 1..)]
        select: Vec<usize>,
        /// Create a collection from the checked rows
        #[arg(long)]
        create: bool,
    },
    /// List collections
    Collections,
    /// Delete a collection
    Delete {
        /// Collection name
        name: String,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Show settings, or change and save them
    Settings {
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        root_folder: Option<String>,
        #[arg(long)]
        quality_profile: Option<String>,
        #[arg(long)]
        plex_library: Option<String>,
    },
    /// Drop the backend's library cache
    ClearCache,
    /// Check the backend's model server
    CheckModel,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marquee=info,marquee_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;

    let assume_yes = matches!(cli.command, Commands::Delete { yes: true, .. });
    let watching = matches!(cli.command, Commands::Watch);
    let frontend = TerminalFrontend::new(assume_yes).with_examples(watching);
    let app = App::new(&config, Arc::new(frontend))?;

    match cli.command {
        Commands::Watch => watch(app).await?,
        Commands::Search {
            text,
            mode,
            toggle_all,
            select,
            create,
        } => search(&app, &text.join(" "), mode, toggle_all, &select, create).await?,
        Commands::Collections => {
            let session = app.session();
            session.language().apply_current().await;
            anyhow::ensure!(
                session.collections().refresh().await,
                "could not fetch collections"
            );
        }
        Commands::Delete { name, .. } => {
            let session = app.session();
            session.settings().load().await;
            let outcome = session.collections().delete(&name).await;
            anyhow::ensure!(
                outcome != ActionOutcome::Failed,
                "could not delete collection {:?}",
                name
            );
        }
        Commands::Settings {
            language,
            model,
            root_folder,
            quality_profile,
            plex_library,
        } => {
            let settings = app.session().settings();
            anyhow::ensure!(settings.load().await, "could not load settings");

            let changed = language.is_some()
                || model.is_some()
                || root_folder.is_some()
                || quality_profile.is_some()
                || plex_library.is_some();
            if changed {
                settings
                    .edit(|values| {
                        let fields = [
                            (&mut values.language, language),
                            (&mut values.model, model),
                            (&mut values.root_folder, root_folder),
                            (&mut values.quality_profile, quality_profile),
                            (&mut values.plex_library, plex_library),
                        ];
                        for (field, value) in fields {
                            if let Some(value) = value {
                                *field = value;
                            }
                        }
                    })
                    .await;
                anyhow::ensure!(settings.save().await, "could not save settings");
                settings.load().await;
            }
        }
        Commands::ClearCache => {
            let ack = app
                .session()
                .api()
                .clear_cache()
                .await
                .context("could not clear the library cache")?;
            if !ack.message.is_empty() {
                println!("{}", ack.message);
            }
        }
        Commands::CheckModel => {
            let report = app
                .session()
                .api()
                .test_model_server()
                .await
                .context("could not reach the model server")?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

async fn watch(mut app: App) -> anyhow::Result<()> {
    app.start().await;
    tracing::info!("Watching collections, press Ctrl-C to stop");

    tokio::signal::ctrl_c().await?;

    app.shutdown().await;
    Ok(())
}

async fn search(
    app: &App,
    text: &str,
    mode: Option<SearchMode>,
    toggle_all: bool,
    select: &[usize],
    create: bool,
) -> anyhow::Result<()> {
    let session = app.session();
    session.settings().load().await;
    if let Some(mode) = mode {
        session.search().set_mode(mode).await;
    }

    match session.search().search(text).await {
        SearchOutcome::Rendered { .. } => {}
        SearchOutcome::Ignored | SearchOutcome::Failed => anyhow::bail!("search failed"),
    }

    if toggle_all {
        session.search().toggle_all().await;
    }
    for row in select {
        let flipped = match row.checked_sub(1) {
            Some(index) => session.search().toggle(index).await,
            None => false,
        };
        anyhow::ensure!(flipped, "no row {} in the results", row);
    }

    if create {
        let outcome = session.collections().create_from_results().await;
        anyhow::ensure!(
            outcome == ActionOutcome::Done,
            "collection was not created"
        );
    }

    Ok(())
}
