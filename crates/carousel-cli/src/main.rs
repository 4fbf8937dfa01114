mod cli;
mod handlers;
mod output;

use carousel_core::CarouselConfig;
use carousel_source::SourceSpec;
use carousel_tui::App;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("CAROUSEL_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        // The TUI owns the screen, so anything below warnings stays quiet.
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match CarouselConfig::load_from(path) {
            Ok(config) => config,
            Err(e) => output::output_error(&e.to_string()),
        },
        None => CarouselConfig::load(),
    };

    match cli.command {
        None => {
            let spec = SourceSpec::resolve(cli.file, cli.url, &config.source);
            let source = spec.open(&config.source)?;
            let watch_path = if cli.watch {
                spec.watch_path().cloned()
            } else {
                None
            };
            let mut app = App::new(config, source, watch_path);
            app.run().await?;
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "carousel",
                &mut std::io::stdout(),
            );
        }
        Some(cmd) => {
            let result = match cmd {
                Commands::Inspect(args) => handlers::inspect::handle(&config, args).await,
                Commands::Simulate(args) => handlers::simulate::handle(&config, args).await,
                Commands::Completions { .. } => Ok(()),
            };
            if let Err(e) = result {
                output::output_error(&format!("{:#}", e));
            }
        }
    }

    Ok(())
}
