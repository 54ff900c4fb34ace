//! Fresh Farm CLI - terminal front end for the demo storefront.
//!
//! # Usage
//!
//! ```bash
//! # List products and the deal of the day
//! ff-cli catalog
//!
//! # Scripted sign-in and checkout
//! ff-cli demo --phone +8801712345678
//!
//! # Interactive session
//! ff-cli shell
//! ```
//!
//! # Commands
//!
//! - `catalog` - Print the product grid and the deal
//! - `demo` - Run a scripted OTP sign-in and add two products to the cart
//! - `shell` - Interactive session with a live deal countdown

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fresh_farm_storefront::error::{AppError, Result};
use fresh_farm_storefront::{SessionCartStore, StorefrontConfig, spawn_countdown};

mod commands;

use commands::shell::Shell;

#[derive(Parser)]
#[command(name = "ff-cli")]
#[command(author, version, about = "Fresh Farm storefront in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products and the deal of the day
    Catalog,
    /// Run a scripted sign-in and checkout
    Demo {
        /// Phone number to sign in with
        #[arg(short, long, default_value = commands::demo::DEFAULT_PHONE)]
        phone: String,
    },
    /// Start an interactive session
    Shell,
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing_subscriber::fmt().with_writer(io::stderr).init();
            tracing::error!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Sentry must be initialized before the tracing subscriber. The guard
    // flushes queued events when it drops at the end of `main`.
    let _sentry_guard = init_sentry(&config);

    // Logs go to stderr so they never interleave with rendered output
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fresh_farm_cli=info,fresh_farm_storefront=warn".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    report(run(cli, config).await)
}

/// Log a failed command and map the outcome to the process exit status.
///
/// Returning the status (rather than exiting in place) lets `main` unwind so
/// the Sentry guard drops and flushes the error event.
fn report(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Command failed: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: StorefrontConfig) -> Result<()> {
    let deal = config.deal();
    let catalog = config.catalog(&deal)?;

    match cli.command {
        Commands::Catalog => commands::catalog::list(&mut io::stdout().lock(), &catalog, &deal)?,
        Commands::Demo { phone } => {
            let mut store = SessionCartStore::new();
            commands::demo::run(&mut io::stdout().lock(), &mut store, &catalog, &phone)?;
        }
        Commands::Shell => {
            let countdown = spawn_countdown(deal.countdown, config.tick);
            let mut shell = Shell::new(
                SessionCartStore::new(),
                catalog,
                deal,
                Some(countdown.subscribe()),
            );

            // Stdin reads block, so the session runs off the async workers
            // while the countdown task keeps ticking.
            let result = tokio::task::spawn_blocking(move || {
                shell.run(io::stdin().lock(), io::stdout().lock())
            })
            .await
            .map_err(|e| AppError::Internal(format!("shell task failed: {e}")));

            countdown.cancel();
            result??;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_maps_outcome_to_exit_code() {
        assert_eq!(report(Ok(())), ExitCode::SUCCESS);
        assert_eq!(
            report(Err(AppError::Internal("shell task failed".to_string()))),
            ExitCode::FAILURE
        );
    }

    #[test]
    fn test_cli_parses_demo_phone() {
        let cli = Cli::try_parse_from(["ff-cli", "demo", "--phone", "+8801912345678"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Demo { phone }) if phone == "+8801912345678"
        ));

        let cli = Cli::try_parse_from(["ff-cli", "demo"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Demo { phone }) if phone == commands::demo::DEFAULT_PHONE
        ));
    }
}
