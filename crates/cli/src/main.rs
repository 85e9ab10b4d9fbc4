//! # Webgate
//!
//! Command-line front end for the request policy engine

mod bootstrap;
mod commands;
mod di;

use bootstrap::init_logging;
use clap::{Parser, Subcommand};
use commands::GenerateArgs;
use std::path::PathBuf;
use webgate_domain::LoggingConfig;

#[derive(Parser)]
#[command(name = "webgate")]
#[command(version)]
#[command(about = "Policy-driven request gatekeeper for restricted browsing shells")]
struct Cli {
    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(short = 'l', long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load and validate a policy document
    Check {
        /// Policy document (.json or .toml)
        #[arg(short = 'c', long, default_value = "config.json")]
        config: PathBuf,
    },

    /// Classify one or more request URLs against a policy
    Classify {
        /// Policy document (.json or .toml)
        #[arg(short = 'c', long, default_value = "config.json")]
        config: PathBuf,

        /// Treat the URLs as sub-resource fetches instead of top-level navigations
        #[arg(short = 's', long)]
        sub_resource: bool,

        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Generate a policy document for a site
    Generate {
        /// Site URL; its host becomes the primary allowed domain
        #[arg(short = 'u', long)]
        url: String,

        /// Extra allowed domain (repeatable)
        #[arg(short = 'a', long = "additional-domain")]
        additional_domains: Vec<String>,

        #[arg(long)]
        block_media: bool,

        #[arg(long)]
        ads_blocker: bool,

        /// Bypass TLS certificate errors in the host. Security downgrade.
        #[arg(long)]
        no_ssl: bool,

        /// Orientation keyword: PORTRAIT, LANDSCAPE or anything else for unlocked
        #[arg(long, default_value = "AUTO")]
        view_mode: String,

        /// Start URL (default: https://<domain>)
        #[arg(long)]
        start_url: Option<String>,

        /// Write to a file instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&LoggingConfig::new(cli.log_level));

    match cli.command {
        Command::Check { config } => commands::run_check(&config).await,
        Command::Classify {
            config,
            sub_resource,
            urls,
        } => commands::run_classify(&config, &urls, sub_resource).await,
        Command::Generate {
            url,
            additional_domains,
            block_media,
            ads_blocker,
            no_ssl,
            view_mode,
            start_url,
            output,
        } => {
            commands::run_generate(GenerateArgs {
                url,
                additional_domains,
                block_media,
                ads_blocker,
                no_ssl,
                view_mode,
                start_url,
                output,
            })
            .await
        }
    }
}
