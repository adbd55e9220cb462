//! CLI for building delivery URLs, transformation strings and signatures.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use cld_core::config;

use commands::{
    run_completions, run_config, run_man, run_sign, run_token, run_transform, run_url, TokenArgs,
    UrlArgs,
};

/// Top-level CLI for the Cloudinary URL builder.
#[derive(Debug, Parser)]
#[command(name = "cld")]
#[command(about = "cld: Cloudinary delivery URL, transformation and signature builder", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the delivery URL of an asset.
    Url(UrlArgs),

    /// Render a JSON option map (or array of maps) as a transformation string.
    Transform {
        /// Options, e.g. '{"width":100,"crop":"fill"}'.
        json: String,

        /// Keep width/height even without a crop mode.
        #[arg(long)]
        implicit_crop: bool,
    },

    /// Print the API signature of key=value parameters.
    Sign {
        /// Parameters to sign, e.g. public_id=sample timestamp=1315060510.
        #[arg(value_name = "KEY=VALUE", required = true)]
        params: Vec<String>,
    },

    /// Generate an auth token for token-based access.
    Token(TokenArgs),

    /// Show the effective configuration (secrets masked).
    Config {
        /// Print the config file location instead.
        #[arg(long)]
        path: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Render the man page to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Completions { shell } => return run_completions(shell),
            CliCommand::Man => return run_man(),
            CliCommand::Config { path: true } => {
                println!("{}", config::config_path()?.display());
                return Ok(());
            }
            _ => {}
        }

        let cfg = config::load()?;
        tracing::debug!("loaded config: {:?}", cfg.redacted());

        match cli.command {
            CliCommand::Url(args) => run_url(&cfg, &args)?,
            CliCommand::Transform {
                json,
                implicit_crop,
            } => run_transform(&json, implicit_crop)?,
            CliCommand::Sign { params } => run_sign(&cfg, &params)?,
            CliCommand::Token(args) => run_token(&cfg, &args)?,
            CliCommand::Config { .. } => run_config(&cfg)?,
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
