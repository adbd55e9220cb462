//! CLI parse and handler tests (split by command group).

use super::{Cli, CliCommand};
use clap::Parser;
use cld_core::Configuration;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

pub(super) fn config() -> Configuration {
    Configuration::from_cloudinary_url("cloudinary://a:b@test123").unwrap()
}

mod url;
mod rest;
