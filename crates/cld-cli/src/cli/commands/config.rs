//! `cld config` – effective configuration as TOML.

use anyhow::Result;
use cld_core::Configuration;

pub fn run_config(cfg: &Configuration) -> Result<()> {
    print!("{}", toml::to_string_pretty(&cfg.redacted())?);
    Ok(())
}
