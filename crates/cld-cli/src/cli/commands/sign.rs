//! `cld sign` – API signature of request parameters.

use anyhow::{bail, Result};
use cld_core::api::{self, Param, Params};
use cld_core::Configuration;

/// `key=value` arguments; a repeated key becomes a list.
pub fn parse_pairs(pairs: &[String]) -> Result<Params> {
    let mut params = Params::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("expected KEY=VALUE, got {pair:?}");
        };
        if key.is_empty() {
            bail!("empty parameter name in {pair:?}");
        }
        match params.remove(key) {
            None => {
                params.insert(key.to_string(), Param::from(value));
            }
            Some(Param::Value(first)) => {
                params.insert(key.to_string(), Param::List(vec![first, value.to_string()]));
            }
            Some(Param::List(mut list)) => {
                list.push(value.to_string());
                params.insert(key.to_string(), Param::List(list));
            }
        }
    }
    Ok(params)
}

pub fn signature(cfg: &Configuration, pairs: &[String]) -> Result<String> {
    let params = parse_pairs(pairs)?;
    let secret = cfg.cloud.api_secret()?;
    Ok(api::sign_parameters(&params, secret, cfg.cloud.signature_algorithm))
}

pub fn run_sign(cfg: &Configuration, pairs: &[String]) -> Result<()> {
    println!("{}", signature(cfg, pairs)?);
    Ok(())
}
