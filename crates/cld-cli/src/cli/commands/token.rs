//! `cld token` – auth token for token-based access control.

use anyhow::{bail, Result};
use clap::Args;
use cld_core::{AuthToken, Configuration};

#[derive(Debug, Clone, Default, Args)]
pub struct TokenArgs {
    /// Hex encryption key; defaults to the configured token key.
    #[arg(long)]
    pub key: Option<String>,

    /// Access control list pattern, e.g. /image/*. Repeatable.
    #[arg(long)]
    pub acl: Vec<String>,

    /// Sign a single URL path instead of an ACL.
    #[arg(long)]
    pub url: Option<String>,

    /// Seconds of validity from the start time.
    #[arg(long)]
    pub duration: Option<u64>,

    /// Unix time the token becomes valid.
    #[arg(long)]
    pub start_time: Option<u64>,

    /// Absolute unix expiration time.
    #[arg(long)]
    pub expiration: Option<u64>,

    /// Restrict to a client IP.
    #[arg(long)]
    pub ip: Option<String>,
}

/// Token from the configured settings overridden by `args`.
pub fn token(cfg: &Configuration, args: &TokenArgs) -> Result<String> {
    let base = match (&args.key, &cfg.auth_token) {
        (Some(key), _) => AuthToken::new(key.clone()),
        (None, Some(configured)) => configured.clone(),
        (None, None) => bail!("no token key: pass --key or set [auth_token] key in the config"),
    };

    let mut overrides = AuthToken::new(base.key.clone());
    for acl in &args.acl {
        overrides = overrides.acl(acl.clone());
    }
    if let Some(url) = &args.url {
        overrides = overrides.url(url.clone());
    }
    if let Some(duration) = args.duration {
        overrides = overrides.duration(duration);
    }
    if let Some(start) = args.start_time {
        overrides = overrides.start_time(start);
    }
    if let Some(expiration) = args.expiration {
        overrides = overrides.expiration(expiration);
    }
    if let Some(ip) = &args.ip {
        overrides = overrides.ip(ip.clone());
    }

    Ok(base.merge(&overrides).generate()?)
}

pub fn run_token(cfg: &Configuration, args: &TokenArgs) -> Result<()> {
    println!("{}", token(cfg, args)?);
    Ok(())
}
