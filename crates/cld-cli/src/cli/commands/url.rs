//! `cld url` – print the delivery URL of an asset.

use anyhow::{Context, Result};
use clap::Args;
use cld_core::{Asset, AssetDescriptor, AssetType, Configuration, DeliveryType, Transformation};

#[derive(Debug, Clone, Args)]
pub struct UrlArgs {
    /// Public id of the asset (or the remote URL for fetch).
    pub public_id: String,

    /// Transformation string, e.g. c_fill,w_100/e_sepia.
    #[arg(short, long)]
    pub transformation: Option<String>,

    /// image, video or raw.
    #[arg(long, default_value = "image")]
    pub resource_type: String,

    /// Delivery type: upload, private, authenticated, fetch, ...
    #[arg(long = "type", default_value = "upload")]
    pub delivery_type: String,

    /// Extension appended to the public id.
    #[arg(short, long)]
    pub format: Option<String>,

    #[arg(long)]
    pub version: Option<String>,

    /// SEO suffix (private CDN / custom domain only for images).
    #[arg(long)]
    pub suffix: Option<String>,

    /// Add an `s--...--` signature.
    #[arg(long)]
    pub sign: bool,
}

/// Build the URL described by `args`.
pub fn delivery_url(cfg: &Configuration, args: &UrlArgs) -> Result<String> {
    let asset_type: AssetType = args.resource_type.parse()?;
    let delivery_type: DeliveryType = args.delivery_type.parse()?;

    let mut asset = Asset::new(AssetDescriptor::new(args.public_id.clone(), asset_type))
        .delivery_type(delivery_type);
    if let Some(format) = &args.format {
        asset = asset.format(format.clone());
    }
    if let Some(version) = &args.version {
        asset = asset.version(version.clone());
    }
    if let Some(suffix) = &args.suffix {
        asset = asset.suffix(suffix.clone());
    }
    if args.sign {
        asset = asset.sign_url(true);
    }
    if let Some(raw) = &args.transformation {
        asset = asset.transformation(Transformation::from(raw.as_str()));
    }

    asset
        .to_url(cfg)
        .with_context(|| format!("build url for {}", args.public_id))
}

pub fn run_url(cfg: &Configuration, args: &UrlArgs) -> Result<()> {
    let url = delivery_url(cfg, args)?;
    tracing::debug!(public_id = %args.public_id, "built delivery url");
    println!("{url}");
    Ok(())
}
