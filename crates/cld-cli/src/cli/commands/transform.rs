//! `cld transform` – JSON option map to a transformation string.

use anyhow::{Context, Result};
use cld_core::legacy;

pub fn transformation_string(json: &str, implicit_crop: bool) -> Result<String> {
    let options: serde_json::Value = serde_json::from_str(json).context("parse options JSON")?;
    let rendered = if implicit_crop {
        legacy::generate_with_implicit_crop(&options)?
    } else {
        legacy::generate_transformation_string(&options)?
    };
    Ok(rendered)
}

pub fn run_transform(json: &str, implicit_crop: bool) -> Result<()> {
    println!("{}", transformation_string(json, implicit_crop)?);
    Ok(())
}
