//! Delivery URL, transformation and signed request builder for the
//! Cloudinary media cloud.
//!
//! The heart of the crate is [`transformation`]: a fluent builder that
//! accumulates typed actions (resize, effects, layers, ...) and renders
//! them into the comma/slash-delimited transformation grammar understood
//! by the delivery CDN. [`asset`] turns a public id plus a transformation
//! into a (optionally signed) delivery URL; [`api`] builds signed
//! parameters and endpoints for the upload/admin APIs without sending
//! anything over the network.

pub mod api;
pub mod asset;
pub mod auth_token;
pub mod config;
pub mod error;
pub mod escape;
pub mod legacy;
pub mod logging;
pub mod signature;
pub mod tag;
pub mod transformation;

pub use asset::{Asset, AssetDescriptor, AssetType, DeliveryType};
pub use auth_token::AuthToken;
pub use config::Configuration;
pub use error::{Error, Result};
pub use transformation::Transformation;
