//! CLI command handlers, one file per command.

mod completions;
mod config;
mod sign;
mod token;
mod transform;
mod url;

pub use completions::{run_completions, run_man};
pub use config::run_config;
pub use sign::{parse_pairs, run_sign, signature};
pub use token::{run_token, token, TokenArgs};
pub use transform::{run_transform, transformation_string};
pub use url::{delivery_url, run_url, UrlArgs};
