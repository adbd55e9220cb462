//! Tests for `cld url`.

use super::{config, parse};
use crate::cli::commands::{delivery_url, UrlArgs};
use crate::cli::CliCommand;

fn url_args(args: &[&str]) -> UrlArgs {
    let mut full = vec!["cld", "url"];
    full.extend_from_slice(args);
    match parse(&full) {
        CliCommand::Url(args) => args,
        _ => panic!("expected Url"),
    }
}

#[test]
fn cli_parse_url_defaults() {
    let args = url_args(&["sample"]);
    assert_eq!(args.public_id, "sample");
    assert_eq!(args.resource_type, "image");
    assert_eq!(args.delivery_type, "upload");
    assert!(args.transformation.is_none());
    assert!(!args.sign);
}

#[test]
fn cli_parse_url_options() {
    let args = url_args(&[
        "clip",
        "-t",
        "c_fill,w_100",
        "--resource-type",
        "video",
        "--type",
        "private",
        "-f",
        "mp4",
        "--version",
        "12",
        "--sign",
    ]);
    assert_eq!(args.transformation.as_deref(), Some("c_fill,w_100"));
    assert_eq!(args.resource_type, "video");
    assert_eq!(args.delivery_type, "private");
    assert_eq!(args.format.as_deref(), Some("mp4"));
    assert_eq!(args.version.as_deref(), Some("12"));
    assert!(args.sign);
}

#[test]
fn url_with_transformation() {
    let args = url_args(&["sample", "-t", "c_fill,w_100", "-f", "jpg"]);
    assert_eq!(
        delivery_url(&config(), &args).unwrap(),
        "https://res.cloudinary.com/test123/image/upload/c_fill,w_100/sample.jpg"
    );
}

#[test]
fn signed_url() {
    let args = url_args(&["sample", "--sign"]);
    let url = delivery_url(&config(), &args).unwrap();
    assert!(url.starts_with("https://res.cloudinary.com/test123/image/upload/s--"));
    assert!(url.ends_with("--/sample"));
}

#[test]
fn unknown_resource_type_is_an_error() {
    let args = url_args(&["sample", "--resource-type", "audio"]);
    assert!(delivery_url(&config(), &args).is_err());
}
