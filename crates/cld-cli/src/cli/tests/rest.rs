//! Tests for transform, sign, token, config, completions and man.

use super::{config, parse};
use crate::cli::commands::{parse_pairs, signature, token, transformation_string, TokenArgs};
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use cld_core::api::Param;
use cld_core::signature::{hex_signature, SignatureAlgorithm};

#[test]
fn cli_parse_transform() {
    match parse(&["cld", "transform", "{\"width\":100}", "--implicit-crop"]) {
        CliCommand::Transform {
            json,
            implicit_crop,
        } => {
            assert_eq!(json, "{\"width\":100}");
            assert!(implicit_crop);
        }
        _ => panic!("expected Transform"),
    }
}

#[test]
fn transform_renders_options() {
    assert_eq!(
        transformation_string(r#"{"width":100,"height":50,"crop":"fill"}"#, false).unwrap(),
        "c_fill,h_50,w_100"
    );
    assert_eq!(transformation_string(r#"{"width":100}"#, false).unwrap(), "");
    assert_eq!(transformation_string(r#"{"width":100}"#, true).unwrap(), "w_100");
    assert!(transformation_string("not json", false).is_err());
}

#[test]
fn cli_parse_sign_requires_params() {
    assert!(Cli::try_parse_from(["cld", "sign"]).is_err());
    match parse(&["cld", "sign", "public_id=sample", "timestamp=1"]) {
        CliCommand::Sign { params } => assert_eq!(params, vec!["public_id=sample", "timestamp=1"]),
        _ => panic!("expected Sign"),
    }
}

#[test]
fn sign_pairs() {
    let pairs = vec!["tags=a".to_string(), "tags=b".to_string(), "public_id=x".to_string()];
    let params = parse_pairs(&pairs).unwrap();
    assert_eq!(params["tags"], Param::List(vec!["a".into(), "b".into()]));

    assert_eq!(
        signature(&config(), &pairs).unwrap(),
        hex_signature("public_id=x&tags=a,b", "b", SignatureAlgorithm::Sha1)
    );
    assert!(parse_pairs(&["novalue".to_string()]).is_err());
    assert!(parse_pairs(&["=x".to_string()]).is_err());
}

#[test]
fn cli_parse_token() {
    match parse(&["cld", "token", "--acl", "/image/*", "--acl", "/video/*", "--duration", "300"]) {
        CliCommand::Token(args) => {
            assert_eq!(args.acl, vec!["/image/*", "/video/*"]);
            assert_eq!(args.duration, Some(300));
            assert!(args.key.is_none());
        }
        _ => panic!("expected Token"),
    }
}

#[test]
fn token_needs_a_key() {
    let args = TokenArgs {
        acl: vec!["/image/*".into()],
        duration: Some(300),
        ..TokenArgs::default()
    };
    assert!(token(&config(), &args).is_err());

    let args = TokenArgs {
        key: Some("00112233FF99".into()),
        start_time: Some(1111111111),
        ..args
    };
    let token = token(&config(), &args).unwrap();
    assert!(token.starts_with("__cld_token__=st=1111111111~exp=1111111411~acl=%2fimage%2f*~hmac="));
}

#[test]
fn cli_parse_config_and_generators() {
    match parse(&["cld", "config", "--path"]) {
        CliCommand::Config { path } => assert!(path),
        _ => panic!("expected Config"),
    }
    match parse(&["cld", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
    assert!(matches!(parse(&["cld", "man"]), CliCommand::Man));
}
