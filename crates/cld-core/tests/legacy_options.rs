//! Integration test: option maps rendered through the legacy translator
//! and used for delivery URLs.

mod common;

use cld_core::legacy::generate_transformation_string;
use cld_core::transformation::Transformation;
use cld_core::{Asset, Error};
use serde_json::json;

#[test]
fn option_map_to_url() {
    let options = json!({
        "width": 100,
        "height": 100,
        "crop": "fill",
        "overlay": {"text": "Hello", "font_family": "Arial", "font_size": 20},
        "effect": ["sepia", 40]
    });
    let raw = generate_transformation_string(&options).unwrap();
    assert_eq!(raw, "c_fill,e_sepia:40,h_100,l_text:Arial_20:Hello,w_100");

    let url = Asset::image("sample")
        .transformation(Transformation::from(raw.as_str()))
        .to_url(&common::config())
        .unwrap();
    assert_eq!(
        url,
        "https://res.cloudinary.com/test123/image/upload/c_fill,e_sepia:40,h_100,l_text:Arial_20:Hello,w_100/sample"
    );
}

#[test]
fn chained_list_of_options() {
    let options = json!([
        {"width": 200, "crop": "scale"},
        {"overlay": "badge", "gravity": "north_east", "flags": "layer_apply"},
        {"quality": "auto", "fetch_format": "auto"}
    ]);
    assert_eq!(
        generate_transformation_string(&options).unwrap(),
        "c_scale,w_200/fl_layer_apply,g_north_east,l_badge/f_auto,q_auto"
    );
}

#[test]
fn layer_errors_surface() {
    let err = generate_transformation_string(&json!({"overlay": {"text": "hi"}})).unwrap_err();
    assert!(matches!(err, Error::InvalidLayer(_)));
}

#[test]
fn scalar_input_is_rejected() {
    assert!(generate_transformation_string(&json!(42)).is_err());
}
