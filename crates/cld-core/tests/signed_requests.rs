//! Integration test: API parameter signing, download URLs and HTML tags.

mod common;

use cld_core::api::{self, ArchiveParams, DownloadOptions, Param, UploadParams};
use cld_core::signature::{hex_signature, SignatureAlgorithm};
use cld_core::tag::{ImageTag, VideoTag};
use cld_core::transformation::{Resize, Transformation};
use cld_core::{Asset, DeliveryType};

#[test]
fn upload_parameters_are_signed_with_sorted_pairs() {
    let params = UploadParams::new()
        .public_id("sample")
        .tag("a")
        .eager(&Transformation::new().resize(Resize::scale().width(100)))
        .timestamp(1_700_000_000)
        .signed(&common::config())
        .unwrap();
    let expected = hex_signature(
        "eager=c_scale,w_100&public_id=sample&tags=a&timestamp=1700000000",
        "b",
        SignatureAlgorithm::Sha1,
    );
    assert_eq!(params["signature"], Param::Value(expected));
    assert_eq!(params["api_key"], Param::Value("a".into()));
}

#[test]
fn private_download_url_points_at_download_endpoint() {
    let options = DownloadOptions {
        delivery_type: Some(DeliveryType::Private),
        attachment: true,
        timestamp: Some(1_700_000_000),
        ..DownloadOptions::default()
    };
    let url = api::private_download_url(&common::config(), "invoice", "pdf", &options).unwrap();
    assert!(url.starts_with("https://api.cloudinary.com/v1_1/test123/image/download?"));
    for part in ["api_key=a", "attachment=true", "format=pdf", "public_id=invoice", "timestamp=1700000000", "type=private"] {
        assert!(url.contains(part), "{url} should contain {part}");
    }
}

#[test]
fn archive_urls() {
    let archive = ArchiveParams {
        public_ids: vec!["a".into(), "b".into()],
        timestamp: Some(1),
        ..ArchiveParams::default()
    };
    let url = api::download_archive_url(&common::config(), &archive).unwrap();
    assert!(url.contains("public_ids%5B%5D=a&public_ids%5B%5D=b"));
    assert!(!url.contains("target_format"));
}

#[test]
fn tags_use_signed_urls_when_configured() {
    let cfg = common::signing_config();
    let html = ImageTag::new(Asset::image("sample").format("png")).to_html(&cfg).unwrap();
    assert!(html.starts_with("<img src=\"https://res.cloudinary.com/test123/image/upload/s--"));

    let html = VideoTag::new(Asset::video("movie")).to_html(&common::config()).unwrap();
    assert_eq!(html.matches("<source ").count(), 3);
    assert!(html.contains("poster=\"https://res.cloudinary.com/test123/video/upload/movie.jpg\""));
}
