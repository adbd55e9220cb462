//! Signed archive download URLs (`generate_archive`).

use super::{api_url, query_string, sign_request, unix_now, Param, Params};
use crate::config::Configuration;
use crate::error::Result;

/// Selection and packaging options for a generated archive.
#[derive(Debug, Clone, Default)]
pub struct ArchiveParams {
    /// `image`, `video`, `raw` or `all`; defaults to `image`.
    pub resource_type: Option<String>,
    pub delivery_type: Option<String>,
    pub public_ids: Vec<String>,
    pub prefixes: Vec<String>,
    pub tags: Vec<String>,
    /// `zip` (default) or `tgz`.
    pub target_format: Option<String>,
    pub target_public_id: Option<String>,
    pub flatten_folders: bool,
    pub flatten_transformations: bool,
    pub use_original_filename: bool,
    pub keep_derived: bool,
    pub skip_transformation_name: bool,
    pub allow_missing: bool,
    pub expires_at: Option<u64>,
    pub transformations: Option<String>,
    pub notification_url: Option<String>,
    pub timestamp: Option<u64>,
}

impl ArchiveParams {
    fn to_params(&self, mode: &str) -> Params {
        let mut params = Params::new();
        let mut put = |key: &str, value: Option<Param>| {
            if let Some(value) = value {
                params.insert(key.to_string(), value);
            }
        };
        let list = |v: &Vec<String>| (!v.is_empty()).then(|| Param::List(v.clone()));
        let flag = |b: bool| b.then(|| Param::from("true"));

        put("mode", Some(mode.into()));
        put("timestamp", Some(self.timestamp.unwrap_or_else(unix_now).into()));
        put("type", self.delivery_type.clone().map(Param::from));
        put("public_ids", list(&self.public_ids));
        put("prefixes", list(&self.prefixes));
        put("tags", list(&self.tags));
        put("target_format", self.target_format.clone().map(Param::from));
        put("target_public_id", self.target_public_id.clone().map(Param::from));
        put("flatten_folders", flag(self.flatten_folders));
        put("flatten_transformations", flag(self.flatten_transformations));
        put("use_original_filename", flag(self.use_original_filename));
        put("keep_derived", flag(self.keep_derived));
        put("skip_transformation_name", flag(self.skip_transformation_name));
        put("allow_missing", flag(self.allow_missing));
        put("expires_at", self.expires_at.map(Param::from));
        put("transformations", self.transformations.clone().map(Param::from));
        put("notification_url", self.notification_url.clone().map(Param::from));
        params
    }
}

/// Signed URL that generates and downloads an archive in one request.
pub fn download_archive_url(config: &Configuration, archive: &ArchiveParams) -> Result<String> {
    let resource_type = archive.resource_type.as_deref().unwrap_or("image");
    let params = sign_request(archive.to_params("download"), config)?;
    let endpoint = api_url(config, resource_type, "generate_archive")?;
    Ok(format!("{endpoint}?{}", query_string(&params)))
}

/// [`download_archive_url`] with the target format fixed to `zip`.
pub fn download_zip_url(config: &Configuration, archive: &ArchiveParams) -> Result<String> {
    let archive = ArchiveParams {
        target_format: Some("zip".to_string()),
        ..archive.clone()
    };
    download_archive_url(config, &archive)
}

/// Archive of every asset under `folder`; all resource types unless
/// `archive` names one.
pub fn download_folder_url(
    config: &Configuration,
    folder: &str,
    archive: &ArchiveParams,
) -> Result<String> {
    let archive = ArchiveParams {
        prefixes: vec![folder.to_string()],
        resource_type: Some(
            archive
                .resource_type
                .clone()
                .unwrap_or_else(|| "all".to_string()),
        ),
        ..archive.clone()
    };
    download_archive_url(config, &archive)
}
