use std::path::PathBuf;

pub const DEFAULT_BUCKET: &str = "moonbit-raylib-android-games";
pub const DEFAULT_REGION: &str = "us-west-2";
pub const DEFAULT_OUTPUT_DIR: &str = "docs";

/// Settings for one generation run, built once in `main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub bucket: String,
    pub region: String,
    pub output_dir: PathBuf,
}

impl SiteConfig {
    pub fn new(
        bucket: impl Into<String>,
        region: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            region: region.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Public HTTPS endpoint of the bucket, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("https://{}.s3.{}.amazonaws.com", self.bucket, self.region)
    }

    #[must_use]
    pub fn download_url(&self, name: &str) -> String {
        format!("{}/{}{}", self.base_url(), name, crate::naming::APK_SUFFIX)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKET, DEFAULT_REGION, DEFAULT_OUTPUT_DIR)
    }
}
