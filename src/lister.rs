use crate::config::SiteConfig;
use crate::error::FetchError;
use crate::naming;
use crate::types::{CatalogEntry, StoredObject};
use std::process::Command;

const APK_QUERY: &str = "Contents[?ends_with(Key, '.apk')].[Key,Size]";

/// Source of `(key, size)` pairs for a bucket.
pub trait ObjectLister {
    fn list_objects(&self, bucket: &str, region: &str) -> Result<Vec<StoredObject>, FetchError>;
}

impl<F> ObjectLister for F
where
    F: Fn(&str, &str) -> Result<Vec<StoredObject>, FetchError>,
{
    fn list_objects(&self, bucket: &str, region: &str) -> Result<Vec<StoredObject>, FetchError> {
        self(bucket, region)
    }
}

/// Lists objects by shelling out to `aws s3api list-objects-v2`.
pub struct AwsCli {
    program: String,
}

impl AwsCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ObjectLister for AwsCli {
    fn list_objects(&self, bucket: &str, region: &str) -> Result<Vec<StoredObject>, FetchError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(["s3api", "list-objects-v2"])
            .arg("--bucket")
            .arg(bucket)
            .arg("--region")
            .arg(region)
            .arg("--query")
            .arg(APK_QUERY)
            .args(["--output", "json"]);

        log::debug!("Running {cmd:?}");

        let output = cmd.output().map_err(|source| FetchError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(FetchError::Status {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        parse_listing(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Parses the CLI's JSON: `null` (empty bucket) or `[[key, size], ...]`.
pub fn parse_listing(json: &str) -> Result<Vec<StoredObject>, FetchError> {
    let pairs: Option<Vec<(String, u64)>> = serde_json::from_str(json)?;

    Ok(pairs
        .unwrap_or_default()
        .into_iter()
        .map(|(key, size)| StoredObject::new(key, size))
        .collect())
}

/// Accepted `.apk` entries sorted by name.
#[must_use]
pub fn select_entries(objects: Vec<StoredObject>) -> Vec<CatalogEntry> {
    let mut entries: Vec<CatalogEntry> = objects
        .into_iter()
        .filter_map(|obj| {
            let name = naming::strip_apk_suffix(&obj.key)?;
            if naming::is_accepted(name) {
                Some(CatalogEntry {
                    name: name.to_string(),
                    size_bytes: obj.size,
                })
            } else {
                log::warn!(
                    "Skipping {}: neither a classic title nor a {} build",
                    obj.key,
                    naming::YEAR_SUFFIX
                );
                None
            }
        })
        .collect();

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

pub fn fetch_catalog<L: ObjectLister>(
    lister: &L,
    config: &SiteConfig,
) -> Result<Vec<CatalogEntry>, FetchError> {
    let objects = lister.list_objects(&config.bucket, &config.region)?;
    log::info!("Listing returned {} objects", objects.len());
    Ok(select_entries(objects))
}
