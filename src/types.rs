use crate::naming;

/// Raw `(key, size)` pair as reported by the object store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub key: String,
    pub size: u64,
}

impl StoredObject {
    pub fn new(key: impl Into<String>, size: u64) -> Self {
        Self {
            key: key.into(),
            size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Classic,
    Current,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub size_bytes: u64,
}

impl CatalogEntry {
    #[must_use]
    pub fn category(&self) -> Category {
        if naming::is_classic(&self.name) {
            Category::Classic
        } else {
            Category::Current
        }
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        naming::display_name(&self.name)
    }

    /// Size in MiB with one decimal, e.g. `"15.0"`.
    #[must_use]
    pub fn size_mb(&self) -> String {
        format!("{:.1}", self.size_bytes as f64 / 1_024.0 / 1_024.0)
    }
}
