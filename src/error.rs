use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("object listing exited with {}: {}", status_label(.code), .stderr.trim())]
    Status { code: Option<i32>, stderr: String },

    #[error("unexpected object listing output: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// Process status to exit with; mirrors the listing command when it has one.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            FetchError::Status {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn status_label(code: &Option<i32>) -> String {
    code.map_or_else(
        || "no exit status (terminated by signal)".to_string(),
        |c| format!("status {c}"),
    )
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("failed to write catalog: {0}")]
    Write(#[from] std::io::Error),
}

impl CatalogError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            CatalogError::Fetch(e) => e.exit_code(),
            CatalogError::Write(_) => 1,
        }
    }
}
