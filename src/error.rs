//! Error taxonomy for the audit run.
//!
//! Only failures that abort the run live here. Discovery, detail-fetch, and
//! probe failures are recovered locally by the pipeline (partial results are
//! kept, the page is skipped, the probe reports "not reachable") and never
//! surface as an [`AuditError`].

use std::path::PathBuf;
use thiserror::Error;

/// A failure that aborts the audit run.
///
/// The binary maps variants to distinct exit codes: [`Config`](AuditError::Config)
/// exits 2, everything else exits 1.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Missing, placeholder, or unparsable configuration.
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {source}")]
    Client {
        #[from]
        source: reqwest::Error,
    },

    /// A report file could not be written.
    #[error("failed to write report to {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AuditError {
    /// Builds a [`Config`](AuditError::Config) variant from anything printable.
    pub fn config(reason: impl Into<String>) -> Self {
        AuditError::Config {
            reason: reason.into(),
        }
    }

    /// Process exit code for this error kind.
    ///
    /// Configuration problems exit 2 (usage-class failure, matching the CLI
    /// convention for bad invocations); runtime failures exit 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            AuditError::Config { .. } => 2,
            AuditError::Client { .. } | AuditError::Export { .. } => 1,
        }
    }
}
