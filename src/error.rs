use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Which step of a control file access failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Open,
    Read,
    Write,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Op::Open => "open",
            Op::Read => "read",
            Op::Write => "write",
        })
    }
}

/// Diagnostic attached to a failed control file access.
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("no such file {}", path.display())]
    NotFound { path: PathBuf },

    #[error("could not {op} {}: {source}", path.display())]
    Io {
        op: Op,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AccessError {
    pub(crate) fn from_io(op: Op, path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            AccessError::NotFound { path }
        } else {
            AccessError::Io { op, path, source }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AccessError::NotFound { .. })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load tile config: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid tile config: {0}")]
    Invalid(String),
}
