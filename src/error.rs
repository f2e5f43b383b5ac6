use std::fmt;
use std::path::PathBuf;

/// Why a resource could not be acquired.
#[derive(Debug)]
pub enum LoadFailure {
    /// The file is missing or unreadable.
    Io(std::io::Error),
    /// The file was read but is not a usable font.
    InvalidFont,
}

/// Error type for speedometer construction.
#[derive(Debug)]
pub enum GaugeError {
    /// A startup resource (the font) could not be loaded.
    ResourceLoad { path: PathBuf, reason: LoadFailure },
    /// A configuration value the gauge cannot be drawn or animated with.
    InvalidConfig { field: &'static str, reason: String },
}

impl fmt::Display for GaugeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceLoad { path, reason } => match reason {
                LoadFailure::Io(err) => {
                    write!(f, "failed to load font file {}: {err}", path.display())
                }
                LoadFailure::InvalidFont => {
                    write!(f, "failed to load font file {}: invalid font data", path.display())
                }
            },
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid configuration: {field} {reason}")
            }
        }
    }
}

impl std::error::Error for GaugeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ResourceLoad {
                reason: LoadFailure::Io(err),
                ..
            } => Some(err),
            Self::ResourceLoad { .. } | Self::InvalidConfig { .. } => None,
        }
    }
}
