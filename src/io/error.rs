//! Error types for tile extraction, deduplication and image I/O

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all deduplication operations
#[derive(Debug)]
pub enum FlipTileError {
    /// Failed to decode the source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode the atlas image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// Image dimensions are not whole multiples of the tile side
    ///
    /// This is a correctable input problem: the user has to crop or pad the
    /// source image before it can be split into tiles.
    Dimension {
        /// Image width in pixels
        width: usize,
        /// Image height in pixels
        height: usize,
        /// Required divisor for both dimensions
        tile_side: usize,
    },

    /// Source data doesn't meet pipeline requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Internal state that valid input cannot produce
    ///
    /// Indicates a logic defect rather than a user error. Callers should treat
    /// it as fatal.
    InvariantViolation {
        /// Operation during which the violation was detected
        operation: &'static str,
        /// Description of the broken invariant
        reason: String,
    },

    /// The global logger could not be installed
    Logger {
        /// Underlying logger error
        source: log::SetLoggerError,
    },
}

impl fmt::Display for FlipTileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::Dimension {
                width,
                height,
                tile_side,
            } => {
                write!(
                    f,
                    "Image is {width}x{height}, which is not divisible by {tile_side}"
                )
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvariantViolation { operation, reason } => {
                write!(f, "Internal invariant violated in {operation}: {reason}")
            }
            Self::Logger { source } => {
                write!(f, "Failed to initialize logging: {source}")
            }
        }
    }
}

impl std::error::Error for FlipTileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Logger { source } => Some(source),
            _ => None,
        }
    }
}

impl FlipTileError {
    /// Whether the error stems from user input rather than a defect
    ///
    /// Front ends use this to decide between a friendly message and a crash report.
    pub const fn is_user_error(&self) -> bool {
        !matches!(self, Self::InvariantViolation { .. } | Self::Logger { .. })
    }
}

/// Convenience type alias for deduplication results
pub type Result<T> = std::result::Result<T, FlipTileError>;

impl From<image::ImageError> for FlipTileError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for FlipTileError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<log::SetLoggerError> for FlipTileError {
    fn from(err: log::SetLoggerError) -> Self {
        Self::Logger { source: err }
    }
}

/// Create a file system error tied to `path`
pub fn file_system(
    operation: &'static str,
    path: &Path,
    source: std::io::Error,
) -> FlipTileError {
    FlipTileError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FlipTileError {
    FlipTileError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invariant violation error
pub fn invariant_violation(operation: &'static str, reason: &impl ToString) -> FlipTileError {
    FlipTileError::InvariantViolation {
        operation,
        reason: reason.to_string(),
    }
}
