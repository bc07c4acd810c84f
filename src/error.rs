//! Error types for profile resolution and container handling
//!
//! This module defines the error types used throughout the ffprof library.
//! All public functions return [`Result<T, Error>`] for consistent error handling.

use std::path::PathBuf;

/// Errors that can occur while resolving profiles or handling profile files
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// profiles.ini does not exist under the registry root
    #[error("No profiles found: {0} does not exist. Initialize your browser first")]
    RegistryMissing(PathBuf),

    /// profiles.ini could not be parsed
    #[error("Failed to parse profiles.ini: {0}")]
    RegistryParse(String),

    /// The registry declares no profiles and no installs
    #[error("No profile found in profiles.ini. Initialize one first")]
    NoProfiles,

    /// Several profiles are declared and none is marked `Default=1`
    #[error("No default profile found. Specify a profile with --profile")]
    NoDefaultProfile,

    /// More than one `Install` section, so there is no single active profile
    #[error("{count} Install sections found. Specify a profile with --profile")]
    AmbiguousInstalls { count: usize },

    /// No profile section carries the requested name
    #[error("Profile '{name}' not found in {registry}")]
    ProfileNotFound { name: String, registry: PathBuf },

    /// The selected section has neither `Path` nor `Default`
    #[error("Could not find a profile path in section [{section}]")]
    UnresolvablePath { section: String },

    /// A boolean key holds a literal outside the accepted set
    #[error("Invalid value '{value}' for {key} in section [{section}]")]
    InvalidFlag {
        section: String,
        key: String,
        value: String,
    },

    /// The data starts with the container magic but the block is not valid LZ4
    #[error("Corrupt mozLz4 container: {0}")]
    CorruptContainer(String),

    /// Invalid profiles directory override
    #[error("Invalid profiles directory: {0}")]
    InvalidProfilesDirectory(PathBuf),

    /// The registry root template could not be expanded
    #[error("Cannot determine profiles directory: {0}")]
    Environment(String),

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
///
/// # Example
///
/// ```rust
/// use ffprof::{decode, Result};
///
/// fn plain_len(bytes: &[u8]) -> Result<usize> {
///     Ok(decode(bytes)?.len())
/// }
/// # assert_eq!(plain_len(b"{}").unwrap(), 2);
/// ```
pub type Result<T> = std::result::Result<T, Error>;
