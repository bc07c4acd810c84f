//! # ffprof - Firefox Profile Tool Library
//!
//! This library finds the active Firefox (or LibreWolf) profile directory
//! from `profiles.ini` and reads and writes the `mozLz4` container files the
//! browser keeps inside it (`sessionstore.jsonlz4`, `search.json.mozlz4`, ...).
//!
//! ## Features
//!
//! - Parse profiles.ini into an ordered, typed registry model
//! - Resolve the active profile: explicit name, single `Install` pointer,
//!   the only profile, or the first `Default=1` profile
//! - Remove a profile's registry sections and its directory
//! - Decode and encode the `mozLz40\0` LZ4 block container
//! - Locate the registry root per browser and operating system
//!
//! ## Quick Start
//!
//! ### Resolving a Profile
//!
//! ```rust,no_run
//! use ffprof::{get_profiles_directory, resolve, Browser};
//!
//! let root = get_profiles_directory(Browser::Firefox, None)?;
//!
//! // The active profile
//! let active = resolve(&root, None)?;
//!
//! // A profile picked by its Name= entry
//! let work = resolve(&root, Some("work"))?;
//! println!("{} / {}", active.display(), work.display());
//! # Ok::<(), ffprof::Error>(())
//! ```
//!
//! ### Reading a Session File
//!
//! ```rust,no_run
//! use ffprof::{get_profiles_directory, read_decoded, resolve_file, Browser};
//! use std::path::Path;
//!
//! let root = get_profiles_directory(Browser::Firefox, None)?;
//! let file = resolve_file(&root, None, Path::new("sessionstore-backups/recovery.jsonlz4"))?;
//! let json = read_decoded(&file)?;
//! println!("{}", String::from_utf8_lossy(&json));
//! # Ok::<(), ffprof::Error>(())
//! ```
//!
//! ### The Container Codec
//!
//! ```rust
//! use ffprof::{decode, encode, is_container};
//!
//! let packed = encode(b"{}");
//! assert!(is_container(&packed));
//! assert_eq!(decode(&packed)?.into_owned(), b"{}");
//!
//! // Content without the magic passes through unchanged
//! assert_eq!(decode(b"{}")?.into_owned(), b"{}");
//! # Ok::<(), ffprof::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All functions return [`Result<T, Error>`]. Each resolution failure has its
//! own [`Error`] variant:
//!
//! ```rust,no_run
//! use ffprof::{resolve, Error};
//! use std::path::Path;
//!
//! match resolve(Path::new("/home/me/.mozilla/firefox"), None) {
//!     Ok(path) => println!("{}", path.display()),
//!     Err(Error::NoDefaultProfile) => eprintln!("pick one with --profile"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```
//!
//! ## Platform Support
//!
//! Registry roots:
//! - **Linux**: `~/.mozilla/firefox/`
//! - **macOS**: `~/Library/Application Support/Firefox/`
//! - **Windows**: `%APPDATA%\Mozilla\Firefox\`

// Re-export error types
pub use error::{Error, Result};

// Re-export registry types
pub use registry::{parse_bool, Registry, Section, INSTALL_PREFIX, REGISTRY_FILE};

// Re-export profile resolution
pub use profile::{
    derive_path, list_profiles, remove_profile, resolve, resolve_file, select_section,
    ProfileInfo,
};

// Re-export the container codec
pub use container::{decode, encode, is_container, read_decoded, write_encoded, MAGIC};

// Re-export registry root location
pub use browser::{expand_root, get_profiles_directory, Browser, Platform};

// All modules are private - use re-exports above for public API
mod browser;
mod container;
mod error;
mod profile;
mod registry;
