//! `build.yml` configuration loading for buildmeta.
//!
//! This crate handles:
//! - Decoding YAML into the generic value tree
//! - Mapping the tree onto the typed configuration model
//! - Resolving task variants
//! - Validating the mapped configuration
//! - Tracking configuration file changes

pub mod decode;
pub mod error;
pub mod mapper;
pub mod resolver;
pub mod service;
pub mod tracker;
pub mod validator;

pub use error::{ConfigError, ConfigResult, ParseError, ValidationError};
pub use service::{ConfigService, DEFAULT_FILE_NAME};
pub use tracker::FileChangeTracker;
