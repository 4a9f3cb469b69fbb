//! Core domain types and traits for buildmeta.
//!
//! This crate contains:
//! - The generic value tree produced by document decoding
//! - The typed build configuration model (project, plugins, repositories,
//!   dependencies, tasks)
//! - Repository entry classification
//! - The host adapter trait and the walker that applies a configuration

pub mod adapter;
pub mod config;
pub mod dependency;
pub mod error;
pub mod repository;
pub mod task;
pub mod value;

pub use adapter::{ApplyReport, ProjectAdapter, ProjectConfigurator};
pub use config::{BuildConfig, PluginRef, ProjectInfo};
pub use dependency::{DependencyScope, DependencySpec, is_valid_coordinate};
pub use error::{Error, Result};
pub use repository::RepositorySpec;
pub use task::{CopySpec, DeleteSpec, ExecSpec, GenericSpec, JavaExecSpec, TaskKind, TaskSpec};
pub use value::{Mapping, Number, Value};
