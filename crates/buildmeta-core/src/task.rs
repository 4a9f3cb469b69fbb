//! Task specifications.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::value::Mapping;

/// A task declared in the configuration document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSpec {
    /// Task description shown by the host.
    pub description: Option<String>,
    /// Task group shown by the host.
    pub group: Option<String>,
    /// Names of tasks this one depends on.
    pub depends_on: Vec<String>,
    /// What this task does.
    pub kind: TaskKind,
}

/// The task variant selected by the `type` discriminator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum TaskKind {
    Copy(CopySpec),
    Sync(CopySpec),
    Exec(ExecSpec),
    JavaExec(JavaExecSpec),
    Delete(DeleteSpec),
    Generic(GenericSpec),
}

impl TaskKind {
    /// The discriminator value as it appeared in the document.
    pub fn type_name(&self) -> &str {
        match self {
            TaskKind::Copy(_) => "Copy",
            TaskKind::Sync(_) => "Sync",
            TaskKind::Exec(_) => "Exec",
            TaskKind::JavaExec(_) => "JavaExec",
            TaskKind::Delete(_) => "Delete",
            TaskKind::Generic(spec) => &spec.type_name,
        }
    }
}

/// File transfer fields shared by `Copy` and `Sync`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopySpec {
    pub from: Option<String>,
    pub into: Option<String>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecSpec {
    pub command_line: Vec<String>,
    pub working_dir: Option<String>,
    pub environment: BTreeMap<String, String>,
    pub ignore_exit_value: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JavaExecSpec {
    pub main_class: Option<String>,
    /// Classpath expression, interpreted by the host.
    pub classpath: Option<String>,
    pub args: Vec<String>,
    pub jvm_args: Vec<String>,
    pub working_dir: Option<String>,
    pub environment: BTreeMap<String, String>,
    pub ignore_exit_value: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSpec {
    pub delete: Vec<String>,
}

/// Fallback for any `type` that is not one of the known variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericSpec {
    pub type_name: String,
    /// Every key of the task body except `type`, `description`, `group`
    /// and `dependsOn`.
    pub properties: Mapping,
}

/// True when an optional string is absent or only whitespace.
pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|s| s.trim().is_empty())
}

impl CopySpec {
    /// Whether a source or a destination is set.
    pub fn has_endpoint(&self) -> bool {
        !is_blank(self.from.as_deref()) || !is_blank(self.into.as_deref())
    }
}

impl JavaExecSpec {
    pub fn has_main_class(&self) -> bool {
        !is_blank(self.main_class.as_deref())
    }
}
