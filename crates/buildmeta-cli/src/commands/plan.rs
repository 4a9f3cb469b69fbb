//! Dry-run application of a configuration.
//!
//! [`DryRunAdapter`] stands in for a host project: it records every action
//! the configurator asks for instead of performing it.

use anyhow::{Context, Result};
use buildmeta_config::ConfigService;
use buildmeta_core::{
    ApplyReport, DependencyScope, ProjectAdapter, ProjectConfigurator, RepositorySpec, TaskKind,
    TaskSpec,
};
use serde::Serialize;
use std::path::Path;

/// A host action the configuration would trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PlannedAction {
    SetGroup { group: String },
    SetVersion { version: String },
    AddRepository { repository: String },
    AddDependency { scope: DependencyScope, coordinate: String },
    RegisterTask { name: String, kind: String, depends_on: Vec<String> },
}

impl std::fmt::Display for PlannedAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlannedAction::SetGroup { group } => write!(f, "set group {}", group),
            PlannedAction::SetVersion { version } => write!(f, "set version {}", version),
            PlannedAction::AddRepository { repository } => {
                write!(f, "add repository {}", repository)
            }
            PlannedAction::AddDependency { scope, coordinate } => {
                write!(f, "add {} dependency {}", scope, coordinate)
            }
            PlannedAction::RegisterTask {
                name,
                kind,
                depends_on,
            } => {
                write!(f, "register task {} ({})", name, kind)?;
                if !depends_on.is_empty() {
                    write!(f, " after {}", depends_on.join(", "))?;
                }
                Ok(())
            }
        }
    }
}

/// Project stand-in that records actions.
#[derive(Debug, Default)]
pub struct DryRunAdapter {
    name: String,
    group: Option<String>,
    version: Option<String>,
    actions: Vec<PlannedAction>,
}

impl DryRunAdapter {
    pub fn new(name: impl Into<String>, group: Option<String>, version: Option<String>) -> Self {
        Self {
            name: name.into(),
            group,
            version,
            actions: Vec::new(),
        }
    }

    pub fn actions(&self) -> &[PlannedAction] {
        &self.actions
    }
}

/// Host task kind a variant maps onto.
fn host_task_kind(task: &TaskSpec) -> String {
    match &task.kind {
        TaskKind::Generic(spec) => format!("plain task, type {}", spec.type_name),
        other => other.type_name().to_string(),
    }
}

impl ProjectAdapter for DryRunAdapter {
    fn project_name(&self) -> &str {
        &self.name
    }

    fn group(&self) -> Option<String> {
        self.group.clone()
    }

    fn version(&self) -> Option<String> {
        self.version.clone()
    }

    fn set_group(&mut self, group: &str) -> buildmeta_core::Result<()> {
        self.group = Some(group.to_string());
        self.actions.push(PlannedAction::SetGroup {
            group: group.to_string(),
        });
        Ok(())
    }

    fn set_version(&mut self, version: &str) -> buildmeta_core::Result<()> {
        self.version = Some(version.to_string());
        self.actions.push(PlannedAction::SetVersion {
            version: version.to_string(),
        });
        Ok(())
    }

    fn add_repository(&mut self, repository: &RepositorySpec) -> buildmeta_core::Result<()> {
        self.actions.push(PlannedAction::AddRepository {
            repository: repository.to_string(),
        });
        Ok(())
    }

    fn add_dependency(
        &mut self,
        scope: DependencyScope,
        coordinate: &str,
    ) -> buildmeta_core::Result<()> {
        self.actions.push(PlannedAction::AddDependency {
            scope,
            coordinate: coordinate.to_string(),
        });
        Ok(())
    }

    fn register_task(&mut self, name: &str, task: &TaskSpec) -> buildmeta_core::Result<()> {
        self.actions.push(PlannedAction::RegisterTask {
            name: name.to_string(),
            kind: host_task_kind(task),
            depends_on: task.depends_on.clone(),
        });
        Ok(())
    }
}

/// Load a project configuration and print the actions applying it implies.
pub fn plan(
    service: &ConfigService,
    dir: &Path,
    group: Option<String>,
    version: Option<String>,
    json: bool,
) -> Result<()> {
    let config = service
        .load(dir)
        .with_context(|| format!("Failed to load {}", service.config_path(dir).display()))?;

    let name = dir
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| dir.display().to_string());

    let mut adapter = DryRunAdapter::new(name, group, version);
    let report = ProjectConfigurator::new().apply(&mut adapter, &config)?;

    if json {
        let output = serde_json::json!({
            "actions": adapter.actions(),
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_plan(adapter.actions(), &report);
    }
    Ok(())
}

fn print_plan(actions: &[PlannedAction], report: &ApplyReport) {
    if actions.is_empty() {
        println!("Nothing to apply");
    }
    for action in actions {
        println!("  {}", action);
    }
    for skipped in &report.skipped_repositories {
        println!("  ! skipped invalid repository {}", skipped);
    }
}
