//! Host adapter trait.
//!
//! A host build tool implements [`ProjectAdapter`] over its live project
//! object. [`ProjectConfigurator`] walks a validated [`BuildConfig`] and
//! drives the adapter; the configuration model itself never touches the host.

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::config::{BuildConfig, ProjectInfo};
use crate::dependency::DependencyScope;
use crate::repository::RepositorySpec;
use crate::task::TaskSpec;
use crate::Result;

/// Capabilities a host must expose for a configuration to be applied.
pub trait ProjectAdapter {
    /// Name of the project, for logging.
    fn project_name(&self) -> &str;

    /// Current project group, if the host already has one.
    fn group(&self) -> Option<String>;

    /// Current project version, if the host already has one.
    fn version(&self) -> Option<String>;

    fn set_group(&mut self, group: &str) -> Result<()>;

    fn set_version(&mut self, version: &str) -> Result<()>;

    /// Register a repository with the host.
    fn add_repository(&mut self, repository: &RepositorySpec) -> Result<()>;

    /// Register a dependency coordinate under a scope.
    fn add_dependency(&mut self, scope: DependencyScope, coordinate: &str) -> Result<()>;

    /// Register a task, mapping its variant to a concrete host task kind.
    fn register_task(&mut self, name: &str, task: &TaskSpec) -> Result<()>;
}

/// What [`ProjectConfigurator::apply`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    pub group_set: bool,
    pub version_set: bool,
    pub repositories: usize,
    /// Entries that were neither an alias nor a supported URL.
    pub skipped_repositories: Vec<String>,
    pub dependencies: usize,
    pub tasks: usize,
}

/// Applies a validated configuration to a host project.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectConfigurator;

impl ProjectConfigurator {
    pub fn new() -> Self {
        Self
    }

    /// Apply project info, repositories, dependencies and tasks, in that
    /// order. Adapter failures abort the walk and propagate.
    pub fn apply(
        &self,
        adapter: &mut dyn ProjectAdapter,
        config: &BuildConfig,
    ) -> Result<ApplyReport> {
        let project = adapter.project_name().to_string();
        info!(project = %project, "Applying build configuration");

        let mut report = ApplyReport::default();
        if let Some(info) = &config.project {
            self.apply_project_info(adapter, info, &mut report)?;
        }
        self.apply_repositories(adapter, &config.repositories, &mut report)?;
        self.apply_dependencies(adapter, config, &mut report)?;
        self.apply_tasks(adapter, config, &mut report)?;

        info!(
            project = %project,
            repositories = report.repositories,
            dependencies = report.dependencies,
            tasks = report.tasks,
            "Build configuration applied"
        );
        Ok(report)
    }

    /// Group and version are only set when the host has none; a blank value
    /// counts as unset.
    fn apply_project_info(
        &self,
        adapter: &mut dyn ProjectAdapter,
        info: &ProjectInfo,
        report: &mut ApplyReport,
    ) -> Result<()> {
        if let Some(group) = &info.group {
            match adapter.group().filter(|g| !g.trim().is_empty()) {
                Some(existing) => debug!(existing = %existing, "Project group already set"),
                None => {
                    adapter.set_group(group)?;
                    report.group_set = true;
                    debug!(group = %group, "Set project group");
                }
            }
        }

        if let Some(version) = &info.version {
            match adapter.version().filter(|v| !v.trim().is_empty()) {
                Some(existing) => debug!(existing = %existing, "Project version already set"),
                None => {
                    adapter.set_version(version)?;
                    report.version_set = true;
                    debug!(version = %version, "Set project version");
                }
            }
        }
        Ok(())
    }

    fn apply_repositories(
        &self,
        adapter: &mut dyn ProjectAdapter,
        repositories: &[String],
        report: &mut ApplyReport,
    ) -> Result<()> {
        for entry in repositories {
            let spec = match RepositorySpec::parse(entry) {
                Ok(spec) => spec,
                Err(e) => {
                    warn!(repository = %entry, error = %e, "Skipping invalid repository");
                    report.skipped_repositories.push(entry.clone());
                    continue;
                }
            };

            if let Err(e) = adapter.add_repository(&spec) {
                error!(repository = %entry, error = %e, "Failed to add repository");
                return Err(e);
            }
            debug!(repository = %spec, "Added repository");
            report.repositories += 1;
        }
        Ok(())
    }

    fn apply_dependencies(
        &self,
        adapter: &mut dyn ProjectAdapter,
        config: &BuildConfig,
        report: &mut ApplyReport,
    ) -> Result<()> {
        let Some(deps) = &config.dependencies else {
            return Ok(());
        };

        for (scope, coordinate) in deps.iter() {
            if let Err(e) = adapter.add_dependency(scope, coordinate) {
                error!(%scope, dependency = %coordinate, error = %e, "Failed to add dependency");
                return Err(e);
            }
            debug!(%scope, dependency = %coordinate, "Added dependency");
            report.dependencies += 1;
        }
        Ok(())
    }

    fn apply_tasks(
        &self,
        adapter: &mut dyn ProjectAdapter,
        config: &BuildConfig,
        report: &mut ApplyReport,
    ) -> Result<()> {
        for (name, task) in &config.tasks {
            if let Err(e) = adapter.register_task(name, task) {
                error!(task = %name, error = %e, "Failed to register task");
                return Err(e);
            }
            debug!(task = %name, kind = task.kind.type_name(), "Registered task");
            report.tasks += 1;
        }
        Ok(())
    }
}
