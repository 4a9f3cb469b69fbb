//! The build configuration aggregate.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::dependency::DependencySpec;
use crate::task::TaskSpec;

/// Everything a `build.yml` declares for one project.
///
/// Built once per load and never patched afterwards; a reload produces a
/// fresh value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BuildConfig {
    /// Project coordinates.
    pub project: Option<ProjectInfo>,
    /// Plugins to apply, in document order.
    pub plugins: Vec<PluginRef>,
    /// Repository aliases or URLs, in document order.
    pub repositories: Vec<String>,
    /// Declared dependencies.
    pub dependencies: Option<DependencySpec>,
    /// Tasks keyed by name.
    pub tasks: BTreeMap<String, TaskSpec>,
}

/// Project group and version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectInfo {
    pub group: Option<String>,
    pub version: Option<String>,
}

/// A plugin to apply by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginRef {
    pub id: String,
    pub version: Option<String>,
}

impl BuildConfig {
    /// Whether nothing at all is configured.
    pub fn is_empty(&self) -> bool {
        self.project.is_none()
            && self.plugins.is_empty()
            && self.repositories.is_empty()
            && self.dependencies.is_none()
            && self.tasks.is_empty()
    }

    /// Number of dependency coordinates across all scopes.
    pub fn dependency_count(&self) -> usize {
        self.dependencies.as_ref().map_or(0, DependencySpec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = BuildConfig::default();
        assert!(config.is_empty());
        assert_eq!(config.dependency_count(), 0);
    }

    #[test]
    fn test_dependency_count_sums_scopes() {
        let config = BuildConfig {
            dependencies: Some(DependencySpec {
                api: vec!["a:b".to_string()],
                test_runtime_only: vec!["c:d:1".to_string(), "e:f".to_string()],
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(!config.is_empty());
        assert_eq!(config.dependency_count(), 3);
    }
}
