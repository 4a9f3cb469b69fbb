//! Configuration service: locate, load, validate and summarize `build.yml`.

use buildmeta_core::BuildConfig;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::tracker::FileChangeTracker;
use crate::{ConfigError, ConfigResult, ParseError, decode, mapper, validator};

/// Default configuration file name inside a project directory.
pub const DEFAULT_FILE_NAME: &str = "build.yml";

/// Loads project configurations.
///
/// Every [`load`](Self::load) re-reads and re-maps the document. The shared
/// [`FileChangeTracker`] only reports whether the file changed since the
/// last load of the same path; it never short-circuits parsing.
#[derive(Debug, Clone)]
pub struct ConfigService {
    tracker: Arc<FileChangeTracker>,
    file_name: String,
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new(Arc::new(FileChangeTracker::new()))
    }
}

impl ConfigService {
    pub fn new(tracker: Arc<FileChangeTracker>) -> Self {
        Self {
            tracker,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    /// Use a different configuration file name.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn tracker(&self) -> &Arc<FileChangeTracker> {
        &self.tracker
    }

    /// Path of the configuration file for a project directory.
    pub fn config_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.file_name)
    }

    /// Whether the project has a configuration file.
    pub fn has_config(&self, project_dir: &Path) -> bool {
        self.config_path(project_dir).is_file()
    }

    /// Whether the configuration file exists and can be opened for reading.
    pub fn is_config_readable(&self, project_dir: &Path) -> bool {
        let path = self.config_path(project_dir);
        path.is_file() && std::fs::File::open(&path).is_ok()
    }

    /// Load the configuration of a project directory.
    ///
    /// A missing file yields the default configuration. Decode, mapping and
    /// validation failures propagate unchanged.
    pub fn load(&self, project_dir: &Path) -> ConfigResult<BuildConfig> {
        let path = self.config_path(project_dir);
        if !path.is_file() {
            debug!(path = %path.display(), "No configuration file, using defaults");
            return Ok(BuildConfig::default());
        }

        if self.tracker.check_and_update(&path) {
            info!(path = %path.display(), "Configuration file changed, reloading");
        } else {
            debug!(path = %path.display(), "Configuration file unchanged");
        }

        let text = std::fs::read_to_string(&path).map_err(|source| {
            let err = ParseError::Read {
                path: path.clone(),
                source,
            };
            error!(error = %err, "Failed to read configuration");
            ConfigError::Parse(err)
        })?;

        info!(path = %path.display(), "Parsing configuration");
        let config = self.load_str(&text)?;
        info!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Decode, map and validate configuration text.
    pub fn load_str(&self, text: &str) -> ConfigResult<BuildConfig> {
        let config = decode::parse_document(text)
            .and_then(|root| mapper::map(&root))
            .inspect_err(|e| error!(error = %e, "Failed to parse configuration"))?;

        validator::validate(&config)
            .inspect_err(|e| error!(violations = e.violations.len(), "Configuration validation failed"))?;

        Ok(config)
    }

    /// A short digest of a configuration for logging.
    pub fn summarize(config: &BuildConfig) -> String {
        let mut parts = Vec::new();

        if let Some(project) = &config.project {
            if let Some(group) = &project.group {
                parts.push(format!("group: {}", group));
            }
            if let Some(version) = &project.version {
                parts.push(format!("version: {}", version));
            }
        }
        if !config.plugins.is_empty() {
            parts.push(format!("plugins: {}", config.plugins.len()));
        }
        if !config.repositories.is_empty() {
            parts.push(format!("repositories: {}", config.repositories.len()));
        }
        let dependencies = config.dependency_count();
        if dependencies > 0 {
            parts.push(format!("dependencies: {}", dependencies));
        }
        if !config.tasks.is_empty() {
            parts.push(format!("tasks: {}", config.tasks.len()));
        }

        if parts.is_empty() {
            "no configuration".to_string()
        } else {
            parts.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
project:
  group: com.example
  version: "1.2.0"
plugins:
  - id: java
repositories:
  - mavenCentral
  - https://repo.example.com/maven
dependencies:
  implementation:
    - com.google.guava:guava:33.0.0-jre
  testImplementation:
    - org.junit.jupiter:junit-jupiter:5.10.1
tasks:
  copyDocs:
    type: Copy
    from: docs
    into: build/docs
"#;

    fn project_with(text: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_FILE_NAME), text).unwrap();
        dir
    }

    #[test]
    fn test_missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let service = ConfigService::default();

        assert!(!service.has_config(dir.path()));
        assert!(!service.is_config_readable(dir.path()));
        let config = service.load(dir.path()).unwrap();
        assert_eq!(config, BuildConfig::default());
        assert!(config.plugins.is_empty());
        assert!(config.repositories.is_empty());
        assert!(config.tasks.is_empty());
        assert!(config.project.is_none());
        assert!(config.dependencies.is_none());
    }

    #[test]
    fn test_load_is_idempotent() {
        let dir = project_with(SAMPLE);
        let service = ConfigService::default();

        assert!(service.has_config(dir.path()));
        assert!(service.is_config_readable(dir.path()));
        let first = service.load(dir.path()).unwrap();
        let second = service.load(dir.path()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.plugins[0].id, "java");
    }

    #[test]
    fn test_load_records_file_in_tracker() {
        let dir = project_with(SAMPLE);
        let tracker = Arc::new(FileChangeTracker::new());
        let service = ConfigService::new(Arc::clone(&tracker));

        service.load(dir.path()).unwrap();
        let path = service.config_path(dir.path());
        assert!(tracker.last_seen(&path).is_some());
        assert!(!tracker.check_and_update(&path));
    }

    #[test]
    fn test_custom_file_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("meta.yaml"), "plugins:\n  - id: java\n").unwrap();

        let service = ConfigService::default().with_file_name("meta.yaml");
        assert_eq!(service.file_name(), "meta.yaml");
        assert_eq!(service.load(dir.path()).unwrap().plugins.len(), 1);
    }

    #[test]
    fn test_parse_error_propagates() {
        let dir = project_with("plugins:\n  - version: \"1.0\"\n");
        let result = ConfigService::default().load(dir.path());
        assert!(matches!(
            result,
            Err(ConfigError::Parse(ParseError::MissingField(path))) if path == "plugins[0].id"
        ));
    }

    #[test]
    fn test_validation_error_propagates_with_all_violations() {
        let dir = project_with(
            "plugins:\n  - id: \"\"\ndependencies:\n  implementation: [\"g\"]\n",
        );
        match ConfigService::default().load(dir.path()) {
            Err(ConfigError::Validation(err)) => assert_eq!(err.violations.len(), 2),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_repeated_key_takes_last_value() {
        let config = ConfigService::default()
            .load_str("project:\n  group: a\n  group: b\n")
            .unwrap();
        assert_eq!(config.project.unwrap().group.as_deref(), Some("b"));
    }

    #[test]
    fn test_mutual_depends_on_loads() {
        let config = ConfigService::default()
            .load_str("tasks:\n  a:\n    type: Banana\n    dependsOn: [b]\n  b:\n    type: Banana\n    dependsOn: [a]\n")
            .unwrap();
        assert_eq!(config.tasks.len(), 2);
    }

    #[test]
    fn test_summarize() {
        let config = ConfigService::default().load_str(SAMPLE).unwrap();
        assert_eq!(
            ConfigService::summarize(&config),
            "group: com.example, version: 1.2.0, plugins: 1, repositories: 2, dependencies: 2, tasks: 1"
        );
        assert_eq!(
            ConfigService::summarize(&BuildConfig::default()),
            "no configuration"
        );
    }
}
