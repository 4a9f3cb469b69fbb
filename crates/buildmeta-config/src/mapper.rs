//! Generic value tree to [`BuildConfig`].
//!
//! Every read goes through one of the coercion helpers below, which either
//! return the expected shape or a [`ParseError`] carrying the dotted path of
//! the offending node. Absent and explicit-null optional fields take their
//! defaults.

use buildmeta_core::value::{Mapping, Value};
use buildmeta_core::{BuildConfig, DependencyScope, DependencySpec, PluginRef, ProjectInfo};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

use crate::ParseError;
use crate::resolver::resolve;

/// Map a decoded document onto the configuration model.
pub fn map(root: &Value) -> Result<BuildConfig, ParseError> {
    let root = match root {
        Value::Null => return Ok(BuildConfig::default()),
        other => expect_mapping(other, "<root>")?,
    };

    let project = match optional(root, "project") {
        Some(value) => Some(map_project(expect_mapping(value, "project")?)?),
        None => None,
    };

    let plugins = match optional(root, "plugins") {
        Some(value) => map_plugins(expect_sequence(value, "plugins")?)?,
        None => Vec::new(),
    };

    let repositories = string_list(root, "repositories", "")?;

    let dependencies = match optional(root, "dependencies") {
        Some(value) => Some(map_dependencies(expect_mapping(value, "dependencies")?)?),
        None => None,
    };

    let mut tasks = BTreeMap::new();
    if let Some(value) = optional(root, "tasks") {
        for (name, body) in expect_mapping(value, "tasks")?.iter() {
            let body = expect_mapping(body, &join_key("tasks", name))?;
            tasks.insert(name.to_string(), resolve(name, body)?);
        }
    }

    debug!(
        plugins = plugins.len(),
        repositories = repositories.len(),
        tasks = tasks.len(),
        "Mapped configuration document"
    );

    Ok(BuildConfig {
        project,
        plugins,
        repositories,
        dependencies,
        tasks,
    })
}

fn map_project(project: &Mapping) -> Result<ProjectInfo, ParseError> {
    Ok(ProjectInfo {
        group: optional_string(project, "group", "project")?,
        version: optional_string(project, "version", "project")?,
    })
}

fn map_plugins(entries: &[Value]) -> Result<Vec<PluginRef>, ParseError> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let path = join_index("plugins", i);
            let plugin = expect_mapping(entry, &path)?;
            Ok(PluginRef {
                id: required_string(plugin, "id", &path)?,
                version: optional_string(plugin, "version", &path)?,
            })
        })
        .collect()
}

fn map_dependencies(deps: &Mapping) -> Result<DependencySpec, ParseError> {
    let mut spec = DependencySpec::default();
    for scope in DependencyScope::ALL {
        *spec.scope_mut(scope) = string_list(deps, scope.key(), "dependencies")?;
    }

    let known: HashSet<&str> = DependencyScope::ALL.iter().map(|s| s.key()).collect();
    for key in deps.keys().filter(|k| !known.contains(k)) {
        warn!(scope = %key, "Ignoring unknown dependency scope");
    }
    Ok(spec)
}

// Path helpers

pub(crate) fn join_key(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

pub(crate) fn join_index(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}

// Coercions

fn invalid_type(value: &Value, path: &str, expected: &'static str) -> ParseError {
    ParseError::InvalidType {
        path: path.to_string(),
        expected,
        found: value.kind(),
    }
}

/// A present, non-null field.
pub(crate) fn optional<'a>(map: &'a Mapping, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|v| !v.is_null())
}

pub(crate) fn expect_mapping<'a>(value: &'a Value, path: &str) -> Result<&'a Mapping, ParseError> {
    value
        .as_mapping()
        .ok_or_else(|| invalid_type(value, path, "mapping"))
}

pub(crate) fn expect_sequence<'a>(value: &'a Value, path: &str) -> Result<&'a [Value], ParseError> {
    value
        .as_sequence()
        .ok_or_else(|| invalid_type(value, path, "sequence"))
}

pub(crate) fn expect_string(value: &Value, path: &str) -> Result<String, ParseError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| invalid_type(value, path, "string"))
}

pub(crate) fn optional_string(
    map: &Mapping,
    key: &str,
    parent: &str,
) -> Result<Option<String>, ParseError> {
    optional(map, key)
        .map(|value| expect_string(value, &join_key(parent, key)))
        .transpose()
}

pub(crate) fn required_string(map: &Mapping, key: &str, parent: &str) -> Result<String, ParseError> {
    match optional(map, key) {
        Some(value) => expect_string(value, &join_key(parent, key)),
        None => Err(ParseError::MissingField(join_key(parent, key))),
    }
}

pub(crate) fn optional_bool(map: &Mapping, key: &str, parent: &str) -> Result<Option<bool>, ParseError> {
    optional(map, key)
        .map(|value| {
            value
                .as_bool()
                .ok_or_else(|| invalid_type(value, &join_key(parent, key), "boolean"))
        })
        .transpose()
}

/// A sequence of strings; absent means empty.
pub(crate) fn string_list(map: &Mapping, key: &str, parent: &str) -> Result<Vec<String>, ParseError> {
    let Some(value) = optional(map, key) else {
        return Ok(Vec::new());
    };
    let path = join_key(parent, key);
    expect_sequence(value, &path)?
        .iter()
        .enumerate()
        .map(|(i, item)| expect_string(item, &join_index(&path, i)))
        .collect()
}

/// A mapping of string to scalar; scalars are rendered as strings.
pub(crate) fn string_map(
    map: &Mapping,
    key: &str,
    parent: &str,
) -> Result<BTreeMap<String, String>, ParseError> {
    let Some(value) = optional(map, key) else {
        return Ok(BTreeMap::new());
    };
    let path = join_key(parent, key);
    expect_mapping(value, &path)?
        .iter()
        .map(|(k, v)| {
            v.scalar_to_string()
                .map(|s| (k.to_string(), s))
                .ok_or_else(|| invalid_type(v, &join_key(&path, k), "scalar"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::parse_document;

    fn map_str(yaml: &str) -> Result<BuildConfig, ParseError> {
        map(&parse_document(yaml).unwrap())
    }

    #[test]
    fn test_empty_document_maps_to_default() {
        assert_eq!(map_str("").unwrap(), BuildConfig::default());
        assert_eq!(map_str("{}").unwrap(), BuildConfig::default());
    }

    #[test]
    fn test_full_document() {
        let config = map_str(
            r#"
project:
  group: com.example
  version: "2.1.0"
plugins:
  - id: java
  - id: org.jetbrains.kotlin.jvm
    version: "1.9.22"
repositories:
  - mavenCentral
  - https://repo.example.com/maven
dependencies:
  implementation:
    - com.google.guava:guava:33.0.0-jre
  testImplementation:
    - org.junit.jupiter:junit-jupiter:5.10.1
"#,
        )
        .unwrap();

        let project = config.project.unwrap();
        assert_eq!(project.group.as_deref(), Some("com.example"));
        assert_eq!(project.version.as_deref(), Some("2.1.0"));

        assert_eq!(config.plugins.len(), 2);
        assert_eq!(config.plugins[0].id, "java");
        assert_eq!(config.plugins[0].version, None);
        assert_eq!(config.plugins[1].version.as_deref(), Some("1.9.22"));

        assert_eq!(
            config.repositories,
            vec!["mavenCentral", "https://repo.example.com/maven"]
        );

        let deps = config.dependencies.unwrap();
        assert_eq!(deps.implementation, vec!["com.google.guava:guava:33.0.0-jre"]);
        assert_eq!(deps.test_implementation.len(), 1);
        assert!(deps.api.is_empty());
    }

    #[test]
    fn test_null_sections_take_defaults() {
        let config = map_str("project: ~\nplugins: ~\ndependencies: ~\ntasks: ~\n").unwrap();
        assert_eq!(config, BuildConfig::default());
    }

    #[test]
    fn test_plugin_without_id_names_index() {
        let err = map_str("plugins:\n  - id: java\n  - version: \"1.0\"\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingField(path) if path == "plugins[1].id"));
    }

    #[test]
    fn test_plugin_id_wrong_type() {
        let err = map_str("plugins:\n  - id: [java]\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidType { path, expected: "string", found: "sequence" }
                if path == "plugins[0].id"
        ));
    }

    #[test]
    fn test_non_string_dependency_names_scope_and_index() {
        let err = map_str("dependencies:\n  api:\n    - a:b\n    - 42\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidType { path, found: "number", .. } if path == "dependencies.api[1]"
        ));
    }

    #[test]
    fn test_unquoted_version_is_rejected() {
        let err = map_str("project:\n  version: 1.0\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidType { path, .. } if path == "project.version"
        ));
    }

    #[test]
    fn test_root_must_be_mapping() {
        let err = map_str("- a\n- b\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidType { expected: "mapping", found: "sequence", .. }
        ));
    }

    #[test]
    fn test_task_without_type_names_task() {
        let err = map_str("tasks:\n  hello:\n    description: says hi\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingField(path) if path == "tasks.hello.type"));
    }

    #[test]
    fn test_task_body_must_be_mapping() {
        let err = map_str("tasks:\n  hello: Exec\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidType { path, .. } if path == "tasks.hello"
        ));
    }

    #[test]
    fn test_repositories_keep_order_without_interpretation() {
        let config =
            map_str("repositories: [\"https://b.example.com\", mavenCentral, \"not a url\", mavenCentral]\n")
                .unwrap();
        assert_eq!(
            config.repositories,
            vec!["https://b.example.com", "mavenCentral", "not a url", "mavenCentral"]
        );
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let yaml = "plugins:\n  - id: java\ntasks:\n  clean2:\n    type: Delete\n    delete: [build]\n";
        assert_eq!(map_str(yaml).unwrap(), map_str(yaml).unwrap());
    }
}
