//! Semantic validation of a mapped configuration.
//!
//! Every rule is checked and every violation collected before anything is
//! reported, so one run surfaces the whole problem set.

use buildmeta_core::{BuildConfig, DependencyScope, TaskKind, TaskSpec, is_valid_coordinate};

use crate::ValidationError;

/// Validate a configuration, aggregating all violations into one error.
pub fn validate(config: &BuildConfig) -> Result<(), ValidationError> {
    let mut violations = Vec::new();

    for (i, plugin) in config.plugins.iter().enumerate() {
        if plugin.id.trim().is_empty() {
            violations.push(format!("plugins[{}]: plugin id must not be blank", i));
        }
    }

    if let Some(deps) = &config.dependencies {
        for scope in DependencyScope::ALL {
            for (i, coordinate) in deps.scope(scope).iter().enumerate() {
                if !is_valid_coordinate(coordinate) {
                    violations.push(format!(
                        "dependencies.{}[{}]: invalid dependency '{}' (expected group:artifact or group:artifact:version)",
                        scope, i, coordinate
                    ));
                }
            }
        }
    }

    for (name, task) in &config.tasks {
        check_task(name, task, &mut violations);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { violations })
    }
}

fn check_task(name: &str, task: &TaskSpec, violations: &mut Vec<String>) {
    let type_name = task.kind.type_name();
    match &task.kind {
        TaskKind::Copy(spec) | TaskKind::Sync(spec) => {
            if !spec.has_endpoint() {
                violations.push(format!("task '{}' ({}) requires from or into", name, type_name));
            }
        }
        TaskKind::Exec(spec) => {
            if spec.command_line.is_empty() {
                violations.push(format!("task '{}' (Exec) requires commandLine", name));
            }
        }
        TaskKind::JavaExec(spec) => {
            if !spec.has_main_class() {
                violations.push(format!("task '{}' (JavaExec) requires mainClass", name));
            }
        }
        TaskKind::Delete(spec) => {
            if spec.delete.is_empty() {
                violations.push(format!("task '{}' (Delete) requires delete", name));
            }
        }
        TaskKind::Generic(_) => {}
    }
}
