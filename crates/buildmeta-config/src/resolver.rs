//! Task variant resolution.
//!
//! The `type` field selects the variant with an exact, case-sensitive match.
//! Unknown types, near-miss casing included, become [`TaskKind::Generic`]
//! and keep their remaining keys as properties.

use buildmeta_core::value::Mapping;
use buildmeta_core::{CopySpec, DeleteSpec, ExecSpec, GenericSpec, JavaExecSpec, TaskKind, TaskSpec};
use tracing::warn;

use crate::ParseError;
use crate::mapper::{join_key, optional_bool, optional_string, required_string, string_list, string_map};

/// Keys every task may carry regardless of its type.
pub const RESERVED_KEYS: [&str; 4] = ["type", "description", "group", "dependsOn"];

/// Discriminators with a dedicated variant.
pub const KNOWN_TYPES: [&str; 5] = ["Copy", "Sync", "Exec", "JavaExec", "Delete"];

/// Resolve one task body into its variant.
pub fn resolve(name: &str, body: &Mapping) -> Result<TaskSpec, ParseError> {
    let path = join_key("tasks", name);
    let type_name = required_string(body, "type", &path)?;

    let kind = match type_name.as_str() {
        "Copy" => TaskKind::Copy(copy_spec(body, &path)?),
        "Sync" => TaskKind::Sync(copy_spec(body, &path)?),
        "Exec" => TaskKind::Exec(ExecSpec {
            command_line: string_list(body, "commandLine", &path)?,
            working_dir: optional_string(body, "workingDir", &path)?,
            environment: string_map(body, "environment", &path)?,
            ignore_exit_value: optional_bool(body, "ignoreExitValue", &path)?,
        }),
        "JavaExec" => TaskKind::JavaExec(JavaExecSpec {
            main_class: optional_string(body, "mainClass", &path)?,
            classpath: optional_string(body, "classpath", &path)?,
            args: string_list(body, "args", &path)?,
            jvm_args: string_list(body, "jvmArgs", &path)?,
            working_dir: optional_string(body, "workingDir", &path)?,
            environment: string_map(body, "environment", &path)?,
            ignore_exit_value: optional_bool(body, "ignoreExitValue", &path)?,
        }),
        "Delete" => TaskKind::Delete(DeleteSpec {
            delete: string_list(body, "delete", &path)?,
        }),
        other => {
            if let Some(known) = KNOWN_TYPES.iter().find(|k| k.eq_ignore_ascii_case(other)) {
                warn!(
                    task = %name,
                    task_type = %other,
                    did_you_mean = %known,
                    "Task type differs from a known type only by case; treating it as generic"
                );
            }
            TaskKind::Generic(GenericSpec {
                type_name: other.to_string(),
                properties: body.without(&RESERVED_KEYS),
            })
        }
    };

    Ok(TaskSpec {
        description: optional_string(body, "description", &path)?,
        group: optional_string(body, "group", &path)?,
        depends_on: string_list(body, "dependsOn", &path)?,
        kind,
    })
}

fn copy_spec(body: &Mapping, path: &str) -> Result<CopySpec, ParseError> {
    Ok(CopySpec {
        from: optional_string(body, "from", path)?,
        into: optional_string(body, "into", path)?,
        include: string_list(body, "include", path)?,
        exclude: string_list(body, "exclude", path)?,
    })
}
