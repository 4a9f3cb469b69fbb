//! Declared dependency coordinates grouped by scope.

use derive_more::Display;
use serde::Serialize;

/// One of the eight dependency configurations a host distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display)]
#[serde(rename_all = "camelCase")]
pub enum DependencyScope {
    #[display("implementation")]
    Implementation,
    #[display("api")]
    Api,
    #[display("compileOnly")]
    CompileOnly,
    #[display("runtimeOnly")]
    RuntimeOnly,
    #[display("testImplementation")]
    TestImplementation,
    #[display("testApi")]
    TestApi,
    #[display("testCompileOnly")]
    TestCompileOnly,
    #[display("testRuntimeOnly")]
    TestRuntimeOnly,
}

impl DependencyScope {
    /// All scopes, in the order they are mapped, validated and applied.
    pub const ALL: [DependencyScope; 8] = [
        DependencyScope::Implementation,
        DependencyScope::Api,
        DependencyScope::CompileOnly,
        DependencyScope::RuntimeOnly,
        DependencyScope::TestImplementation,
        DependencyScope::TestApi,
        DependencyScope::TestCompileOnly,
        DependencyScope::TestRuntimeOnly,
    ];

    /// The document key for this scope.
    pub fn key(&self) -> &'static str {
        match self {
            DependencyScope::Implementation => "implementation",
            DependencyScope::Api => "api",
            DependencyScope::CompileOnly => "compileOnly",
            DependencyScope::RuntimeOnly => "runtimeOnly",
            DependencyScope::TestImplementation => "testImplementation",
            DependencyScope::TestApi => "testApi",
            DependencyScope::TestCompileOnly => "testCompileOnly",
            DependencyScope::TestRuntimeOnly => "testRuntimeOnly",
        }
    }
}

impl std::str::FromStr for DependencyScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DependencyScope::ALL
            .into_iter()
            .find(|scope| scope.key() == s)
            .ok_or_else(|| format!("Unknown dependency scope: {}", s))
    }
}

/// Dependency coordinates per scope, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencySpec {
    pub implementation: Vec<String>,
    pub api: Vec<String>,
    pub compile_only: Vec<String>,
    pub runtime_only: Vec<String>,
    pub test_implementation: Vec<String>,
    pub test_api: Vec<String>,
    pub test_compile_only: Vec<String>,
    pub test_runtime_only: Vec<String>,
}

impl DependencySpec {
    pub fn scope(&self, scope: DependencyScope) -> &[String] {
        match scope {
            DependencyScope::Implementation => &self.implementation,
            DependencyScope::Api => &self.api,
            DependencyScope::CompileOnly => &self.compile_only,
            DependencyScope::RuntimeOnly => &self.runtime_only,
            DependencyScope::TestImplementation => &self.test_implementation,
            DependencyScope::TestApi => &self.test_api,
            DependencyScope::TestCompileOnly => &self.test_compile_only,
            DependencyScope::TestRuntimeOnly => &self.test_runtime_only,
        }
    }

    pub fn scope_mut(&mut self, scope: DependencyScope) -> &mut Vec<String> {
        match scope {
            DependencyScope::Implementation => &mut self.implementation,
            DependencyScope::Api => &mut self.api,
            DependencyScope::CompileOnly => &mut self.compile_only,
            DependencyScope::RuntimeOnly => &mut self.runtime_only,
            DependencyScope::TestImplementation => &mut self.test_implementation,
            DependencyScope::TestApi => &mut self.test_api,
            DependencyScope::TestCompileOnly => &mut self.test_compile_only,
            DependencyScope::TestRuntimeOnly => &mut self.test_runtime_only,
        }
    }

    /// Every coordinate paired with its scope, scope by scope.
    pub fn iter(&self) -> impl Iterator<Item = (DependencyScope, &str)> {
        DependencyScope::ALL.into_iter().flat_map(move |scope| {
            self.scope(scope)
                .iter()
                .map(move |coordinate| (scope, coordinate.as_str()))
        })
    }

    /// Total number of declared coordinates across all scopes.
    pub fn len(&self) -> usize {
        DependencyScope::ALL
            .iter()
            .map(|scope| self.scope(*scope).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Check a `group:artifact` or `group:artifact:version` coordinate.
pub fn is_valid_coordinate(coordinate: &str) -> bool {
    if coordinate.trim().is_empty() {
        return false;
    }
    let segments: Vec<&str> = coordinate.split(':').collect();
    matches!(segments.len(), 2 | 3) && segments.iter().all(|s| !s.trim().is_empty())
}
