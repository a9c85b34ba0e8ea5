//! Naming-convention classifier for Go function declarations.
//!
//! Go marks tests, benchmarks and documentation examples purely by name:
//!
//! | Name              | Kind            | Owner key  |
//! |-------------------|-----------------|------------|
//! | `TestFoo`         | test            | -          |
//! | `BenchmarkFoo`    | benchmark       | -          |
//! | `Foo`             | plain           | `Foo`      |
//! | `Example`         | function example| `""`       |
//! | `ExampleFoo`      | function example| `Foo`      |
//! | `ExampleFoo_bar`  | sub-example     | `Foo`      |
//! | `ExampleFoo_Bar`  | method example  | `Foo.Bar`  |
//!
//! A prefix only counts when the character after it is not a lower-case
//! letter, so `Testify` is a plain function and not a test.

use crate::core::OwnerKey;

pub const TEST_PREFIX: &str = "Test";
pub const BENCHMARK_PREFIX: &str = "Benchmark";
pub const EXAMPLE_PREFIX: &str = "Example";

const SEPARATOR: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Test,
    Benchmark,
    /// An ordinary exported function or method.
    Plain,
    /// `ExampleFoo`, or `Example` alone for the package itself.
    FunctionExample,
    /// `ExampleFoo_suffix`, a further example of `Foo` (or of the package).
    SubExample,
    /// `ExampleType_Method`.
    MethodExample,
}

impl DeclKind {
    pub fn is_example(self) -> bool {
        matches!(
            self,
            Self::FunctionExample | Self::SubExample | Self::MethodExample
        )
    }

    /// Tests and benchmarks never reach the report.
    pub fn is_excluded(self) -> bool {
        matches!(self, Self::Test | Self::Benchmark)
    }
}

/// Result of classifying one declaration name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: DeclKind,
    /// `None` for tests and benchmarks.
    pub owner: Option<OwnerKey>,
}

impl Classification {
    fn excluded(kind: DeclKind) -> Self {
        Self { kind, owner: None }
    }

    fn owned(kind: DeclKind, owner: OwnerKey) -> Self {
        Self {
            kind,
            owner: Some(owner),
        }
    }
}

/// True when `name` starts with `prefix` and the rest is either empty or
/// does not begin with a lower-case letter.
pub fn is_prefixed_and_capitalized(name: &str, prefix: &str) -> bool {
    match name.strip_prefix(prefix) {
        Some(rest) => rest.chars().next().map_or(true, |c| !c.is_lowercase()),
        None => false,
    }
}

pub fn is_test(name: &str) -> bool {
    is_prefixed_and_capitalized(name, TEST_PREFIX)
}

pub fn is_benchmark(name: &str) -> bool {
    is_prefixed_and_capitalized(name, BENCHMARK_PREFIX)
}

pub fn is_example(name: &str) -> bool {
    is_prefixed_and_capitalized(name, EXAMPLE_PREFIX)
}

/// Classify a declaration name and derive the owner it documents.
pub fn classify(name: &str) -> Classification {
    if is_test(name) {
        return Classification::excluded(DeclKind::Test);
    }
    if is_benchmark(name) {
        return Classification::excluded(DeclKind::Benchmark);
    }
    if !is_example(name) {
        return Classification::owned(DeclKind::Plain, OwnerKey::function(name));
    }

    match name.split_once(SEPARATOR) {
        None => classify_function_example(name),
        Some((base, rest)) => classify_sub_example(base, rest),
    }
}

fn strip_example_prefix(text: &str) -> &str {
    text.strip_prefix(EXAMPLE_PREFIX).unwrap_or(text)
}

fn classify_function_example(name: &str) -> Classification {
    // An empty suffix is the package-level key.
    let suffix = strip_example_prefix(name);
    Classification::owned(DeclKind::FunctionExample, OwnerKey::function(suffix))
}

// `base` is the text before the first separator, `rest` everything after it.
fn classify_sub_example(base: &str, rest: &str) -> Classification {
    let owner = strip_example_prefix(base);
    let second = rest.split(SEPARATOR).next().unwrap_or("");
    let names_method = second.chars().next().is_some_and(char::is_uppercase);

    // `Example_Method` has no type to hang the method on; keep it at package level.
    if names_method && !owner.is_empty() {
        Classification::owned(DeclKind::MethodExample, OwnerKey::method(owner, second))
    } else {
        // NOTE: every `ExampleFoo_xxx` collapses onto `Foo`; only the stored
        // entry name tells them apart.
        Classification::owned(DeclKind::SubExample, OwnerKey::function(owner))
    }
}
