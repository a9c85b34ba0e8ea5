//! Data model shared by the classifier, the grouping engine and the renderers.
//!
//! Two maps carry the whole result of a run:
//!
//! - [`FuncMap`]: owner key → ordered example entries, one per package
//! - [`PackageCollection`]: package key → [`FuncMap`]
//!
//! Both are backed by `BTreeMap` so that iteration (and therefore the
//! rendered report) is ordered lexicographically by key. Example entries keep
//! the order in which they were discovered.

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// Suffix carried by the package name of external test files.
pub const TEST_PACKAGE_SUFFIX: &str = "_test";

/// A function or method declaration as yielded by the source collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Identifier exactly as written in source.
    pub name: String,
    /// `path:line:column` of the declaration.
    pub position: String,
}

impl Declaration {
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
        }
    }
}

/// The function, method or package an example documents.
///
/// Key formats:
/// - `""`: the package itself
/// - `Name`: a function
/// - `Type.Method`: a method on `Type`
///
/// Equality is exact, case-sensitive string equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerKey(String);

impl OwnerKey {
    /// Owner key of the package itself.
    pub fn package() -> Self {
        Self(String::new())
    }

    pub fn function(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn method(type_name: &str, method_name: &str) -> Self {
        Self(format!("{type_name}.{method_name}"))
    }

    pub fn is_package(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OwnerKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One discovered example: where it is and the declaration name it was
/// written under. Displays as `position<TAB>name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleEntry {
    pub position: String,
    pub name: String,
}

impl ExampleEntry {
    pub fn new(position: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            name: name.into(),
        }
    }
}

impl From<&Declaration> for ExampleEntry {
    fn from(decl: &Declaration) -> Self {
        Self::new(decl.position.clone(), decl.name.clone())
    }
}

impl fmt::Display for ExampleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.position, self.name)
    }
}

/// Owner key → examples documenting it, for one package.
///
/// An owner with an empty list is a known function or method without any
/// example.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FuncMap {
    owners: BTreeMap<OwnerKey, Vec<ExampleEntry>>,
}

impl FuncMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `owner` is present, leaving any existing examples untouched.
    pub fn ensure_owner(&mut self, owner: OwnerKey) {
        self.owners.entry(owner).or_default();
    }

    /// Append an example to `owner`, creating the owner if needed.
    pub fn push_example(&mut self, owner: OwnerKey, entry: ExampleEntry) {
        self.owners.entry(owner).or_default().push(entry);
    }

    /// Union `other` into `self`: lists at equal keys are concatenated,
    /// `self`'s entries first.
    pub fn merge(&mut self, other: FuncMap) {
        for (owner, entries) in other.owners {
            self.owners.entry(owner).or_default().extend(entries);
        }
    }

    pub fn get(&self, owner: &OwnerKey) -> Option<&[ExampleEntry]> {
        self.owners.get(owner).map(Vec::as_slice)
    }

    pub fn contains(&self, owner: &OwnerKey) -> bool {
        self.owners.contains_key(owner)
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Total number of example entries across all owners.
    pub fn example_count(&self) -> usize {
        self.owners.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, OwnerKey, Vec<ExampleEntry>> {
        self.owners.iter()
    }
}

impl<'a> IntoIterator for &'a FuncMap {
    type Item = (&'a OwnerKey, &'a Vec<ExampleEntry>);
    type IntoIter = btree_map::Iter<'a, OwnerKey, Vec<ExampleEntry>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Logical package identity, rendered as `"<name> in <path>"`.
///
/// The test-variant suffix is stripped on construction, so `foo` and
/// `foo_test` in the same directory produce equal keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageKey(String);

impl PackageKey {
    pub fn new(package_name: &str, package_path: &str) -> Self {
        Self(format!(
            "{} in {}",
            canonical_package_name(package_name),
            package_path
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip the test-variant suffix from a package name.
pub fn canonical_package_name(name: &str) -> &str {
    name.strip_suffix(TEST_PACKAGE_SUFFIX).unwrap_or(name)
}

/// Package key → [`FuncMap`]; the result of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageCollection {
    packages: BTreeMap<PackageKey, FuncMap>,
}

impl PackageCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn entry(&mut self, key: PackageKey) -> btree_map::Entry<'_, PackageKey, FuncMap> {
        self.packages.entry(key)
    }

    pub fn get(&self, key: &PackageKey) -> Option<&FuncMap> {
        self.packages.get(key)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, PackageKey, FuncMap> {
        self.packages.iter()
    }
}

impl<'a> IntoIterator for &'a PackageCollection {
    type Item = (&'a PackageKey, &'a FuncMap);
    type IntoIter = btree_map::Iter<'a, PackageKey, FuncMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_key_formats() {
        assert!(OwnerKey::package().is_package());
        assert_eq!(OwnerKey::function("Foo").as_str(), "Foo");
        assert_eq!(OwnerKey::method("Buffer", "Len").as_str(), "Buffer.Len");
        assert_ne!(OwnerKey::from("foo"), OwnerKey::from("Foo"));
    }

    #[test]
    fn test_example_entry_display_uses_tab() {
        let entry = ExampleEntry::new("a.go:3:1", "ExampleFoo");
        assert_eq!(entry.to_string(), "a.go:3:1\tExampleFoo");
    }

    #[test]
    fn test_ensure_owner_keeps_existing_examples() {
        let mut map = FuncMap::new();
        map.push_example("Foo".into(), ExampleEntry::new("a.go:1:1", "ExampleFoo"));
        map.ensure_owner("Foo".into());

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&"Foo".into()).map(<[_]>::len), Some(1));
    }

    #[test]
    fn test_merge_concatenates_lists() {
        let mut left = FuncMap::new();
        left.push_example("Foo".into(), ExampleEntry::new("a.go:1:1", "ExampleFoo"));
        left.ensure_owner("Bar".into());

        let mut right = FuncMap::new();
        right.push_example("Foo".into(), ExampleEntry::new("b.go:1:1", "ExampleFoo_two"));
        right.ensure_owner("Bar".into());
        right.ensure_owner("Baz".into());

        left.merge(right);

        assert_eq!(left.len(), 3);
        let foo = left.get(&"Foo".into()).unwrap();
        assert_eq!(foo[0].name, "ExampleFoo");
        assert_eq!(foo[1].name, "ExampleFoo_two");
        assert_eq!(left.get(&"Bar".into()).unwrap().len(), 0);
    }

    #[test]
    fn test_package_key_folds_test_variant() {
        let base = PackageKey::new("demo", "github.com/x/demo");
        let test = PackageKey::new("demo_test", "github.com/x/demo");
        assert_eq!(base, test);
        assert_eq!(base.as_str(), "demo in github.com/x/demo");
    }

    #[test]
    fn test_canonical_package_name() {
        assert_eq!(canonical_package_name("io_test"), "io");
        assert_eq!(canonical_package_name("io"), "io");
        assert_eq!(canonical_package_name("_test"), "");
    }
}
