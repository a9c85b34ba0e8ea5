//! Folds per-package results into the run-wide [`PackageCollection`].

use crate::core::{FuncMap, PackageCollection, PackageKey};
use std::collections::btree_map::Entry;

impl PackageCollection {
    /// Insert a package's owner map, merging with an existing group of the
    /// same key. `foo_test` lands in the group of `foo` when both share
    /// `package_path`.
    pub fn add_package(&mut self, package_name: &str, package_path: &str, funcs: FuncMap) {
        let key = PackageKey::new(package_name, package_path);
        match self.entry(key) {
            Entry::Occupied(mut existing) => {
                log::debug!(
                    "Merging {} owners of {} into existing group {}",
                    funcs.len(),
                    package_name,
                    existing.key()
                );
                existing.get_mut().merge(funcs);
            }
            Entry::Vacant(slot) => {
                log::debug!("New package group {}", slot.key());
                slot.insert(funcs);
            }
        }
    }
}
