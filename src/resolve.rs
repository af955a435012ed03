//! Inheritance resolution and export-privacy propagation.
//!
//! [`DocIndex`] is the union of all per-file symbol tables. Resolution walks
//! the tag-declared class graph depth-first, post-order: every parent is
//! fully resolved before its symbols merge downward, so multi-level chains
//! expand bottom-up. Merging mutates class entries in place, which is why
//! this phase runs single-threaded after the parallel per-file scans.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;
use tracing::{debug, trace};

use crate::symbols::{ClassEntry, FileSymbols, Privacy};

/// The only caller-visible error of the core. Everything else (unterminated
/// blocks, unresolvable parents, classification misses) is absorbed locally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The tag-declared inheritance graph contains a cycle. The original
    /// tool recursed unboundedly here; the visited-set guard turns that
    /// into an explicit error.
    #[error("cyclic inheritance through class `{class}`")]
    CyclicInheritance { class: Arc<str> },
}

/// Merged, privacy-resolved symbol tables for a whole file set.
#[derive(Debug, Default)]
pub struct DocIndex {
    /// Class name -> symbols, in order of first appearance across files.
    classes: IndexMap<Arc<str>, ClassEntry>,
    /// Subclass -> superclasses/mixins in declaration order.
    parents: IndexMap<Arc<str>, Vec<Arc<str>>>,
    /// Class -> identifiers its originating file exported.
    exports: FxHashMap<Arc<str>, Vec<Arc<str>>>,
    total_symbols: usize,
}

impl DocIndex {
    /// Collect all per-file tables into one index and run the first
    /// export-privacy pass for every class.
    pub fn from_files(files: impl IntoIterator<Item = FileSymbols>) -> Self {
        let mut index = Self::default();

        for file in files {
            for (class, entry) in file.classes {
                match index.classes.entry(class) {
                    indexmap::map::Entry::Occupied(mut slot) => {
                        for symbol in entry.iter() {
                            slot.get_mut().insert(symbol.clone());
                        }
                    }
                    indexmap::map::Entry::Vacant(slot) => {
                        slot.insert(entry);
                    }
                }
            }
            for (subclass, parent) in file.edges {
                index.parents.entry(subclass).or_default().push(parent);
            }
            if !file.exports.is_empty() {
                index.exports.insert(file.export_class, file.exports);
            }
            index.total_symbols += file.symbol_count;
        }

        let classes: Vec<Arc<str>> = index.classes.keys().cloned().collect();
        for class in classes {
            index.propagate_exports(&class);
        }

        index
    }

    /// Resolve inherited symbols for every declared subclass.
    pub fn resolve_inheritance(&mut self) -> Result<(), ResolveError> {
        let subclasses: Vec<Arc<str>> = self.parents.keys().cloned().collect();
        let mut visiting = FxHashSet::default();
        for class in subclasses {
            self.resolve(&class, &mut visiting)?;
        }
        Ok(())
    }

    /// Depth-first, post-order: parents first, then merge downward, then
    /// re-propagate exports so transitively inherited symbols keep the
    /// ancestor's public status.
    fn resolve(
        &mut self,
        class: &Arc<str>,
        visiting: &mut FxHashSet<Arc<str>>,
    ) -> Result<(), ResolveError> {
        if !visiting.insert(class.clone()) {
            return Err(ResolveError::CyclicInheritance {
                class: class.clone(),
            });
        }

        let parents = self.parents.get(class).cloned().unwrap_or_default();
        for parent in &parents {
            self.resolve(parent, visiting)?;
            self.merge_from_parent(class, parent);
            self.propagate_exports(class);
        }

        visiting.remove(class);
        Ok(())
    }

    /// Merge a parent's current entry into a subclass's entry.
    ///
    /// Constructors are never copied. An identifier the subclass declared
    /// itself blocks inheritance unless its documentation carries the
    /// inherit-doc marker; identifiers inherited from an earlier-merged
    /// parent are overwritten by later parents, so the last mixin in
    /// declaration order wins.
    fn merge_from_parent(&mut self, class: &Arc<str>, parent: &Arc<str>) {
        // an undefined parent is a silent no-op, never an error
        let Some(parent_entry) = self.classes.get(parent).cloned() else {
            trace!(class = %class, parent = %parent, "parent class not defined, skipping merge");
            return;
        };
        let Some(entry) = self.classes.get_mut(class) else {
            return;
        };

        let mut merged = 0usize;
        for symbol in parent_entry.iter() {
            if symbol.kind.is_constructor() {
                continue;
            }
            if let Some(existing) = entry.get(&symbol.name) {
                let local = existing.class == *class;
                if local && !existing.inherits_doc() {
                    // local override wins
                    continue;
                }
            }
            entry.insert(symbol.clone());
            merged += 1;
        }
        debug!(class = %class, parent = %parent, merged, "inherited symbols");
    }

    /// Mark every exported identifier of a class as public. No-op for
    /// identifiers not in the class table; idempotent, because resolution
    /// re-runs it after every merge step.
    pub fn propagate_exports(&mut self, class: &str) {
        let Some(exports) = self.exports.get(class) else {
            return;
        };
        let Some(entry) = self.classes.get_mut(class) else {
            return;
        };
        for name in exports {
            if let Some(symbol) = entry.get_mut(name) {
                symbol.privacy = Privacy::Public;
            }
        }
    }

    /// Ordered ancestor list for a class, nearest first: each direct parent
    /// followed by its own ancestors, duplicates dropped. This is the input
    /// an external diagram renderer consumes.
    pub fn inheritance_chain(&self, class: &str) -> Vec<Arc<str>> {
        let mut chain = Vec::new();
        self.collect_chain(class, &mut chain);
        chain
    }

    fn collect_chain(&self, class: &str, chain: &mut Vec<Arc<str>>) {
        let Some(parents) = self.parents.get(class) else {
            return;
        };
        for parent in parents {
            if chain.iter().any(|seen| seen == parent) {
                continue;
            }
            chain.push(parent.clone());
            self.collect_chain(parent, chain);
        }
    }

    pub fn classes(&self) -> impl Iterator<Item = (&Arc<str>, &ClassEntry)> {
        self.classes.iter()
    }

    pub fn class_entry(&self, class: &str) -> Option<&ClassEntry> {
        self.classes.get(class)
    }

    pub fn parents_of(&self, class: &str) -> &[Arc<str>] {
        self.parents.get(class).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Running total of symbols classified across all files, for reporting.
    pub fn total_symbols(&self) -> usize {
        self.total_symbols
    }
}
