//! Foundation types for the protodoc pipeline.
//!
//! This module provides:
//! - [`markers`] - The literal markers and tags the scanner matches on
//! - [`ScanOptions`] - Scan configuration threaded explicitly through the pipeline
//!
//! This module has NO dependencies on other protodoc modules.

pub mod markers;

/// Configuration for a scan run.
///
/// Threaded through scanning explicitly; the pipeline keeps no module-level
/// state, so independent runs with different namespaces can coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// The namespace prefix class declarations must start with (e.g. `X`
    /// for `X.renderer3D = function() {...}`).
    pub namespace: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            namespace: markers::DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl ScanOptions {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Strip the dotted namespace qualifier from a class reference, so
    /// `X.base` and `base` name the same class everywhere downstream.
    pub fn strip_namespace(&self, target: &str) -> String {
        let qualifier = format!("{}.", self.namespace);
        target.replace(&qualifier, "")
    }
}
