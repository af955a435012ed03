//! # protodoc
//!
//! Symbol extraction and inheritance resolution for JSDoc-annotated,
//! prototype-style JavaScript.
//!
//! The core scans source text for documentation comment blocks, classifies
//! the declaration following each block (constructor, static, function,
//! getter, setter, property), builds per-class symbol tables, and resolves
//! method inheritance across the class graph declared by `@extends`/`@mixin`
//! tags. Export declarations flip default-private symbols to public, before
//! and after the inheritance merge.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → source-tree discovery, file loading
//!   ↓
//! resolve   → DocIndex, inheritance merge, export privacy
//!   ↓
//! symbols   → Symbol, ClassEntry, per-file tables
//!   ↓
//! scan      → line scanner, comment tokenizer, classifier
//!   ↓
//! base      → markers, ScanOptions
//! ```
//!
//! ## Usage
//!
//! ```
//! use protodoc::{ScanOptions, extract};
//!
//! let files = vec![(
//!     "objects/base.js".to_string(),
//!     "/**\n * @constructor\n */\nX.base = function() {\n};\n".to_string(),
//! )];
//! let index = extract(&files, &ScanOptions::default()).unwrap();
//! assert_eq!(index.total_symbols(), 1);
//! ```

/// Foundation: markers and scan configuration.
pub mod base;

/// Scanning: line iteration, comment tokenizing, declaration classification.
pub mod scan;

/// Symbol model: kinds, privacy, per-class and per-file tables.
pub mod symbols;

/// Resolution: merged index, inheritance merge, export privacy.
pub mod resolve;

/// Project loading: file discovery and reading.
pub mod project;

pub use base::ScanOptions;
pub use resolve::{DocIndex, ResolveError};
pub use scan::scan_file;
pub use symbols::{ClassEntry, FileSymbols, Privacy, Symbol, SymbolKind};

use rayon::prelude::*;

/// Run the whole pipeline over an ordered set of `(file identifier, text)`
/// pairs: parallel per-file scans, then the single-threaded merge and
/// inheritance resolution.
pub fn extract(
    files: &[(String, String)],
    options: &ScanOptions,
) -> Result<DocIndex, ResolveError> {
    // per-file scans share no state, so they fan out freely
    let scanned: Vec<FileSymbols> = files
        .par_iter()
        .map(|(file, text)| scan_file(file, text, options))
        .collect();

    let mut index = DocIndex::from_files(scanned);
    index.resolve_inheritance()?;

    tracing::info!(
        files = files.len(),
        total_symbols = index.total_symbols(),
        "extraction complete"
    );
    Ok(index)
}
