//! Per-file forward scan: lines -> comment blocks -> classified symbols.
//!
//! Each file is scanned independently with no shared state, so callers may
//! fan scanning out across threads; the output is one [`FileSymbols`] per
//! file, merged later by the resolution layer.

use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::base::{ScanOptions, markers};
use crate::symbols::{FileSymbols, Symbol, SymbolKind};

use super::classify::classify_declaration;
use super::comment::{CommentBlock, State};
use super::lines::LineScanner;

/// Scans one file's text into a per-file symbol table.
pub struct FileScanner<'a> {
    options: &'a ScanOptions,
    state: State,
    block: CommentBlock,
    /// The class new symbols attach to: the last classified constructor,
    /// or the file stem before any constructor is seen.
    class_name: Arc<str>,
    /// Inheritance tags collected anywhere in the file, claimed and cleared
    /// by the next constructor. They survive discarded comment blocks.
    pending_parents: Vec<Arc<str>>,
    out: FileSymbols,
}

impl<'a> FileScanner<'a> {
    pub fn new(file: &str, options: &'a ScanOptions) -> Self {
        let class_name = default_class_name(file);
        Self {
            options,
            state: State::Idle,
            block: CommentBlock::default(),
            class_name: class_name.clone(),
            pending_parents: Vec::new(),
            out: FileSymbols {
                file: file.into(),
                classes: IndexMap::new(),
                export_class: class_name,
                exports: Vec::new(),
                edges: Vec::new(),
                symbol_count: 0,
            },
        }
    }

    /// Run the scan. An unterminated comment block at end-of-file is
    /// dropped silently; that matches the behavior this scanner preserves.
    pub fn scan(mut self, text: &str) -> FileSymbols {
        for (line_no, line) in LineScanner::new(text) {
            self.handle_line(line_no, line);
        }
        self.out.export_class = self.class_name;
        debug!(
            file = %self.out.file,
            symbols = self.out.symbol_count,
            "file scan complete"
        );
        self.out
    }

    fn handle_line(&mut self, line_no: usize, line: &str) {
        // export declarations are recognized in any state and never
        // transition the machine
        if let Some(export) = parse_export(line) {
            trace!(line = line_no, export = %export, "export declaration");
            self.out.exports.push(export);
            return;
        }

        match self.state {
            State::Idle => {
                if line.starts_with(markers::DOC_START) {
                    self.block = CommentBlock::open();
                    self.state = State::InComment;
                }
            }
            State::InComment => {
                self.block.absorb(line, self.options);
                if line.starts_with(markers::DOC_END) {
                    self.state = State::AwaitingIdentifier;
                }
            }
            State::AwaitingIdentifier => {
                self.take_declaration(line_no, line);
                self.state = State::Idle;
            }
        }
    }

    /// Consume the declaration line following a closed block.
    fn take_declaration(&mut self, line_no: usize, line: &str) {
        let block = std::mem::take(&mut self.block);

        // inheritance tags outlive their block until a constructor claims them
        self.pending_parents.extend(block.supertypes.iter().cloned());

        let Some(classified) = classify_declaration(line, &block, self.options) else {
            trace!(line = line_no, "no namespace, resetting comment block");
            return;
        };

        let identifier: Arc<str> = classified.identifier.into();

        if classified.kind == SymbolKind::Constructor {
            self.class_name = identifier.clone();
            for parent in self.pending_parents.drain(..) {
                self.out.edges.push((identifier.clone(), parent));
            }
        }

        let symbol = Symbol {
            name: identifier,
            class: self.class_name.clone(),
            kind: classified.kind,
            privacy: classified.privacy,
            doc: block.text.into(),
            params: block.params,
            has_return: block.has_return,
            line: line_no as u32,
        };
        trace!(
            class = %self.class_name,
            name = %symbol.name,
            kind = symbol.kind.display(),
            "classified symbol"
        );

        self.out
            .classes
            .entry(self.class_name.clone())
            .or_default()
            .insert(symbol);
        self.out.symbol_count += 1;
    }
}

/// Scan one file's contents into its symbol table.
pub fn scan_file(file: &str, text: &str, options: &ScanOptions) -> FileSymbols {
    FileScanner::new(file, options).scan(text)
}

/// Parse an export declaration line: the identifier is the last dot segment
/// of the call's first argument, quotes stripped.
fn parse_export(line: &str) -> Option<Arc<str>> {
    let rest = line.strip_prefix(markers::EXPORT_CALL)?;
    let first_arg = rest.split(',').next()?.trim().trim_matches('\'');
    let local = first_arg.rsplit('.').next().unwrap_or(first_arg);
    Some(local.into())
}

/// Classes default to the file stem until a constructor names one.
fn default_class_name(file: &str) -> Arc<str> {
    Path::new(file)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.to_string())
        .into()
}
