//! Symbol model - pure data produced by the scanning layer.
//!
//! One [`FileSymbols`] per scanned file, holding one [`ClassEntry`] per class
//! seen in that file. The resolution layer merges these across files; nothing
//! here mutates global state.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::base::markers;

/// What kind of symbol a declaration line produced.
///
/// Kind is fixed once classified; inheritance merge never changes it. The
/// variant order is the stable sort key for display: constructors first,
/// properties last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SymbolKind {
    /// The class's instantiation point; never inherited.
    Constructor,
    /// A method on the class object itself, not on its prototype.
    Static,
    /// An instance method on the prototype.
    Function,
    /// A `__defineGetter__`-defined accessor.
    Getter,
    /// A `__defineSetter__`-defined accessor.
    Setter,
    /// A `this.<name>` assignment inside a constructor body.
    Property,
}

impl SymbolKind {
    pub fn display(&self) -> &'static str {
        match self {
            SymbolKind::Constructor => "constructor",
            SymbolKind::Static => "static",
            SymbolKind::Function => "function",
            SymbolKind::Getter => "getter",
            SymbolKind::Setter => "setter",
            SymbolKind::Property => "property",
        }
    }

    pub fn is_constructor(&self) -> bool {
        matches!(self, SymbolKind::Constructor)
    }
}

/// Symbol visibility. Private unless exported or public by convention.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Privacy {
    #[default]
    Private,
    Public,
}

/// A documented symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    /// Local identifier, getter/setter suffix included (`id_get`, `id_set`).
    pub name: Arc<str>,
    /// The class that declared this symbol. Inherited copies keep their
    /// declaring class, which is how the resolver tells a local override
    /// from an earlier-merged inherited symbol.
    pub class: Arc<str>,
    pub kind: SymbolKind,
    pub privacy: Privacy,
    /// The originating comment text, open/close markers included.
    pub doc: Arc<str>,
    /// `$`-prefixed parameter names from `@param` tags.
    pub params: Vec<Arc<str>>,
    /// Whether an `@return` tag was present.
    pub has_return: bool,
    /// Declaration line number (1-based) in the originating file.
    pub line: u32,
}

impl Symbol {
    pub fn is_public(&self) -> bool {
        self.privacy == Privacy::Public
    }

    /// Whether this symbol asks to inherit its ancestor's documentation.
    /// An override without this marker suppresses inheritance of the
    /// same identifier entirely.
    pub fn inherits_doc(&self) -> bool {
        self.doc.contains(markers::TAG_INHERIT_DOC)
    }

    /// Rendering name: getters and setters share a display name with the
    /// accessor suffix stripped.
    pub fn display_name(&self) -> &str {
        match self.kind {
            SymbolKind::Getter => self
                .name
                .strip_suffix(markers::GETTER_SUFFIX)
                .unwrap_or(&self.name),
            SymbolKind::Setter => self
                .name
                .strip_suffix(markers::SETTER_SUFFIX)
                .unwrap_or(&self.name),
            _ => &self.name,
        }
    }
}

/// The symbols of one class, keyed by identifier, insertion-ordered.
#[derive(Clone, Debug, Default)]
pub struct ClassEntry {
    symbols: IndexMap<Arc<str>, Symbol>,
}

impl ClassEntry {
    /// Insert a symbol under its identifier, replacing any previous one.
    pub fn insert(&mut self, symbol: Symbol) {
        self.symbols.insert(symbol.name.clone(), symbol);
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Symbol> {
        self.symbols.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }

    /// Display order: an explicit sort by `(kind, identifier)`.
    pub fn sorted(&self) -> Vec<&Symbol> {
        let mut all: Vec<&Symbol> = self.symbols.values().collect();
        all.sort_by(|a, b| (a.kind, &a.name).cmp(&(b.kind, &b.name)));
        all
    }
}

/// Everything one file's scan produced.
#[derive(Clone, Debug)]
pub struct FileSymbols {
    /// The file identifier this table came from.
    pub file: Arc<str>,
    /// Class name -> symbols declared (or defaulted) in this file.
    pub classes: IndexMap<Arc<str>, ClassEntry>,
    /// The class the file's export declarations attach to: the last-seen
    /// constructor class, or the file stem when no constructor was declared.
    pub export_class: Arc<str>,
    /// Identifiers named in export declaration lines, in order of appearance.
    pub exports: Vec<Arc<str>>,
    /// (subclass, superclass-or-mixin) pairs in declaration order.
    pub edges: Vec<(Arc<str>, Arc<str>)>,
    /// Number of symbols classified in this file.
    pub symbol_count: usize,
}
