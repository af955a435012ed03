//! Declaration-line classification.
//!
//! Given the line immediately following a closed comment block, determine the
//! symbol's local identifier and kind by pure suffix/prefix pattern rules.
//! There is no runtime type inspection; every outcome is a variant of
//! [`SymbolKind`] or a classification miss (`None`).

use crate::base::{ScanOptions, markers};
use crate::symbols::{Privacy, SymbolKind};

use super::comment::CommentBlock;

/// The outcome of classifying one declaration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub identifier: String,
    pub kind: SymbolKind,
    pub privacy: Privacy,
}

/// Classify a declaration line against its closed comment block.
///
/// Returns `None` when the line neither starts with the namespace prefix nor
/// matches the `this.`-property shape ("no namespace, reset"): the comment
/// block is then discarded without producing a symbol.
pub fn classify_declaration(
    line: &str,
    block: &CommentBlock,
    options: &ScanOptions,
) -> Option<Classification> {
    let first_token = line.split_whitespace().next().unwrap_or(line);
    let segments: Vec<&str> = first_token.split('.').collect();
    // split always yields at least one segment
    let identifier = segments.last().copied().unwrap_or(first_token);

    if !line.starts_with(options.namespace.as_str()) {
        if line.starts_with(markers::THIS_PREFIX) {
            // string-keyed accessors (`this['visible'] = ...`) are public by
            // convention, equivalent to an explicit export declaration
            // TODO: strip the bracket wrapper so string-keyed properties
            // surface their bare name instead of the full accessor token
            let privacy = if string_keyed(line) {
                Privacy::Public
            } else {
                Privacy::Private
            };
            return Some(Classification {
                identifier: identifier.to_string(),
                kind: SymbolKind::Property,
                privacy,
            });
        }
        return None;
    }

    let on_prototype =
        segments.len() >= 2 && segments[segments.len() - 2] == markers::PROTOTYPE_SEGMENT;

    if !on_prototype {
        let kind = if block.is_constructor() {
            SymbolKind::Constructor
        } else {
            SymbolKind::Static
        };
        return Some(Classification {
            identifier: identifier.to_string(),
            kind,
            privacy: Privacy::Private,
        });
    }

    if let Some(name) = accessor_name(identifier, markers::DEFINE_GETTER) {
        return Some(Classification {
            identifier: format!("{name}{}", markers::GETTER_SUFFIX),
            kind: SymbolKind::Getter,
            privacy: Privacy::Public,
        });
    }
    if let Some(name) = accessor_name(identifier, markers::DEFINE_SETTER) {
        return Some(Classification {
            identifier: format!("{name}{}", markers::SETTER_SUFFIX),
            kind: SymbolKind::Setter,
            privacy: Privacy::Public,
        });
    }

    Some(Classification {
        identifier: identifier.to_string(),
        kind: SymbolKind::Function,
        privacy: Privacy::Private,
    })
}

/// `this['...']` / `this["..."]` - a property defined with a string key.
fn string_keyed(line: &str) -> bool {
    let rest = &line[markers::THIS_PREFIX.len()..];
    rest.starts_with("['") || rest.starts_with("[\"")
}

/// `__defineGetter__('name', ...)` - the real name is the first
/// single-quoted string of the call. A non-quoted argument is not an
/// accessor definition we recognize.
fn accessor_name<'a>(identifier: &'a str, call: &str) -> Option<&'a str> {
    identifier.strip_prefix(call)?.split('\'').nth(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(line: &str, doc_lines: &[&str]) -> Option<Classification> {
        let options = ScanOptions::default();
        let mut block = CommentBlock::open();
        for doc_line in doc_lines {
            block.absorb(doc_line, &options);
        }
        classify_declaration(line, &block, &options)
    }

    #[test]
    fn test_constructor() {
        let c = classify("X.base = function() {", &["* @constructor", "*/"]).unwrap();
        assert_eq!(c.identifier, "base");
        assert_eq!(c.kind, SymbolKind::Constructor);
        assert_eq!(c.privacy, Privacy::Private);
    }

    #[test]
    fn test_static_without_constructor_tag() {
        let c = classify("X.matrix.identity = function() {", &["*/"]).unwrap();
        assert_eq!(c.identifier, "identity");
        assert_eq!(c.kind, SymbolKind::Static);
    }

    #[test]
    fn test_prototype_function() {
        let c = classify("X.base.prototype.render = function() {", &["*/"]).unwrap();
        assert_eq!(c.identifier, "render");
        assert_eq!(c.kind, SymbolKind::Function);
        assert_eq!(c.privacy, Privacy::Private);
    }

    #[test]
    fn test_getter() {
        let line = "X.base.prototype.__defineGetter__('id', function() {";
        let c = classify(line, &["*/"]).unwrap();
        assert_eq!(c.identifier, "id_get");
        assert_eq!(c.kind, SymbolKind::Getter);
        assert_eq!(c.privacy, Privacy::Public);
    }

    #[test]
    fn test_setter() {
        let line = "X.base.prototype.__defineSetter__('id', function(id) {";
        let c = classify(line, &["*/"]).unwrap();
        assert_eq!(c.identifier, "id_set");
        assert_eq!(c.kind, SymbolKind::Setter);
        assert_eq!(c.privacy, Privacy::Public);
    }

    #[test]
    fn test_accessor_without_quoted_name_falls_back_to_function() {
        let line = "X.base.prototype.__defineGetter__(key, function() {";
        let c = classify(line, &["*/"]).unwrap();
        assert_eq!(c.kind, SymbolKind::Function);
    }

    #[test]
    fn test_this_property() {
        let c = classify("this.counter = 10;", &["*/"]).unwrap();
        assert_eq!(c.identifier, "counter");
        assert_eq!(c.kind, SymbolKind::Property);
        assert_eq!(c.privacy, Privacy::Private);
    }

    #[test]
    fn test_string_keyed_property_is_public() {
        let c = classify("this['visible'] = true;", &["*/"]).unwrap();
        assert_eq!(c.kind, SymbolKind::Property);
        assert_eq!(c.privacy, Privacy::Public);
    }

    #[test]
    fn test_no_namespace_is_a_miss() {
        assert!(classify("var local = 1;", &["*/"]).is_none());
        assert!(classify("goog.provide('X.base');", &["*/"]).is_none());
    }

    #[test]
    fn test_single_segment_namespace_declaration() {
        let c = classify("X = function() {", &["* @constructor", "*/"]).unwrap();
        assert_eq!(c.identifier, "X");
        assert_eq!(c.kind, SymbolKind::Constructor);
    }
}
