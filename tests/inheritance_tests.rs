//! Inheritance Tests - Resolver
//!
//! Cross-file merge scenarios: constructor exclusion, override suppression,
//! inherit-doc replacement, mixin ordering, chains, and the cycle guard.

use protodoc::{ResolveError, ScanOptions, SymbolKind, extract};

/// Helper to run the whole pipeline over named snippets
fn extract_from(files: &[(&str, &str)]) -> Result<protodoc::DocIndex, ResolveError> {
    let owned: Vec<(String, String)> = files
        .iter()
        .map(|(file, text)| (file.to_string(), text.to_string()))
        .collect();
    extract(&owned, &ScanOptions::default())
}

const A_JS: &str = r#"
/**
 * The A object.
 *
 * @constructor
 */
X.A = function() {

};

/**
 * Foo from A.
 */
X.A.prototype.foo = function() {

};
goog.exportSymbol('X.A.foo', X.A.prototype.foo);
"#;

#[test]
fn test_subclass_inherits_methods_but_never_the_constructor() {
    let index = extract_from(&[
        ("a.js", A_JS),
        (
            "b.js",
            r#"
/**
 * @constructor
 * @extends X.A
 */
X.B = function() {

};

/**
 * Bar from B.
 */
X.B.prototype.bar = function() {

};
"#,
        ),
    ])
    .unwrap();

    let b = index.class_entry("B").unwrap();
    // own constructor + own bar + inherited foo; A's constructor excluded
    assert_eq!(b.len(), 3);
    assert!(b.get("A").is_none());
    assert_eq!(b.get("B").unwrap().kind, SymbolKind::Constructor);
    assert_eq!(b.get("bar").unwrap().kind, SymbolKind::Function);

    let foo = b.get("foo").unwrap();
    assert!(foo.doc.contains("Foo from A."));
    // the export status travels with the inherited symbol
    assert!(foo.is_public());
}

#[test]
fn test_local_override_without_inherit_doc_wins() {
    let index = extract_from(&[
        ("a.js", A_JS),
        (
            "c.js",
            r#"
/**
 * @constructor
 * @extends X.A
 */
X.C = function() {

};

/**
 * Foo from C.
 */
X.C.prototype.foo = function() {

};
"#,
        ),
    ])
    .unwrap();

    let foo = index.class_entry("C").unwrap().get("foo").unwrap();
    assert!(foo.doc.contains("Foo from C."));
    assert!(!foo.doc.contains("Foo from A."));
}

#[test]
fn test_inherit_doc_marker_pulls_the_ancestor_symbol() {
    let index = extract_from(&[
        ("a.js", A_JS),
        (
            "d.js",
            r#"
/**
 * @constructor
 * @extends X.A
 */
X.D = function() {

};

/**
 * @inheritDoc
 */
X.D.prototype.foo = function() {

};
"#,
        ),
    ])
    .unwrap();

    let foo = index.class_entry("D").unwrap().get("foo").unwrap();
    assert!(foo.doc.contains("Foo from A."));
    // A exported foo, and the replacement keeps that status transitively
    assert!(foo.is_public());
}

#[test]
fn test_later_mixin_wins_for_the_same_identifier() {
    // encodes the observed declaration-order merge, not a guaranteed contract
    let index = extract_from(&[
        (
            "m1.js",
            "/**\n * @constructor\n */\nX.M1 = function() {\n};\n/**\n * Qux from M1.\n */\nX.M1.prototype.qux = function() {\n};\n",
        ),
        (
            "m2.js",
            "/**\n * @constructor\n */\nX.M2 = function() {\n};\n/**\n * Qux from M2.\n */\nX.M2.prototype.qux = function() {\n};\n",
        ),
        (
            "c.js",
            "/**\n * @constructor\n * @mixin X.M1\n * @mixin X.M2\n */\nX.C = function() {\n};\n",
        ),
    ])
    .unwrap();

    let qux = index.class_entry("C").unwrap().get("qux").unwrap();
    assert!(qux.doc.contains("Qux from M2."));
}

#[test]
fn test_multi_level_chain_expands_bottom_up() {
    let index = extract_from(&[
        ("a.js", A_JS),
        (
            "b.js",
            "/**\n * @constructor\n * @extends X.A\n */\nX.B = function() {\n};\n",
        ),
        (
            "c.js",
            "/**\n * @constructor\n * @extends X.B\n */\nX.C = function() {\n};\n",
        ),
    ])
    .unwrap();

    // foo declared only on A reaches C through B
    assert!(index.class_entry("C").unwrap().contains("foo"));
    assert!(index.class_entry("B").unwrap().contains("foo"));

    let chain: Vec<String> = index
        .inheritance_chain("C")
        .iter()
        .map(|c| c.to_string())
        .collect();
    assert_eq!(chain, vec!["B", "A"]);
}

#[test]
fn test_unresolvable_parent_is_skipped_silently() {
    let index = extract_from(&[(
        "b.js",
        "/**\n * @constructor\n * @extends X.vanished\n */\nX.B = function() {\n};\n",
    )])
    .unwrap();
    assert_eq!(index.class_entry("B").unwrap().len(), 1);
}

#[test]
fn test_cyclic_extends_surfaces_an_error() {
    let err = extract_from(&[
        (
            "p1.js",
            "/**\n * @constructor\n * @extends X.P2\n */\nX.P1 = function() {\n};\n",
        ),
        (
            "p2.js",
            "/**\n * @constructor\n * @extends X.P1\n */\nX.P2 = function() {\n};\n",
        ),
    ])
    .unwrap_err();
    assert!(matches!(err, ResolveError::CyclicInheritance { .. }));
}

#[test]
fn test_total_symbols_counts_every_file() {
    let index = extract_from(&[
        ("a.js", A_JS),
        (
            "b.js",
            "/**\n * @constructor\n * @extends X.A\n */\nX.B = function() {\n};\n",
        ),
    ])
    .unwrap();
    // 2 from a.js, 1 from b.js; inherited copies do not count
    assert_eq!(index.total_symbols(), 3);
}
