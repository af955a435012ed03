//! The fixed markers and tags the scanner recognizes.
//!
//! All detection is literal prefix/substring matching on trimmed lines; there
//! is deliberately no grammar behind these.

/// Opens a documentation comment block.
pub const DOC_START: &str = "/**";
/// Closes a documentation comment block.
pub const DOC_END: &str = "*/";

/// Marks the following declaration as a class constructor.
pub const TAG_CONSTRUCTOR: &str = "@constructor";
/// Names a superclass of the class under construction.
pub const TAG_EXTENDS: &str = "@extends";
/// Names a mixin merged into the class in addition to its superclass.
pub const TAG_MIXIN: &str = "@mixin";
/// Declares a parameter; the second token after the tag is the name.
pub const TAG_PARAM: &str = "@param";
/// Declares that the documented function returns a value.
pub const TAG_RETURN: &str = "@return";
/// In an override, requests the ancestor's documentation instead of the local one.
pub const TAG_INHERIT_DOC: &str = "@inheritDoc";

/// Call prefix of an export declaration line.
pub const EXPORT_CALL: &str = "goog.exportSymbol(";

/// Prefix of a property declaration inside a constructor body.
pub const THIS_PREFIX: &str = "this";
/// The dot segment separating instance methods from constructors/statics.
pub const PROTOTYPE_SEGMENT: &str = "prototype";

/// Getter definition call; the real name is its first quoted argument.
pub const DEFINE_GETTER: &str = "__defineGetter__";
/// Setter definition call; the real name is its first quoted argument.
pub const DEFINE_SETTER: &str = "__defineSetter__";

/// Suffixes keeping getter/setter pairs distinguishable in a class table.
pub const GETTER_SUFFIX: &str = "_get";
pub const SETTER_SUFFIX: &str = "_set";

/// Inline pseudo-tags stripped from comment text before accumulation.
pub const PRE_OPEN: &str = "<pre>";
pub const PRE_CLOSE: &str = "</pre>";

/// Namespace prefix used when no explicit one is configured.
pub const DEFAULT_NAMESPACE: &str = "X";
