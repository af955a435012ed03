//! Comment-block accumulation and the tokenizer states.
//!
//! A [`CommentBlock`] is created when the open marker is seen, absorbs every
//! following line (scanning each for tags by literal substring search), and is
//! closed when the close marker is seen. Tag detection never closes the block.

use std::sync::Arc;

use crate::base::{ScanOptions, markers};

/// Tokenizer state. One block is in flight at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Outside any comment block.
    #[default]
    Idle,
    /// Between the open and close markers; lines are absorbed into the block.
    InComment,
    /// Block closed; the next line is the declaration to classify.
    AwaitingIdentifier,
}

/// An in-flight documentation comment block.
#[derive(Debug, Clone, Default)]
pub struct CommentBlock {
    /// Accumulated comment text, pseudo-tags stripped, ending with the close
    /// marker once the block is closed.
    pub text: String,
    /// `@extends`/`@mixin` targets in declaration order, namespace-stripped.
    pub supertypes: Vec<Arc<str>>,
    /// `@param` names, `$`-prefixed.
    pub params: Vec<Arc<str>>,
    /// Whether an `@return` tag was seen.
    pub has_return: bool,
}

impl CommentBlock {
    /// Start a new block. The buffer is seeded with the open marker only;
    /// anything after it on the opening line is dropped.
    pub fn open() -> Self {
        Self {
            text: markers::DOC_START.to_string(),
            ..Self::default()
        }
    }

    /// Append a line to the block and scan it for tags.
    ///
    /// The close-marker line is absorbed too, so closed blocks end with `*/`.
    pub fn absorb(&mut self, line: &str, options: &ScanOptions) {
        self.text.push('\n');
        self.text.push_str(
            &line
                .replace(markers::PRE_OPEN, "")
                .replace(markers::PRE_CLOSE, ""),
        );

        // `@param {type} name description` - the name is the second token
        if let Some(at) = line.find(markers::TAG_PARAM) {
            let rest = line[at + markers::TAG_PARAM.len()..].trim();
            if let Some(name) = rest.split_whitespace().nth(1) {
                self.params.push(format!("${name}").into());
            }
        }

        if line.contains(markers::TAG_RETURN) {
            self.has_return = true;
        }

        if let Some(at) = line.find(markers::TAG_EXTENDS) {
            self.push_supertype(&line[at + markers::TAG_EXTENDS.len()..], options);
        }
        if let Some(at) = line.find(markers::TAG_MIXIN) {
            self.push_supertype(&line[at + markers::TAG_MIXIN.len()..], options);
        }
    }

    fn push_supertype(&mut self, rest: &str, options: &ScanOptions) {
        let supertype = options.strip_namespace(rest.trim());
        tracing::trace!(supertype = %supertype, "inheritance tag");
        self.supertypes.push(supertype.into());
    }

    /// Whether the block documents a constructor.
    pub fn is_constructor(&self) -> bool {
        self.text.contains(markers::TAG_CONSTRUCTOR)
    }
}
