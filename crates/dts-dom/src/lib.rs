//! TypeScript declaration file emitter.
//!
//! Build a tree of [`Declaration`]s (or decode one from JSON) and render it
//! as `.d.ts` text:
//!
//! ```
//! use dts_dom::{Declaration, EmitOptions, InterfaceDeclaration, emit};
//!
//! let root = Declaration::from(InterfaceDeclaration::new("Foo"));
//! assert_eq!(emit(&root, &EmitOptions::new()), "declare interface Foo {\r\n}\r\n\r\n");
//! ```
//!
//! The data model lives in `dts-dom-core` and is re-exported here.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod emit;


pub use dts_dom_core::*;
pub use emit::{Config, EmitOptions, Emitter, LineEnding, emit, emit_with_config};

/// Errors from decoding a declaration tree.
///
/// Rendering itself cannot fail; only input that does not describe a valid
/// tree is rejected.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unknown `kind` discriminant, missing field, or malformed JSON.
    #[error("invalid declaration tree: {0}")]
    InvalidTree(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Decode a declaration tree from JSON.
pub fn parse_declaration(json: &str) -> Result<Declaration> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a list of triple-slash directives from JSON.
pub fn parse_directives(json: &str) -> Result<Vec<TripleSlashDirective>> {
    Ok(serde_json::from_str(json)?)
}

/// Decode `json` and emit it with the default configuration.
pub fn emit_json(json: &str, options: &EmitOptions) -> Result<String> {
    let root = parse_declaration(json)?;
    tracing::debug!(kind = root.kind(), "decoded declaration tree");
    Ok(emit(&root, options))
}
