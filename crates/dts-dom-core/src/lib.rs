#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Data model for TypeScript ambient declaration files.
//!
//! Plain data only: every node is built by the caller, optionally mutated
//! (members pushed, optional fields set) and then handed to an emitter. The
//! model never points back at whatever renders it.
//!
//! - `decl` - top-level declarations (interfaces, classes, namespaces, …)
//! - `member` - interface, object-type and class members
//! - `types` - type expressions, parameters and type parameters
//! - `directive` - triple-slash directives
//! - `flags` - declaration, parameter and context flag sets
//! - `naming` - identifier checks and member-name quoting
//!
//! All nodes (de)serialize with a `kind` discriminant, so a tree can also be
//! supplied as JSON.

pub mod decl;
pub mod directive;
pub mod flags;
pub mod member;
pub mod naming;
pub mod types;

#[cfg(test)]
mod lib_tests;
#[cfg(test)]
mod naming_tests;

pub use decl::{
    ClassDeclaration, ConstDeclaration, Declaration, DeclarationBase, EnumDeclaration,
    EnumMemberDeclaration, EnumValue, ExportDefaultDeclaration, ExportEqualsDeclaration,
    ExportNameDeclaration, FunctionDeclaration, ImportAllDeclaration, ImportDeclaration,
    ImportDefaultDeclaration, ImportEqualsDeclaration, ImportNamedDeclaration,
    InterfaceDeclaration, ModuleDeclaration, NamespaceDeclaration, TypeAliasDeclaration,
    VariableDeclaration,
};
pub use directive::TripleSlashDirective;
pub use flags::{ContextFlags, DeclarationFlags, ParameterFlags};
pub use member::{
    CallSignature, ClassMember, ConstructorDeclaration, IndexKind, IndexSignature,
    MethodDeclaration, ObjectMember, PropertyDeclaration,
};
pub use types::{Parameter, Type, TypeParameter};
