//! Declaration file emission.
//!
//! Renders a declaration tree as `.d.ts` text:
//! - `render` - declarations and the `declare`/`export` prefix rules
//! - `members` - interface, object-type and class members
//! - `reference` - type expressions and signatures
//! - `directives` - triple-slash directives

mod config;
mod directives;
mod emitter;
mod members;
mod reference;
mod render;

#[cfg(test)]
mod reference_tests;

use dts_dom_core::Declaration;

pub use config::{Config, EmitOptions, LineEnding};
pub use emitter::Emitter;

/// Emit `root` with the default configuration.
pub fn emit(root: &Declaration, options: &EmitOptions) -> String {
    emit_with_config(root, options, Config::default())
}

/// Emit `root` with a custom configuration.
pub fn emit_with_config(root: &Declaration, options: &EmitOptions, config: Config) -> String {
    Emitter::new(config).emit(root, options)
}
