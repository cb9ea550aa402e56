//! Core emitter struct and output primitives.

use dts_dom_core::{ContextFlags, Declaration};

use super::{Config, EmitOptions};

const INDENT: &str = "    ";

/// Declaration file emitter.
///
/// Holds only the output buffer and the current indent level. The context a
/// declaration is emitted in is passed down the render calls, never stored.
pub struct Emitter {
    pub(super) config: Config,
    /// Nesting depth; one `INDENT` per level
    pub(super) indent: usize,
    /// Output buffer
    pub(super) output: String,
}

impl Emitter {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            indent: 0,
            output: String::new(),
        }
    }

    /// Emit the directives and the root declaration.
    pub fn emit(mut self, root: &Declaration, options: &EmitOptions) -> String {
        tracing::debug!(
            kind = root.kind(),
            directives = options.triple_slash_directives.len(),
            "emitting declaration file"
        );

        for directive in &options.triple_slash_directives {
            self.write_triple_slash_directive(directive);
        }

        self.write_declaration(root, root_context(root, options.root_flags));
        self.newline();
        self.output
    }

    pub(super) fn tab(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str(INDENT);
        }
    }

    pub(super) fn print(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Indent, then print.
    pub(super) fn start(&mut self, s: &str) {
        self.tab();
        self.print(s);
    }

    pub(super) fn newline(&mut self) {
        self.output.push_str(self.config.line_ending.as_str());
    }

    pub(super) fn write_delimited<T>(
        &mut self,
        items: &[T],
        separator: &str,
        mut write: impl FnMut(&mut Self, &T),
    ) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.print(separator);
            }
            write(self, item);
        }
    }

    /// Run `write` one indent level deeper.
    pub(super) fn indented(&mut self, write: impl FnOnce(&mut Self)) {
        self.indent += 1;
        write(self);
        self.indent -= 1;
    }
}

/// Context for the root declaration.
///
/// A module root emitted with exactly the `MODULE` flag starts from an empty
/// context, so its header keeps the `declare` prefix.
pub(crate) fn root_context(root: &Declaration, root_flags: ContextFlags) -> ContextFlags {
    if matches!(root, Declaration::Module(_)) && root_flags == ContextFlags::MODULE {
        ContextFlags::empty()
    } else {
        root_flags
    }
}
