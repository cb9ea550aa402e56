//! Configuration types for declaration emission.

use dts_dom_core::{ContextFlags, TripleSlashDirective};

/// Line terminator written after every emitted line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineEnding {
    /// `\r\n`
    #[default]
    Crlf,
    /// `\n`
    Lf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Crlf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

/// Engine-wide rendering configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Wrap doc comments in `/** … */`, prefixing each line with ` * `
    pub(crate) wrap_doc_comments: bool,
    /// Terminator for every emitted line
    pub(crate) line_ending: LineEnding,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wrap_doc_comments: true,
            line_ending: LineEnding::default(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether doc comments are wrapped or written verbatim.
    pub fn wrap_doc_comments(mut self, value: bool) -> Self {
        self.wrap_doc_comments = value;
        self
    }

    /// Set the line terminator.
    pub fn line_ending(mut self, value: LineEnding) -> Self {
        self.line_ending = value;
        self
    }
}

/// Per-call emission options.
#[derive(Clone, Debug, Default)]
pub struct EmitOptions {
    /// Context the root declaration is emitted in
    pub root_flags: ContextFlags,
    /// Directives written before the root declaration, in order
    pub triple_slash_directives: Vec<TripleSlashDirective>,
}

impl EmitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root context.
    pub fn root_flags(mut self, flags: ContextFlags) -> Self {
        self.root_flags = flags;
        self
    }

    /// Append a triple-slash directive.
    pub fn directive(mut self, directive: TripleSlashDirective) -> Self {
        self.triple_slash_directives.push(directive);
        self
    }
}
