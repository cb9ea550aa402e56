//! Triple-slash directive rendering.

use dts_dom_core::TripleSlashDirective;

use super::Emitter;

impl Emitter {
    pub(super) fn write_triple_slash_directive(&mut self, directive: &TripleSlashDirective) {
        let line = match directive {
            TripleSlashDirective::ReferencePath { path } => {
                format!("/// <reference path=\"{path}\" />")
            }
            TripleSlashDirective::ReferenceTypes { types } => {
                format!("/// <reference types=\"{types}\" />")
            }
            TripleSlashDirective::NoDefaultLib { value } => {
                format!("/// <reference no-default-lib=\"{value}\" />")
            }
            TripleSlashDirective::AmdModule { name: Some(name) } => {
                format!("/// <amd-module name=\"{name}\" />")
            }
            TripleSlashDirective::AmdModule { name: None } => "/// <amd-module />".to_string(),
        };
        self.start(&line);
        self.newline();
    }
}
