//! Triple-slash directives rendered at the top of a declaration file.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TripleSlashDirective {
    /// `/// <reference path="…" />`
    ReferencePath { path: String },
    /// `/// <reference types="…" />`
    ReferenceTypes { types: String },
    /// `/// <reference no-default-lib="true" />`
    NoDefaultLib {
        #[serde(default = "enabled")]
        value: bool,
    },
    /// `/// <amd-module name="…" />`
    AmdModule {
        #[serde(default)]
        name: Option<String>,
    },
}

fn enabled() -> bool {
    true
}

impl TripleSlashDirective {
    pub fn reference_path(path: impl Into<String>) -> Self {
        Self::ReferencePath { path: path.into() }
    }

    pub fn reference_types(types: impl Into<String>) -> Self {
        Self::ReferenceTypes {
            types: types.into(),
        }
    }

    pub fn no_default_lib(value: bool) -> Self {
        Self::NoDefaultLib { value }
    }

    pub fn amd_module(name: Option<String>) -> Self {
        Self::AmdModule { name }
    }
}
