//! Bit flags carried by declarations, parameters and the emission context.

use bitflags::bitflags;

bitflags! {
    /// Modifiers attached to a declaration or class/object member.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DeclarationFlags: u32 {
        const PRIVATE = 1 << 0;
        const PROTECTED = 1 << 1;
        const STATIC = 1 << 2;
        const OPTIONAL = 1 << 3;
        const EXPORT = 1 << 4;
        const ABSTRACT = 1 << 5;
        const EXPORT_DEFAULT = 1 << 6;
        const READONLY = 1 << 7;
    }
}

bitflags! {
    /// Markers on a function or method parameter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ParameterFlags: u32 {
        const OPTIONAL = 1 << 0;
        const REST = 1 << 1;
    }
}

bitflags! {
    /// What the nearest enclosing container requires of its members.
    ///
    /// Nested containers OR their own flag into the context they inherit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ContextFlags: u32 {
        /// Directly inside a `module '…'` body: plain top-level syntax.
        const MODULE = 1 << 0;
        /// Inside a namespace body: members are implicitly ambient.
        const IN_AMBIENT_NAMESPACE = 1 << 1;
    }
}

/// Serde adapter storing flag sets as their raw bit value.
///
/// Unknown bits are dropped on decode.
pub(crate) mod serde_bits {
    use bitflags::Flags;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<F, S>(flags: &F, serializer: S) -> Result<S::Ok, S::Error>
    where
        F: Flags<Bits = u32>,
        S: Serializer,
    {
        serializer.serialize_u32(flags.bits())
    }

    pub fn deserialize<'de, F, D>(deserializer: D) -> Result<F, D::Error>
    where
        F: Flags<Bits = u32>,
        D: Deserializer<'de>,
    {
        u32::deserialize(deserializer).map(F::from_bits_truncate)
    }
}
