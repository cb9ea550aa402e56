//! Members of interfaces, anonymous object types and classes.

use serde::{Deserialize, Serialize};

use crate::decl::DeclarationBase;
use crate::types::{Parameter, Type, TypeParameter};

/// Member of an interface body or an anonymous object type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ObjectMember {
    Property(PropertyDeclaration),
    Method(MethodDeclaration),
    IndexSignature(IndexSignature),
    CallSignature(CallSignature),
}

/// Member of a class body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ClassMember {
    Property(PropertyDeclaration),
    Method(MethodDeclaration),
    IndexSignature(IndexSignature),
    Constructor(ConstructorDeclaration),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDeclaration {
    #[serde(flatten)]
    pub base: DeclarationBase,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
}

impl PropertyDeclaration {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            base: DeclarationBase::default(),
            name: name.into(),
            ty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDeclaration {
    #[serde(flatten)]
    pub base: DeclarationBase,
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    pub return_type: Type,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
}

impl MethodDeclaration {
    pub fn new(name: impl Into<String>, parameters: Vec<Parameter>, return_type: Type) -> Self {
        Self {
            base: DeclarationBase::default(),
            name: name.into(),
            parameters,
            return_type,
            type_parameters: Vec::new(),
        }
    }
}

/// Key type of an index signature. Only `string` and `number` are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    String,
    Number,
}

impl IndexKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IndexKind::String => "string",
            IndexKind::Number => "number",
        }
    }
}

/// `[name: string]: T`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSignature {
    #[serde(flatten)]
    pub base: DeclarationBase,
    pub name: String,
    pub index_type: IndexKind,
    pub value_type: Type,
}

impl IndexSignature {
    pub fn new(name: impl Into<String>, index_type: IndexKind, value_type: Type) -> Self {
        Self {
            base: DeclarationBase::default(),
            name: name.into(),
            index_type,
            value_type,
        }
    }
}

/// `<T>(a: A): R`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallSignature {
    #[serde(flatten)]
    pub base: DeclarationBase,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    pub return_type: Type,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
}

impl CallSignature {
    pub fn new(parameters: Vec<Parameter>, return_type: Type) -> Self {
        Self {
            base: DeclarationBase::default(),
            parameters,
            return_type,
            type_parameters: Vec::new(),
        }
    }
}

/// Class constructor. Has neither a name nor a return type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorDeclaration {
    #[serde(flatten)]
    pub base: DeclarationBase,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl ConstructorDeclaration {
    pub fn new(parameters: Vec<Parameter>) -> Self {
        Self {
            base: DeclarationBase::default(),
            parameters,
        }
    }
}

crate::decl::impl_base!(
    PropertyDeclaration,
    MethodDeclaration,
    IndexSignature,
    CallSignature,
    ConstructorDeclaration,
);

macro_rules! impl_into_member {
    ($member:ident { $($variant:ident($ty:ty)),* $(,)? }) => {
        $(
            impl From<$ty> for $member {
                fn from(value: $ty) -> Self {
                    $member::$variant(value)
                }
            }
        )*
    };
}

impl_into_member!(ObjectMember {
    Property(PropertyDeclaration),
    Method(MethodDeclaration),
    IndexSignature(IndexSignature),
    CallSignature(CallSignature),
});

impl_into_member!(ClassMember {
    Property(PropertyDeclaration),
    Method(MethodDeclaration),
    IndexSignature(IndexSignature),
    Constructor(ConstructorDeclaration),
});
