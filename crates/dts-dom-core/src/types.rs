//! Type expressions.

use serde::{Deserialize, Serialize};

use crate::flags::{ParameterFlags, serde_bits};
use crate::member::ObjectMember;

/// A type expression.
///
/// Declarations are referenced by name (`Interface`, `Class`, `Alias`,
/// `TypeParameter`), never by value, so a member may name the interface that
/// contains it without making the tree cyclic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum Type {
    String,
    Number,
    Boolean,
    Any,
    Void,
    Object,
    Null,
    Undefined,
    True,
    False,
    This,
    /// `"value"`
    StringLiteral { value: String },
    /// `42`; non-finite values are rendered through `typeof`.
    NumberLiteral { value: f64 },
    /// `T[]`
    Array {
        #[serde(rename = "type")]
        element: Box<Type>,
    },
    /// `A | B`
    Union { members: Vec<Type> },
    /// `A & B`
    Intersection { members: Vec<Type> },
    /// Anonymous object type `{ … }`.
    TypeLiteral { members: Vec<ObjectMember> },
    /// `(a: A)=>R`
    FunctionType {
        parameters: Vec<Parameter>,
        return_type: Box<Type>,
    },
    /// Reference by name, with optional type arguments: `Promise<string>`.
    Name {
        name: String,
        #[serde(default)]
        type_arguments: Vec<Type>,
    },
    /// `typeof name`
    Typeof { name: String },
    TypeParameter { name: String },
    Interface { name: String },
    Class { name: String },
    Alias { name: String },
}

impl Type {
    pub fn string_literal(value: impl Into<String>) -> Self {
        Self::StringLiteral {
            value: value.into(),
        }
    }

    pub fn number_literal(value: f64) -> Self {
        Self::NumberLiteral { value }
    }

    pub fn array(element: Type) -> Self {
        Self::Array {
            element: Box::new(element),
        }
    }

    pub fn union(members: Vec<Type>) -> Self {
        Self::Union { members }
    }

    pub fn intersection(members: Vec<Type>) -> Self {
        Self::Intersection { members }
    }

    /// Anonymous object type.
    pub fn object_type(members: Vec<ObjectMember>) -> Self {
        Self::TypeLiteral { members }
    }

    pub fn function(parameters: Vec<Parameter>, return_type: Type) -> Self {
        Self::FunctionType {
            parameters,
            return_type: Box::new(return_type),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Name {
            name: name.into(),
            type_arguments: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<String>, type_arguments: Vec<Type>) -> Self {
        Self::Name {
            name: name.into(),
            type_arguments,
        }
    }

    pub fn type_of(name: impl Into<String>) -> Self {
        Self::Typeof { name: name.into() }
    }
}

/// A function, method, constructor or function-type parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default, with = "serde_bits")]
    pub flags: ParameterFlags,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            flags: ParameterFlags::empty(),
        }
    }

    pub fn with_flags(mut self, flags: ParameterFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// A generic parameter: `T extends Base = Default`.
///
/// A constraint naming another type parameter does so through
/// [`Type::TypeParameter`], i.e. by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeParameter {
    pub name: String,
    #[serde(default)]
    pub base_type: Option<Box<Type>>,
    #[serde(default)]
    pub default_type: Option<Box<Type>>,
}

impl TypeParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_type: None,
            default_type: None,
        }
    }

    pub fn with_base(mut self, base_type: Type) -> Self {
        self.base_type = Some(Box::new(base_type));
        self
    }

    pub fn with_default(mut self, default_type: Type) -> Self {
        self.default_type = Some(Box::new(default_type));
        self
    }
}

impl From<&TypeParameter> for Type {
    fn from(param: &TypeParameter) -> Self {
        Type::TypeParameter {
            name: param.name.clone(),
        }
    }
}
