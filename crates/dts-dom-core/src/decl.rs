//! Declaration nodes.

use serde::{Deserialize, Serialize};

use crate::flags::{DeclarationFlags, serde_bits};
use crate::member::{ClassMember, ObjectMember};
use crate::types::{Parameter, Type, TypeParameter};

/// Metadata shared by every declaration and member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeclarationBase {
    /// Documentation comment, rendered before the declaration.
    #[serde(default, rename = "jsDocComment", skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Single-line comment, rendered as `// text`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, with = "serde_bits")]
    pub flags: DeclarationFlags,
}

/// Adds `with_flags`/`with_doc`/`with_comment` builders to nodes carrying a
/// [`DeclarationBase`] in a `base` field.
macro_rules! impl_base {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $ty {
                pub fn with_flags(mut self, flags: $crate::DeclarationFlags) -> Self {
                    self.base.flags = flags;
                    self
                }

                pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
                    self.base.doc = Some(doc.into());
                    self
                }

                pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
                    self.base.comment = Some(comment.into());
                    self
                }
            }
        )*
    };
}

pub(crate) use impl_base;

/// A declaration that may appear at the root of a file or inside a
/// namespace or module body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Declaration {
    Interface(InterfaceDeclaration),
    Class(ClassDeclaration),
    Namespace(NamespaceDeclaration),
    Module(ModuleDeclaration),
    Function(FunctionDeclaration),
    Const(ConstDeclaration),
    #[serde(rename = "var")]
    Variable(VariableDeclaration),
    Alias(TypeAliasDeclaration),
    Enum(EnumDeclaration),
    ImportAll(ImportAllDeclaration),
    ImportDefault(ImportDefaultDeclaration),
    ImportNamed(ImportNamedDeclaration),
    ImportEquals(ImportEqualsDeclaration),
    Import(ImportDeclaration),
    ExportEquals(ExportEqualsDeclaration),
    ExportDefault(ExportDefaultDeclaration),
    ExportName(ExportNameDeclaration),
}

impl Declaration {
    /// Discriminant as it appears in the serialized form.
    pub fn kind(&self) -> &'static str {
        match self {
            Declaration::Interface(_) => "interface",
            Declaration::Class(_) => "class",
            Declaration::Namespace(_) => "namespace",
            Declaration::Module(_) => "module",
            Declaration::Function(_) => "function",
            Declaration::Const(_) => "const",
            Declaration::Variable(_) => "var",
            Declaration::Alias(_) => "alias",
            Declaration::Enum(_) => "enum",
            Declaration::ImportAll(_) => "import-all",
            Declaration::ImportDefault(_) => "import-default",
            Declaration::ImportNamed(_) => "import-named",
            Declaration::ImportEquals(_) => "import-equals",
            Declaration::Import(_) => "import",
            Declaration::ExportEquals(_) => "export-equals",
            Declaration::ExportDefault(_) => "export-default",
            Declaration::ExportName(_) => "export-name",
        }
    }

    pub fn base(&self) -> &DeclarationBase {
        match self {
            Declaration::Interface(d) => &d.base,
            Declaration::Class(d) => &d.base,
            Declaration::Namespace(d) => &d.base,
            Declaration::Module(d) => &d.base,
            Declaration::Function(d) => &d.base,
            Declaration::Const(d) => &d.base,
            Declaration::Variable(d) => &d.base,
            Declaration::Alias(d) => &d.base,
            Declaration::Enum(d) => &d.base,
            Declaration::ImportAll(d) => &d.base,
            Declaration::ImportDefault(d) => &d.base,
            Declaration::ImportNamed(d) => &d.base,
            Declaration::ImportEquals(d) => &d.base,
            Declaration::Import(d) => &d.base,
            Declaration::ExportEquals(d) => &d.base,
            Declaration::ExportDefault(d) => &d.base,
            Declaration::ExportName(d) => &d.base,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceDeclaration {
    #[serde(flatten)]
    pub base: DeclarationBase,
    pub name: String,
    #[serde(default)]
    pub members: Vec<ObjectMember>,
    #[serde(default)]
    pub base_types: Vec<Type>,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
}

impl InterfaceDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: DeclarationBase::default(),
            name: name.into(),
            members: Vec::new(),
            base_types: Vec::new(),
            type_parameters: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDeclaration {
    #[serde(flatten)]
    pub base: DeclarationBase,
    pub name: String,
    #[serde(default)]
    pub members: Vec<ClassMember>,
    #[serde(default)]
    pub implements: Vec<Type>,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    #[serde(default)]
    pub base_type: Option<Type>,
}

impl ClassDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: DeclarationBase::default(),
            name: name.into(),
            members: Vec::new(),
            implements: Vec::new(),
            type_parameters: Vec::new(),
            base_type: None,
        }
    }
}

/// `namespace Name { … }`: members are implicitly ambient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamespaceDeclaration {
    #[serde(flatten)]
    pub base: DeclarationBase,
    pub name: String,
    #[serde(default)]
    pub members: Vec<Declaration>,
}

impl NamespaceDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: DeclarationBase::default(),
            name: name.into(),
            members: Vec::new(),
        }
    }
}

/// `module 'name' { … }`: members use plain top-level syntax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleDeclaration {
    #[serde(flatten)]
    pub base: DeclarationBase,
    pub name: String,
    #[serde(default)]
    pub members: Vec<Declaration>,
}

impl ModuleDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: DeclarationBase::default(),
            name: name.into(),
            members: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDeclaration {
    #[serde(flatten)]
    pub base: DeclarationBase,
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    pub return_type: Type,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
}

impl FunctionDeclaration {
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstDeclaration {
    #[serde(flatten)]
    pub base: DeclarationBase,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
}

impl ConstDeclaration {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            base: DeclarationBase::default(),
            name: name.into(),
            ty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    #[serde(flatten)]
    pub base: DeclarationBase,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
}

impl VariableDeclaration {
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
pub struct TypeAliasDeclaration {
    #[serde(flatten)]
    pub base: DeclarationBase,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
}

impl TypeAliasDeclaration {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            base: DeclarationBase::default(),
            name: name.into(),
            ty,
            type_parameters: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDeclaration {
    #[serde(flatten)]
    pub base: DeclarationBase,
    pub name: String,
    #[serde(default)]
    pub members: Vec<EnumMemberDeclaration>,
    /// Emit as `const enum`.
    #[serde(default)]
    pub constant: bool,
}

impl EnumDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: DeclarationBase::default(),
            name: name.into(),
            members: Vec::new(),
            constant: false,
        }
    }

    pub fn constant(mut self, value: bool) -> Self {
        self.constant = value;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumMemberDeclaration {
    #[serde(flatten)]
    pub base: DeclarationBase,
    pub name: String,
    #[serde(default)]
    pub value: Option<EnumValue>,
}

impl EnumMemberDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: DeclarationBase::default(),
            name: name.into(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<EnumValue>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Initializer of an enum member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    String(String),
    Number(f64),
}

impl From<&str> for EnumValue {
    fn from(value: &str) -> Self {
        EnumValue::String(value.to_string())
    }
}

impl From<String> for EnumValue {
    fn from(value: String) -> Self {
        EnumValue::String(value)
    }
}

impl From<f64> for EnumValue {
    fn from(value: f64) -> Self {
        EnumValue::Number(value)
    }
}

/// `import * as name from 'from';`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportAllDeclaration {
    #[serde(flatten)]
    pub base: DeclarationBase,
    pub name: String,
    pub from: String,
}

/// `import name from 'from';`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportDefaultDeclaration {
    #[serde(flatten)]
    pub base: DeclarationBase,
    pub name: String,
    pub from: String,
}

/// `import {name as alias} from 'from';`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportNamedDeclaration {
    #[serde(flatten)]
    pub base: DeclarationBase,
    pub name: String,
    #[serde(default, rename = "as")]
    pub alias: Option<String>,
    pub from: String,
}

/// `import name = require('from');`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportEqualsDeclaration {
    #[serde(flatten)]
    pub base: DeclarationBase,
    pub name: String,
    pub from: String,
}

/// `import 'from';`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportDeclaration {
    #[serde(flatten)]
    pub base: DeclarationBase,
    pub from: String,
}

/// `export = target;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportEqualsDeclaration {
    #[serde(flatten)]
    pub base: DeclarationBase,
    pub target: String,
}

/// `export default name;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDefaultDeclaration {
    #[serde(flatten)]
    pub base: DeclarationBase,
    pub name: String,
}

/// `export { name as alias };`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportNameDeclaration {
    #[serde(flatten)]
    pub base: DeclarationBase,
    pub name: String,
    #[serde(default, rename = "as")]
    pub alias: Option<String>,
}

impl ImportAllDeclaration {
    pub fn new(name: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            base: DeclarationBase::default(),
            name: name.into(),
            from: from.into(),
        }
    }
}

impl ImportDefaultDeclaration {
    pub fn new(name: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            base: DeclarationBase::default(),
            name: name.into(),
            from: from.into(),
        }
    }
}

impl ImportNamedDeclaration {
    pub fn new(name: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            base: DeclarationBase::default(),
            name: name.into(),
            alias: None,
            from: from.into(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl ImportEqualsDeclaration {
    pub fn new(name: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            base: DeclarationBase::default(),
            name: name.into(),
            from: from.into(),
        }
    }
}

impl ImportDeclaration {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            base: DeclarationBase::default(),
            from: from.into(),
        }
    }
}

impl ExportEqualsDeclaration {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            base: DeclarationBase::default(),
            target: target.into(),
        }
    }
}

impl ExportDefaultDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: DeclarationBase::default(),
            name: name.into(),
        }
    }
}

impl ExportNameDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: DeclarationBase::default(),
            name: name.into(),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl_base!(
    InterfaceDeclaration,
    ClassDeclaration,
    NamespaceDeclaration,
    ModuleDeclaration,
    FunctionDeclaration,
    ConstDeclaration,
    VariableDeclaration,
    TypeAliasDeclaration,
    EnumDeclaration,
    EnumMemberDeclaration,
    ImportAllDeclaration,
    ImportDefaultDeclaration,
    ImportNamedDeclaration,
    ImportEqualsDeclaration,
    ImportDeclaration,
    ExportEqualsDeclaration,
    ExportDefaultDeclaration,
    ExportNameDeclaration,
);

macro_rules! impl_into_declaration {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Declaration {
                fn from(value: $ty) -> Self {
                    Declaration::$variant(value)
                }
            }
        )*
    };
}

impl_into_declaration!(
    Interface(InterfaceDeclaration),
    Class(ClassDeclaration),
    Namespace(NamespaceDeclaration),
    Module(ModuleDeclaration),
    Function(FunctionDeclaration),
    Const(ConstDeclaration),
    Variable(VariableDeclaration),
    Alias(TypeAliasDeclaration),
    Enum(EnumDeclaration),
    ImportAll(ImportAllDeclaration),
    ImportDefault(ImportDefaultDeclaration),
    ImportNamed(ImportNamedDeclaration),
    ImportEquals(ImportEqualsDeclaration),
    Import(ImportDeclaration),
    ExportEquals(ExportEqualsDeclaration),
    ExportDefault(ExportDefaultDeclaration),
    ExportName(ExportNameDeclaration),
);

impl From<&InterfaceDeclaration> for Type {
    fn from(decl: &InterfaceDeclaration) -> Self {
        Type::Interface {
            name: decl.name.clone(),
        }
    }
}

impl From<&ClassDeclaration> for Type {
    fn from(decl: &ClassDeclaration) -> Self {
        Type::Class {
            name: decl.name.clone(),
        }
    }
}

impl From<&TypeAliasDeclaration> for Type {
    fn from(decl: &TypeAliasDeclaration) -> Self {
        Type::Alias {
            name: decl.name.clone(),
        }
    }
}
