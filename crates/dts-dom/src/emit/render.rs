//! Declaration rendering.

use dts_dom_core::naming::{is_identifier, quote_if_needed, quote_string};
use dts_dom_core::{
    ClassDeclaration, ContextFlags, Declaration, DeclarationBase, DeclarationFlags,
    EnumDeclaration, EnumMemberDeclaration, EnumValue, FunctionDeclaration,
    InterfaceDeclaration, ModuleDeclaration, NamespaceDeclaration, Type, TypeAliasDeclaration,
};

use super::Emitter;
use super::reference::format_number;

/// Keyword prefix for a declaration emitted in `ctx`.
///
/// Exactly one branch applies: namespace bodies are already ambient, export
/// flags come next, module bodies take no prefix, anything else is `declare`.
pub(crate) fn declaration_prefix(flags: DeclarationFlags, ctx: ContextFlags) -> &'static str {
    if ctx.contains(ContextFlags::IN_AMBIENT_NAMESPACE) {
        ""
    } else if flags.contains(DeclarationFlags::EXPORT) {
        "export "
    } else if flags.contains(DeclarationFlags::EXPORT_DEFAULT) {
        "export default "
    } else if ctx.contains(ContextFlags::MODULE) {
        ""
    } else {
        "declare "
    }
}

impl Emitter {
    pub(super) fn write_declaration(&mut self, decl: &Declaration, ctx: ContextFlags) {
        match decl {
            Declaration::Interface(d) => self.write_interface(d, ctx),
            Declaration::Class(d) => self.write_class(d, ctx),
            Declaration::Namespace(d) => self.write_namespace(d, ctx),
            Declaration::Module(d) => self.write_module(d, ctx),
            Declaration::Function(d) => self.write_function(d, ctx),
            Declaration::Const(d) => self.write_binding("const", &d.base, &d.name, &d.ty, ctx),
            Declaration::Variable(d) => self.write_binding("var", &d.base, &d.name, &d.ty, ctx),
            Declaration::Alias(d) => self.write_alias(d, ctx),
            Declaration::Enum(d) => self.write_enum(d, ctx),
            Declaration::ImportAll(d) => self.write_statement(
                &d.base,
                &format!("import * as {} from '{}';", d.name, d.from),
            ),
            Declaration::ImportDefault(d) => {
                self.write_statement(&d.base, &format!("import {} from '{}';", d.name, d.from))
            }
            Declaration::ImportNamed(d) => {
                let binding = match &d.alias {
                    Some(alias) => format!("{} as {}", d.name, alias),
                    None => d.name.clone(),
                };
                self.write_statement(&d.base, &format!("import {{{binding}}} from '{}';", d.from))
            }
            Declaration::ImportEquals(d) => self.write_statement(
                &d.base,
                &format!("import {} = require('{}');", d.name, d.from),
            ),
            Declaration::Import(d) => self.write_statement(&d.base, &format!("import '{}';", d.from)),
            Declaration::ExportEquals(d) => {
                self.write_statement(&d.base, &format!("export = {};", d.target))
            }
            Declaration::ExportDefault(d) => {
                self.write_statement(&d.base, &format!("export default {};", d.name))
            }
            Declaration::ExportName(d) => {
                let binding = match &d.alias {
                    Some(alias) => format!("{} as {}", d.name, alias),
                    None => d.name.clone(),
                };
                self.write_statement(&d.base, &format!("export {{ {binding} }};"))
            }
        }
    }

    /// Line comment, then doc comment, each at the current indent.
    pub(super) fn write_comments(&mut self, base: &DeclarationBase) {
        if let Some(comment) = base.comment.as_deref().filter(|c| !c.is_empty()) {
            self.start(&format!("// {comment}"));
            self.newline();
        }

        let Some(doc) = base.doc.as_deref().filter(|d| !d.is_empty()) else {
            return;
        };
        if self.config.wrap_doc_comments {
            self.start("/**");
            self.newline();
            for line in doc.lines() {
                self.start(&format!(" * {line}"));
                self.newline();
            }
            self.start(" */");
        } else {
            self.start(doc);
        }
        self.newline();
    }

    fn start_declaration(&mut self, s: &str, flags: DeclarationFlags, ctx: ContextFlags) {
        self.tab();
        self.print(declaration_prefix(flags, ctx));
        self.print(s);
    }

    /// Comment out a declaration whose name is not a legal identifier, so the
    /// file still parses.
    fn guard_name(&mut self, what: &str, name: &str, write: impl FnOnce(&mut Self)) {
        let legal = is_identifier(name);
        if !legal {
            tracing::warn!(what, name, "illegal declaration name, emitting it commented out");
            self.start(&format!("/* Illegal {what} name '{name}' can't be used here"));
            self.newline();
        }

        write(self);

        if !legal {
            self.start("*/");
            self.newline();
        }
    }

    fn write_statement(&mut self, base: &DeclarationBase, text: &str) {
        self.write_comments(base);
        self.start(text);
        self.newline();
    }

    fn write_interface(&mut self, d: &InterfaceDeclaration, ctx: ContextFlags) {
        tracing::trace!(name = %d.name, "interface");
        self.write_comments(&d.base);
        self.guard_name("interface", &d.name, |this| {
            this.start_declaration(&format!("interface {}", d.name), d.base.flags, ctx);
            this.write_type_parameters(&d.type_parameters);
            if !d.base_types.is_empty() {
                this.print(" extends ");
                this.write_delimited(&d.base_types, ", ", Self::write_reference);
            }
            this.print(" ");
            this.write_object_members(&d.members);
            this.newline();
        });
    }

    fn write_class(&mut self, d: &ClassDeclaration, ctx: ContextFlags) {
        tracing::trace!(name = %d.name, members = d.members.len(), "class");
        self.write_comments(&d.base);
        self.guard_name("class", &d.name, |this| {
            let keyword = if d.base.flags.contains(DeclarationFlags::ABSTRACT) {
                "abstract class"
            } else {
                "class"
            };
            this.start_declaration(&format!("{keyword} {}", d.name), d.base.flags, ctx);
            this.write_type_parameters(&d.type_parameters);
            if let Some(base_type) = &d.base_type {
                this.print(" extends ");
                this.write_reference(base_type);
            }
            if !d.implements.is_empty() {
                this.print(" implements ");
                this.write_delimited(&d.implements, ", ", Self::write_reference);
            }
            this.print(" {");
            this.newline();
            this.indented(|this| {
                for member in &d.members {
                    this.write_class_member(member);
                }
            });
            this.start("}");
            this.newline();
            this.newline();
        });
    }

    fn write_function(&mut self, d: &FunctionDeclaration, ctx: ContextFlags) {
        self.write_comments(&d.base);
        self.guard_name("function", &d.name, |this| {
            this.start_declaration(&format!("function {}", d.name), d.base.flags, ctx);
            this.write_signature(&d.type_parameters, &d.parameters, &d.return_type);
            this.print(";");
            this.newline();
        });
    }

    fn write_namespace(&mut self, d: &NamespaceDeclaration, ctx: ContextFlags) {
        tracing::trace!(name = %d.name, members = d.members.len(), "namespace");
        self.write_comments(&d.base);
        self.start_declaration(&format!("namespace {} {{", d.name), d.base.flags, ctx);
        self.newline();
        let inner = ctx | ContextFlags::IN_AMBIENT_NAMESPACE;
        self.indented(|this| {
            for member in &d.members {
                this.write_declaration(member, inner);
            }
        });
        self.start("}");
        self.newline();
    }

    fn write_module(&mut self, d: &ModuleDeclaration, ctx: ContextFlags) {
        tracing::trace!(name = %d.name, members = d.members.len(), "module");
        self.write_comments(&d.base);
        self.start_declaration(&format!("module '{}' {{", d.name), d.base.flags, ctx);
        self.newline();
        let inner = ctx | ContextFlags::MODULE;
        self.indented(|this| {
            for member in &d.members {
                this.write_declaration(member, inner);
            }
        });
        self.start("}");
        self.newline();
    }

    fn write_binding(
        &mut self,
        keyword: &str,
        base: &DeclarationBase,
        name: &str,
        ty: &Type,
        ctx: ContextFlags,
    ) {
        self.write_comments(base);
        self.guard_name(keyword, name, |this| {
            this.start_declaration(&format!("{keyword} {name}: "), base.flags, ctx);
            this.write_reference(ty);
            this.print(";");
            this.newline();
        });
    }

    fn write_alias(&mut self, d: &TypeAliasDeclaration, ctx: ContextFlags) {
        self.write_comments(&d.base);
        self.guard_name("type", &d.name, |this| {
            this.start_declaration(&format!("type {}", d.name), d.base.flags, ctx);
            this.write_type_parameters(&d.type_parameters);
            this.print(" = ");
            this.write_reference(&d.ty);
            this.print(";");
            this.newline();
        });
    }

    fn write_enum(&mut self, d: &EnumDeclaration, ctx: ContextFlags) {
        self.write_comments(&d.base);
        self.guard_name("enum", &d.name, |this| {
            let keyword = if d.constant { "const enum" } else { "enum" };
            this.start_declaration(&format!("{keyword} {} {{", d.name), d.base.flags, ctx);
            this.newline();
            this.indented(|this| {
                for member in &d.members {
                    this.write_enum_member(member);
                }
            });
            this.start("}");
            this.newline();
        });
    }

    fn write_enum_member(&mut self, member: &EnumMemberDeclaration) {
        self.write_comments(&member.base);
        self.start(&quote_if_needed(&member.name));
        match &member.value {
            Some(EnumValue::String(value)) => self.print(&format!(" = {}", quote_string(value))),
            Some(EnumValue::Number(value)) => self.print(&format!(" = {}", format_number(*value))),
            None => {}
        }
        self.print(",");
        self.newline();
    }
}
