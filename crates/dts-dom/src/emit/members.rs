//! Interface, object-type and class member rendering.

use dts_dom_core::naming::quote_if_needed;
use dts_dom_core::{ClassMember, DeclarationFlags, IndexSignature, ObjectMember};

use super::Emitter;

/// Modifier prefix for a class member, each keyword followed by a space.
pub(crate) fn member_modifiers(flags: DeclarationFlags) -> String {
    let mut out = String::new();
    if flags.contains(DeclarationFlags::PRIVATE) {
        out.push_str("private ");
    } else if flags.contains(DeclarationFlags::PROTECTED) {
        out.push_str("protected ");
    }
    if flags.contains(DeclarationFlags::STATIC) {
        out.push_str("static ");
    }
    if flags.contains(DeclarationFlags::ABSTRACT) {
        out.push_str("abstract ");
    }
    if flags.contains(DeclarationFlags::READONLY) {
        out.push_str("readonly ");
    }
    out
}

fn optional_marker(flags: DeclarationFlags) -> &'static str {
    if flags.contains(DeclarationFlags::OPTIONAL) {
        "?"
    } else {
        ""
    }
}

fn readonly_marker(flags: DeclarationFlags) -> &'static str {
    if flags.contains(DeclarationFlags::READONLY) {
        "readonly "
    } else {
        ""
    }
}

impl Emitter {
    /// `{`, one member per line one level deeper, then `}` at the current
    /// indent. The caller decides what follows the closing brace.
    pub(super) fn write_object_members(&mut self, members: &[ObjectMember]) {
        self.print("{");
        self.newline();
        self.indented(|this| {
            for member in members {
                this.write_object_member(member);
            }
        });
        self.start("}");
    }

    fn write_object_member(&mut self, member: &ObjectMember) {
        match member {
            ObjectMember::Property(p) => {
                self.write_comments(&p.base);
                self.start(readonly_marker(p.base.flags));
                self.print(&quote_if_needed(&p.name));
                self.print(optional_marker(p.base.flags));
                self.print(": ");
                self.write_reference(&p.ty);
            }
            ObjectMember::Method(m) => {
                self.write_comments(&m.base);
                self.start(&quote_if_needed(&m.name));
                self.print(optional_marker(m.base.flags));
                self.write_signature(&m.type_parameters, &m.parameters, &m.return_type);
            }
            ObjectMember::IndexSignature(s) => {
                self.write_comments(&s.base);
                self.start(readonly_marker(s.base.flags));
                self.write_index_signature(s);
            }
            ObjectMember::CallSignature(c) => {
                self.write_comments(&c.base);
                self.tab();
                self.write_signature(&c.type_parameters, &c.parameters, &c.return_type);
            }
        }
        self.print(";");
        self.newline();
    }

    pub(super) fn write_class_member(&mut self, member: &ClassMember) {
        match member {
            ClassMember::Property(p) => {
                self.write_comments(&p.base);
                self.start(&member_modifiers(p.base.flags));
                self.print(&quote_if_needed(&p.name));
                self.print(optional_marker(p.base.flags));
                self.print(": ");
                self.write_reference(&p.ty);
            }
            ClassMember::Method(m) => {
                self.write_comments(&m.base);
                self.start(&member_modifiers(m.base.flags));
                self.print(&quote_if_needed(&m.name));
                self.print(optional_marker(m.base.flags));
                self.write_signature(&m.type_parameters, &m.parameters, &m.return_type);
            }
            ClassMember::IndexSignature(s) => {
                self.write_comments(&s.base);
                self.start(&member_modifiers(s.base.flags));
                self.write_index_signature(s);
            }
            ClassMember::Constructor(c) => {
                self.write_comments(&c.base);
                self.start(&member_modifiers(c.base.flags));
                self.print("constructor");
                self.write_parameters(&c.parameters);
            }
        }
        self.print(";");
        self.newline();
    }

    fn write_index_signature(&mut self, s: &IndexSignature) {
        self.print(&format!(
            "[{}: {}]: ",
            quote_if_needed(&s.name),
            s.index_type.as_str()
        ));
        self.write_reference(&s.value_type);
    }
}
