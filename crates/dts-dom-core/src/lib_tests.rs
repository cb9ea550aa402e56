use indoc::indoc;

use crate::{
    ClassDeclaration, ContextFlags, Declaration, DeclarationFlags, EnumMemberDeclaration,
    EnumValue, IndexKind, InterfaceDeclaration, ObjectMember, Parameter, ParameterFlags,
    PropertyDeclaration, TripleSlashDirective, Type, TypeParameter,
};

#[test]
fn decode_interface_with_members() {
    let json = indoc! {r#"
        {
            "kind": "interface",
            "name": "Point",
            "flags": 16,
            "jsDocComment": "A point",
            "members": [
                { "kind": "property", "name": "x", "type": { "kind": "number" } },
                {
                    "kind": "index-signature",
                    "name": "key",
                    "indexType": "string",
                    "valueType": { "kind": "any" }
                }
            ]
        }
    "#};

    let decl: Declaration = serde_json::from_str(json).unwrap();
    let Declaration::Interface(iface) = decl else {
        panic!("expected interface");
    };
    assert_eq!(iface.name, "Point");
    assert_eq!(iface.base.flags, DeclarationFlags::EXPORT);
    assert_eq!(iface.base.doc.as_deref(), Some("A point"));
    assert_eq!(iface.members.len(), 2);
    let ObjectMember::IndexSignature(index) = &iface.members[1] else {
        panic!("expected index signature");
    };
    assert_eq!(index.index_type, IndexKind::String);
    assert_eq!(index.value_type, Type::Any);
}

#[test]
fn decode_missing_flags_as_empty() {
    let json = r#"{ "kind": "const", "name": "C", "type": { "kind": "number" } }"#;
    let decl: Declaration = serde_json::from_str(json).unwrap();
    assert!(decl.base().flags.is_empty());
    assert_eq!(decl.kind(), "const");
}

#[test]
fn decode_unknown_bits_are_dropped() {
    let json = r#"{ "kind": "var", "name": "v", "type": { "kind": "string" }, "flags": 4112 }"#;
    let decl: Declaration = serde_json::from_str(json).unwrap();
    assert_eq!(decl.base().flags, DeclarationFlags::EXPORT);
}

#[test]
fn decode_rejects_unknown_declaration_kind() {
    let json = r#"{ "kind": "struct", "name": "S" }"#;
    let result = serde_json::from_str::<Declaration>(json);
    assert!(result.is_err());
}

#[test]
fn decode_rejects_unknown_type_kind() {
    let json = r#"{ "kind": "alias", "name": "A", "type": { "kind": "tuple" } }"#;
    let result = serde_json::from_str::<Declaration>(json);
    assert!(result.is_err());
}

#[test]
fn decode_rejects_invalid_index_type() {
    let json = indoc! {r#"
        {
            "kind": "index-signature",
            "name": "key",
            "indexType": "boolean",
            "valueType": { "kind": "any" }
        }
    "#};
    assert!(serde_json::from_str::<ObjectMember>(json).is_err());
}

#[test]
fn decode_nested_types() {
    let json = indoc! {r#"
        {
            "kind": "alias",
            "name": "Handler",
            "typeParameters": [{ "name": "T", "defaultType": { "kind": "string" } }],
            "type": {
                "kind": "function-type",
                "parameters": [
                    { "name": "args", "type": { "kind": "array", "type": { "kind": "any" } }, "flags": 2 }
                ],
                "returnType": { "kind": "name", "name": "Promise", "typeArguments": [{ "kind": "void" }] }
            }
        }
    "#};

    let decl: Declaration = serde_json::from_str(json).unwrap();
    let Declaration::Alias(alias) = decl else {
        panic!("expected alias");
    };
    assert_eq!(
        alias.type_parameters,
        vec![TypeParameter::new("T").with_default(Type::String)]
    );
    assert_eq!(
        alias.ty,
        Type::function(
            vec![Parameter::new("args", Type::array(Type::Any)).with_flags(ParameterFlags::REST)],
            Type::generic("Promise", vec![Type::Void]),
        )
    );
}

#[test]
fn decode_enum_member_values() {
    let text: EnumMemberDeclaration =
        serde_json::from_str(r#"{ "name": "A", "value": "a" }"#).unwrap();
    let number: EnumMemberDeclaration =
        serde_json::from_str(r#"{ "name": "B", "value": 2 }"#).unwrap();
    let bare: EnumMemberDeclaration = serde_json::from_str(r#"{ "name": "C" }"#).unwrap();

    assert_eq!(text.value, Some(EnumValue::String("a".into())));
    assert_eq!(number.value, Some(EnumValue::Number(2.0)));
    assert_eq!(bare.value, None);
}

#[test]
fn decode_directives() {
    let json = indoc! {r#"
        [
            { "kind": "reference-path", "path": "./test" },
            { "kind": "no-default-lib" },
            { "kind": "amd-module" }
        ]
    "#};

    let directives: Vec<TripleSlashDirective> = serde_json::from_str(json).unwrap();
    assert_eq!(
        directives,
        vec![
            TripleSlashDirective::reference_path("./test"),
            TripleSlashDirective::no_default_lib(true),
            TripleSlashDirective::amd_module(None),
        ]
    );
}

#[test]
fn serialize_uses_kind_tags() {
    let decl = Declaration::from(
        InterfaceDeclaration::new("Foo").with_flags(DeclarationFlags::EXPORT),
    );
    let value = serde_json::to_value(&decl).unwrap();
    assert_eq!(value["kind"], "interface");
    assert_eq!(value["flags"], 16);
    assert!(value.get("jsDocComment").is_none());
}

#[test]
fn declaration_references_are_by_name() {
    let mut iface = InterfaceDeclaration::new("Node");
    let self_ref = Type::from(&iface);
    iface
        .members
        .push(PropertyDeclaration::new("next", self_ref).into());

    let ObjectMember::Property(prop) = &iface.members[0] else {
        panic!("expected property");
    };
    assert_eq!(
        prop.ty,
        Type::Interface {
            name: "Node".into()
        }
    );
    assert_eq!(
        Type::from(&ClassDeclaration::new("Base")),
        Type::Class {
            name: "Base".into()
        }
    );
}

#[test]
fn context_flags_combine() {
    let ctx = ContextFlags::MODULE | ContextFlags::IN_AMBIENT_NAMESPACE;
    assert!(ctx.contains(ContextFlags::MODULE));
    assert!(ctx.contains(ContextFlags::IN_AMBIENT_NAMESPACE));
    assert!(ContextFlags::default().is_empty());
}
