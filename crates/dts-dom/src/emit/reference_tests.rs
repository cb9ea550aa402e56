use dts_dom_core::{
    ClassDeclaration, InterfaceDeclaration, Parameter, ParameterFlags, PropertyDeclaration, Type,
    TypeAliasDeclaration, TypeParameter,
};

use super::reference::{array_element_needs_parens, format_number};
use super::{Config, Emitter, LineEnding};

fn render(ty: &Type) -> String {
    let mut emitter = Emitter::new(Config::new().line_ending(LineEnding::Lf));
    emitter.write_reference(ty);
    emitter.output
}

#[test]
fn keyword_types() {
    let cases = [
        (Type::String, "string"),
        (Type::Number, "number"),
        (Type::Boolean, "boolean"),
        (Type::Any, "any"),
        (Type::Void, "void"),
        (Type::Object, "object"),
        (Type::Null, "null"),
        (Type::Undefined, "undefined"),
        (Type::True, "true"),
        (Type::False, "false"),
        (Type::This, "this"),
    ];
    for (ty, expected) in cases {
        assert_eq!(render(&ty), expected);
    }
}

#[test]
fn declaration_references_print_bare_names() {
    let t = TypeParameter::new("T");
    assert_eq!(render(&Type::from(&t)), "T");
    assert_eq!(render(&Type::from(&InterfaceDeclaration::new("I"))), "I");
    assert_eq!(render(&Type::from(&ClassDeclaration::new("C"))), "C");
    assert_eq!(
        render(&Type::from(&TypeAliasDeclaration::new("A", Type::Any))),
        "A"
    );
    assert_eq!(render(&Type::named("Foo")), "Foo");
}

#[test]
fn array_parenthesization_law() {
    let wrapped = [
        (Type::array(Type::String), "(string[])[]"),
        (
            Type::from(&TypeAliasDeclaration::new("A", Type::Any)),
            "(A)[]",
        ),
        (Type::from(&InterfaceDeclaration::new("I")), "(I)[]"),
        (Type::from(&ClassDeclaration::new("C")), "(C)[]"),
        (
            Type::union(vec![Type::String, Type::Number]),
            "(string | number)[]",
        ),
    ];
    for (element, expected) in wrapped {
        assert!(array_element_needs_parens(&element));
        assert_eq!(render(&Type::array(element)), expected);
    }

    let bare = [
        (Type::String, "string[]"),
        (Type::named("Foo"), "Foo[]"),
        (Type::from(&TypeParameter::new("T")), "T[]"),
        (Type::string_literal("a"), "\"a\"[]"),
        (
            Type::intersection(vec![Type::named("A"), Type::named("B")]),
            "A & B[]",
        ),
        (Type::function(vec![], Type::Void), "()=>void[]"),
    ];
    for (element, expected) in bare {
        assert!(!array_element_needs_parens(&element));
        assert_eq!(render(&Type::array(element)), expected);
    }
}

#[test]
fn function_members_of_union_and_intersection_are_wrapped() {
    let callback = Type::function(
        vec![Parameter::new("x", Type::Number)],
        Type::Void,
    );

    assert_eq!(
        render(&Type::union(vec![Type::Null, callback.clone()])),
        "null | ((x: number)=>void)"
    );
    assert_eq!(
        render(&Type::intersection(vec![Type::named("A"), callback])),
        "A & ((x: number)=>void)"
    );
    assert_eq!(
        render(&Type::union(vec![Type::array(Type::String), Type::Undefined])),
        "string[] | undefined"
    );
}

#[test]
fn function_type_parameters() {
    let ty = Type::function(
        vec![
            Parameter::new("a", Type::String),
            Parameter::new("b", Type::Number).with_flags(ParameterFlags::OPTIONAL),
            Parameter::new("rest", Type::array(Type::Any)).with_flags(ParameterFlags::REST),
        ],
        Type::Boolean,
    );
    assert_eq!(render(&ty), "(a: string, b?: number, ...rest: any[])=>boolean");
}

#[test]
fn named_references_with_type_arguments() {
    let ty = Type::generic(
        "Map",
        vec![
            Type::String,
            Type::generic("Promise", vec![Type::array(Type::Number)]),
        ],
    );
    assert_eq!(render(&ty), "Map<string, Promise<number[]>>");
}

#[test]
fn typeof_reference() {
    assert_eq!(render(&Type::type_of("globalThis.console")), "typeof globalThis.console");
}

#[test]
fn string_literals_are_json_escaped() {
    assert_eq!(render(&Type::string_literal("a\"b\n")), r#""a\"b\n""#);
}

#[test]
fn number_literals() {
    assert_eq!(render(&Type::number_literal(42.0)), "42");
    assert_eq!(render(&Type::number_literal(-1.5)), "-1.5");
    assert_eq!(render(&Type::number_literal(f64::NAN)), "typeof NaN");
    assert_eq!(render(&Type::number_literal(f64::INFINITY)), "typeof Infinity");
    assert_eq!(
        render(&Type::number_literal(f64::NEG_INFINITY)),
        "typeof Infinity"
    );
}

#[test]
fn format_number_matches_javascript() {
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(-0.0), "0");
    assert_eq!(format_number(0.1), "0.1");
    assert_eq!(format_number(123456789012.0), "123456789012");
    assert_eq!(format_number(0.000001), "0.000001");
    assert_eq!(format_number(1e-7), "1e-7");
    assert_eq!(format_number(1e21), "1e+21");
    assert_eq!(format_number(-2.5e300), "-2.5e+300");
    assert_eq!(format_number(1e20), "100000000000000000000");
}

#[test]
fn object_type_literal() {
    let ty = Type::object_type(vec![
        PropertyDeclaration::new("x", Type::Number).into(),
        PropertyDeclaration::new("y", Type::Number).into(),
    ]);
    insta::assert_snapshot!(render(&ty), @r"
        {
            x: number;
            y: number;
        }
        ");
    assert_eq!(render(&Type::object_type(vec![])), "{\n}");
}
