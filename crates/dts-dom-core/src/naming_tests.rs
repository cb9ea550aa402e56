use crate::naming::{is_identifier, is_identifier_name, quote_if_needed, quote_string};

#[test]
fn identifier_name_accepts_plain_names() {
    assert!(is_identifier_name("foo"));
    assert!(is_identifier_name("_private"));
    assert!(is_identifier_name("$special"));
    assert!(is_identifier_name("Foo42"));
    assert!(is_identifier_name("a_b$c"));
}

#[test]
fn identifier_name_rejects_other_shapes() {
    assert!(!is_identifier_name(""));
    assert!(!is_identifier_name("0abc"));
    assert!(!is_identifier_name("my-key"));
    assert!(!is_identifier_name("has space"));
    assert!(!is_identifier_name("a.b"));
    assert!(!is_identifier_name("émoji"));
}

#[test]
fn reserved_words_are_names_but_not_identifiers() {
    for word in ["default", "class", "this", "typeof", "yield"] {
        assert!(is_identifier_name(word), "{word}");
        assert!(!is_identifier(word), "{word}");
    }
}

#[test]
fn identifier_requires_identifier_name() {
    assert!(is_identifier("myFunction"));
    assert!(!is_identifier("not an identifier"));
    assert!(!is_identifier("1st"));
}

#[test]
fn quote_if_needed_keeps_identifier_names() {
    assert_eq!(quote_if_needed("name"), "name");
    assert_eq!(quote_if_needed("default"), "default");
}

#[test]
fn quote_if_needed_quotes_everything_else() {
    assert_eq!(quote_if_needed("my-key"), "\"my-key\"");
    assert_eq!(quote_if_needed("0abc"), "\"0abc\"");
    assert_eq!(quote_if_needed(""), "\"\"");
}

#[test]
fn quote_string_escapes_like_json() {
    assert_eq!(quote_string("say \"hi\""), r#""say \"hi\"""#);
    assert_eq!(quote_string("a\\b"), r#""a\\b""#);
    assert_eq!(quote_string("line\nbreak"), r#""line\nbreak""#);
    assert_eq!(quote_string("tab\t"), r#""tab\t""#);
}
