use crate::utils::{escape_token_text, rule_name_from_class, rule_name_from_kind};

#[test]
fn class_name_drops_context_suffix() {
    assert_eq!(rule_name_from_class("KotlinFileContext"), "KotlinFile");
    assert_eq!(rule_name_from_class("Statements"), "Statements");
}

#[test]
fn class_name_capitalizes_serialized_rule() {
    assert_eq!(rule_name_from_class("kotlinFile"), "KotlinFile");
    assert_eq!(rule_name_from_class("semi"), "Semi");
    assert_eq!(rule_name_from_class(""), "");
}

#[test]
fn class_name_keeps_non_rule_lines() {
    assert_eq!(rule_name_from_class("<empty list>"), "<empty list>");
    assert_eq!(rule_name_from_class("PsiElement"), "PsiElement");
}

#[test]
fn kind_to_pascal_case() {
    assert_eq!(rule_name_from_kind("source_file"), "SourceFile");
    assert_eq!(rule_name_from_kind("class_declaration"), "ClassDeclaration");
    assert_eq!(rule_name_from_kind("identifier"), "Identifier");
    assert_eq!(rule_name_from_kind("_lexical_identifier"), "LexicalIdentifier");
    assert_eq!(rule_name_from_kind("ERROR"), "ERROR");
}

#[test]
fn token_text_escapes_line_breaks() {
    assert_eq!(escape_token_text("\n\n"), "\\n\\n");
    assert_eq!(escape_token_text("a\tb"), "a\\tb");
    assert_eq!(escape_token_text("plain"), "plain");
}
