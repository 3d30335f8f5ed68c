//! Built-in profile: ANTLR Kotlin grammar (candidate) against Kotlin compiler
//! PSI dumps (reference).
//!
//! Candidate rule names also cover the tree-sitter Kotlin grammar where its
//! PascalCased node kinds differ from the ANTLR rule names.

use crate::{
    NameCheck, RawConfig, RawProfile, RawRedundantRule, RawRulePair, RawSigilMerge, RawTokenPair,
};

const EQUIVALENT_RULES: &[(&str, &str)] = &[
    ("KotlinFile", "KtFile*"),
    ("SourceFile", "KtFile*"),
    ("FileAnnotation", "ANNOTATION"),
    ("PackageHeader", "PACKAGE_DIRECTIVE"),
    ("ImportDirective", "IMPORT_LIST"),
    ("ImportList", "IMPORT_LIST"),
    ("ImportHeader", "IMPORT_DIRECTIVE"),
    ("ImportAlias", "IMPORT_ALIAS"),
    ("TypeAlias", "TYPEALIAS"),
    ("ClassDeclaration", "CLASS"),
    ("InterfaceDeclaration", "INTERFACE"),
    ("PrimaryConstructor", "PRIMARY_CONSTRUCTOR"),
    ("ClassParameters", "VALUE_PARAMETER_LIST"),
    ("ClassParameter", "VALUE_PARAMETER"),
    ("DelegationSpecifiers", "SUPER_TYPE_LIST"),
    ("ConstructorInvocation", "SUPER_TYPE_CALL_ENTRY"),
    ("ExplicitDelegation", "DELEGATED_SUPER_TYPE_ENTRY"),
    ("ClassBody", "CLASS_BODY"),
    ("AnonymousInitializer", "CLASS_INITIALIZER"),
    ("EnumClassBody", "CLASS_BODY"),
    ("EnumEntry", "ENUM_ENTRY"),
    ("FunctionDeclaration", "FUN"),
    ("FunctionValueParameters", "VALUE_PARAMETER_LIST"),
    ("FunctionValueParameter", "VALUE_PARAMETER"),
    ("Parameter", "VALUE_PARAMETER"),
    ("ObjectDeclaration", "OBJECT_DECLARATION"),
    ("CompanionObject", "OBJECT_DECLARATION"),
    ("PropertyDeclaration", "PROPERTY"),
    ("MultiVariableDeclaration", "DESTRUCTURING_DECLARATION"),
    ("VariableDeclaration", "DESTRUCTURING_DECLARATION_ENTRY"),
    ("Getter", "PROPERTY_ACCESSOR"),
    ("Setter", "PROPERTY_ACCESSOR"),
    ("TypeParameters", "TYPE_PARAMETER_LIST"),
    ("TypeParameter", "TYPE_PARAMETER"),
    ("NullableType", "NULLABLE_TYPE"),
    ("Type", "TYPE_REFERENCE"),
    ("TypeReference", "TYPE_REFERENCE"),
    ("UserType", "USER_TYPE"),
    ("FunctionType", "FUNCTION_TYPE"),
    ("FunctionTypeParameters", "VALUE_PARAMETER_LIST"),
    ("TypeConstraint", "TYPE_CONSTRAINT"),
    ("Block", "BLOCK"),
    ("Statements", "BLOCK"),
    ("Assignment", "BINARY_EXPRESSION"),
    ("Disjunction", "BINARY_EXPRESSION"),
    ("Conjunction", "BINARY_EXPRESSION"),
    ("Equality", "BINARY_EXPRESSION"),
    ("Comparison", "BINARY_EXPRESSION"),
    ("InfixOperation", "IS_EXPRESSION"),
    ("InfixOperation", "BINARY_EXPRESSION"),
    ("ElvisExpression", "BINARY_EXPRESSION"),
    ("InfixFunctionCall", "BINARY_EXPRESSION"),
    ("RangeExpression", "BINARY_EXPRESSION"),
    ("AdditiveExpression", "BINARY_EXPRESSION"),
    ("MultiplicativeExpression", "BINARY_EXPRESSION"),
    ("AsExpression", "BINARY_WITH_TYPE"),
    ("PrefixUnaryExpression", "PREFIX_EXPRESSION"),
    ("PostfixUnaryExpression", "POSTFIX_EXPRESSION"),
    ("CallExpression", "CALL_EXPRESSION"),
    ("DotQualifiedExpression", "DOT_QUALIFIED_EXPRESSION"),
    ("DotQualifiedExpression", "SAFE_ACCESS_EXPRESSION"),
    ("IndexingExpression", "ARRAY_ACCESS_EXPRESSION"),
    ("ArrayAccess", "INDICES"),
    ("ValueArguments", "VALUE_ARGUMENT_LIST"),
    ("TypeArguments", "TYPE_ARGUMENT_LIST"),
    ("TypeProjection", "TYPE_PROJECTION"),
    ("ValueArgument", "VALUE_ARGUMENT"),
    ("ParenthesizedExpression", "PARENTHESIZED"),
    ("LineStringLiteral", "STRING_TEMPLATE"),
    ("MultiLineStringLiteral", "STRING_TEMPLATE"),
    ("FunctionLiteral", "FUNCTION_LITERAL"),
    ("LambdaLiteral", "FUNCTION_LITERAL"),
    ("LambdaParameters", "VALUE_PARAMETER_LIST"),
    ("LambdaParameter", "VALUE_PARAMETER"),
    ("ObjectLiteral", "OBJECT_DECLARATION"),
    ("SuperExpression", "SUPER_EXPRESSION"),
    ("IfExpression", "IF"),
    ("WhenExpression", "WHEN"),
    ("WhenEntry", "WHEN_ENTRY"),
    ("ForExpression", "FOR"),
    ("ForStatement", "FOR"),
    ("JumpExpression", "THROW"),
    ("JumpExpression", "RETURN"),
    ("JumpExpression", "BREAK"),
    ("JumpExpression", "CONTINUE"),
    ("CallableReference", "CALLABLE_REFERENCE_EXPRESSION"),
    ("ModifierList", "MODIFIER_LIST"),
    ("Annotation", "ANNOTATION_ENTRY"),
    ("AnnotationList", "ANNOTATION"),
    ("UnescapedAnnotation", "ANNOTATION_ENTRY"),
];

/// Pairs whose shapes differ too much to descend into; they match as a whole.
const INCOMPARABLE_RULES: &[(&str, &str)] = &[
    ("PostfixUnaryExpression", "DOT_QUALIFIED_EXPRESSION"),
    ("PostfixUnaryExpression", "SAFE_ACCESS_EXPRESSION"),
    ("PostfixUnaryExpression", "CALL_EXPRESSION"),
    ("PostfixUnaryExpression", "ARRAY_ACCESS_EXPRESSION"),
    ("Identifier", "DOT_QUALIFIED_EXPRESSION"),
];

/// `(rule, unless_parent)`
const CANDIDATE_REDUNDANT_RULES: &[(&str, Option<&str>)] = &[
    ("VariableDeclaration", Some("MultiVariableDeclaration")),
    ("Parameter", Some("FunctionTypeParameters")),
    ("FunctionBody", None),
    ("TypeConstraints", None),
    ("EnumEntries", None),
    ("MemberAccessOperator", None),
    ("AsExpressionTail", None),
    ("SimpleUserType", None),
    ("ParenthesizedType", None),
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn pairs(items: &[(&str, &str)]) -> Vec<RawRulePair> {
    items
        .iter()
        .map(|(candidate, reference)| RawRulePair {
            candidate: (*candidate).to_owned(),
            reference: (*reference).to_owned(),
        })
        .collect()
}

fn candidate_profile() -> RawProfile {
    RawProfile {
        irrelevant_rules: strings(&[
            "<empty list>",
            "ModifierList",
            "Modifiers",
            "LineComment",
            "MultilineComment",
        ]),
        irrelevant_rule_fragments: strings(&["Semi"]),
        irrelevant_texts: strings(&["\r\n", "\n", ";", "<EOF>"]),
        irrelevant_token_kinds: strings(&["NL", "SEMICOLON", "EOF"]),
        empty_block_rules: strings(&["Statements"]),
        always_list_rules: Vec::new(),
        redundant_rules: CANDIDATE_REDUNDANT_RULES
            .iter()
            .map(|(rule, unless_parent)| RawRedundantRule {
                rule: (*rule).to_owned(),
                unless_parent: unless_parent.map(str::to_owned),
            })
            .collect(),
        split_tokens: strings(&["?::"]),
        split_sigils: strings(&["@"]),
        fused_pairs: vec![RawTokenPair {
            first: "?".to_owned(),
            second: ".".to_owned(),
        }],
        sigil_merges: Vec::<RawSigilMerge>::new(),
    }
}

fn reference_profile() -> RawProfile {
    RawProfile {
        irrelevant_rules: strings(&["PsiWhiteSpace", "PsiComment", "KDoc", "MODIFIER_LIST"]),
        irrelevant_token_kinds: strings(&["SEMICOLON"]),
        empty_block_rules: strings(&["BLOCK"]),
        always_list_rules: strings(&["KDoc"]),
        ..RawProfile::default()
    }
}

pub(crate) fn raw_config() -> RawConfig {
    RawConfig {
        name_check: NameCheck::Every,
        equivalent_rules: pairs(EQUIVALENT_RULES),
        incomparable_rules: pairs(INCOMPARABLE_RULES),
        candidate: candidate_profile(),
        reference: reference_profile(),
    }
}
