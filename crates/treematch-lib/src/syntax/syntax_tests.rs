use super::SyntaxNode;
use crate::dump::parse_dump;

#[test]
fn dump_nodes_expose_tokens_as_terminals() {
    let tree = parse_dump("FUN\n  PsiElement(fun)('fun')\n  VALUE_PARAMETER_LIST\n").unwrap();
    let root = tree.root();

    assert_eq!(SyntaxNode::rule_name(&root), "FUN");
    assert!(!SyntaxNode::is_terminal(&root));
    assert_eq!(SyntaxNode::token_kind(&root), None);

    let keyword = SyntaxNode::child(&root, 0).unwrap();
    assert!(SyntaxNode::is_terminal(&keyword));
    assert_eq!(SyntaxNode::token_kind(&keyword).as_deref(), Some("fun"));
    assert_eq!(SyntaxNode::text(&keyword), "fun");

    let params = SyntaxNode::child(&root, 1).unwrap();
    assert_eq!(SyntaxNode::child_count(&params), 0);
    assert!(!SyntaxNode::is_terminal(&params));
    assert_eq!(SyntaxNode::parent(&params), Some(root));
    assert_eq!(SyntaxNode::children(&root).count(), 2);
}

#[test]
fn unknown_extension_has_no_grammar() {
    assert!(super::language_for_extension("java").is_none());
}

#[cfg(feature = "lang-kotlin")]
mod tree_sitter_kotlin {
    use treematch_core::EquivalenceConfig;

    use super::super::source::ANONYMOUS_RULE;
    use super::super::{SourceNode, SyntaxNode, kotlin, language_for_extension, parse_source};
    use crate::dump::{DumpPrinter, parse_dump};
    use crate::reconcile::Reconciler;

    const SOURCE: &str = "fun main() {}\n";

    #[test]
    fn source_tree_uses_pascal_case_rule_names() {
        let tree = parse_source(&kotlin(), SOURCE).unwrap();
        let root = SourceNode::root(&tree, SOURCE);

        assert_eq!(root.rule_name(), "SourceFile");
        assert!(root.parent().is_none());

        let function = root.child(0).unwrap();
        assert_eq!(function.rule_name(), "FunctionDeclaration");
        assert_eq!(function.text(), "fun main() {}");
        assert_eq!(function.parent().unwrap().rule_name(), "SourceFile");

        let keyword = function.child(0).unwrap();
        assert_eq!(keyword.rule_name(), ANONYMOUS_RULE);
        assert!(keyword.is_terminal());
        assert_eq!(keyword.token_kind().as_deref(), Some("fun"));
        assert_eq!(keyword.text(), "fun");
    }

    #[test]
    fn kotlin_extensions_resolve() {
        assert!(language_for_extension("kt").is_some());
        assert!(language_for_extension("KTS").is_some());
    }

    #[test]
    fn source_tree_reconciles_with_its_own_dump() {
        let tree = parse_source(&kotlin(), SOURCE).unwrap();
        let root = SourceNode::root(&tree, SOURCE);

        let dumped = DumpPrinter::new(root).render();
        assert!(dumped.starts_with("SourceFile\n  FunctionDeclaration\n"));
        assert!(dumped.contains("Token(fun)('fun')"));

        let reread = parse_dump(&dumped).unwrap();
        let config = EquivalenceConfig::default();
        let reconciler = Reconciler::new(&config);
        assert!(reconciler.matches(&root, &reread.root()));
        assert!(reconciler.matches(&root, &root));
    }
}
