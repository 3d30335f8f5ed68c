use indoc::indoc;
use treematch_core::{EquivalenceConfig, Profile, RawProfile, RawSigilMerge};

use super::Normalizer;
use crate::dump::parse_dump;
use crate::tree::{NodeRef, Tree};

fn at<'t>(tree: &'t Tree, path: &[usize]) -> NodeRef<'t> {
    path.iter()
        .fold(tree.root(), |node, &i| node.child(i).unwrap())
}

fn all_nodes<'t>(node: NodeRef<'t>, out: &mut Vec<NodeRef<'t>>) {
    out.push(node);
    for child in node.children() {
        all_nodes(child, out);
    }
}

#[test]
fn reference_noise_is_not_counted() {
    let tree = parse_dump(indoc! {"
        KtFile: a.kt
          PsiComment(EOL_COMMENT)('// hi')
          PsiWhiteSpace('\\n')
          FUN
            PsiElement(fun)('fun')
            PsiWhiteSpace(' ')
            PsiElement(IDENTIFIER)('f')
            PsiElement(SEMICOLON)(';')
          KDoc
            PsiElement(KDOC_START)('/**')
            PsiElement(KDOC_END)('*/')
    "})
    .unwrap();
    let config = EquivalenceConfig::kotlin();
    let reference = Normalizer::new(config.reference());

    assert_eq!(reference.relevant_child_count(&tree.root()), 1);
    assert_eq!(reference.relevant_child_count(&at(&tree, &[2])), 2);
    assert!(!reference.is_relevant(&at(&tree, &[0])));
    assert!(!reference.is_relevant(&at(&tree, &[2, 3])));
    assert!(reference.is_list(&at(&tree, &[3])));
}

#[test]
fn candidate_terminators_and_empty_blocks_are_not_counted() {
    let tree = parse_dump(indoc! {"
        Root
          Statements
            PsiElement(NL)('\\n')
          Semis
            PsiElement(SEMICOLON)(';')
          Expression
            PsiElement(IntegerLiteral)('1')
          PsiElement(EOF)('<EOF>')
    "})
    .unwrap();
    let config = EquivalenceConfig::kotlin();
    let candidate = Normalizer::new(config.candidate());

    assert!(!candidate.is_relevant(&at(&tree, &[0])));
    assert!(!candidate.is_relevant(&at(&tree, &[1])));
    assert!(candidate.is_relevant(&at(&tree, &[2])));
    assert!(!candidate.is_relevant(&at(&tree, &[3])));
    assert_eq!(candidate.relevant_child_count(&tree.root()), 1);
}

#[test]
fn non_empty_block_stays_relevant() {
    let tree = parse_dump(indoc! {"
        Root
          Statements
            PsiElement(NL)('\\n')
            Statement
              PsiElement(Identifier)('x')
    "})
    .unwrap();
    let config = EquivalenceConfig::kotlin();
    let candidate = Normalizer::new(config.candidate());

    assert!(candidate.is_relevant(&at(&tree, &[0])));
}

#[test]
fn block_holding_only_nested_noise_is_empty() {
    let profile = Profile::build(&RawProfile {
        irrelevant_rules: vec!["PsiWhiteSpace".to_owned()],
        empty_block_rules: vec!["Statements".to_owned()],
        ..RawProfile::default()
    });
    let tree = parse_dump(indoc! {"
        Root
          Statements
            Wrapper
              PsiWhiteSpace(' ')
          X
            PsiElement(A)('a')
            PsiElement(B)('b')
    "})
    .unwrap();
    let normalizer = Normalizer::new(&profile);

    assert!(normalizer.is_relevant(&at(&tree, &[0, 0])));
    assert!(!normalizer.is_relevant(&at(&tree, &[0])));
    assert_eq!(normalizer.relevant_child_count(&tree.root()), 1);
}

#[test]
fn block_with_nested_token_stays_relevant() {
    let profile = Profile::build(&RawProfile {
        irrelevant_rules: vec!["PsiWhiteSpace".to_owned()],
        empty_block_rules: vec!["Statements".to_owned()],
        ..RawProfile::default()
    });
    let tree = parse_dump(indoc! {"
        Root
          Statements
            Wrapper
              PsiWhiteSpace(' ')
              Inner
                PsiElement(Identifier)('x')
    "})
    .unwrap();
    let normalizer = Normalizer::new(&profile);

    assert!(normalizer.is_relevant(&at(&tree, &[0])));
    assert_eq!(normalizer.relevant_child_count(&tree.root()), 1);
}

#[test]
fn split_token_counts_twice() {
    let tree = parse_dump(indoc! {"
        Root
          CallableReference
            SimpleIdentifier
              PsiElement(Identifier)('A')
            PsiElement(QUEST_COLONCOLON)('?::')
            SimpleIdentifier
              PsiElement(Identifier)('b')
    "})
    .unwrap();
    let config = EquivalenceConfig::kotlin();
    let candidate = Normalizer::new(config.candidate());

    assert_eq!(candidate.relevant_child_count(&at(&tree, &[0])), 4);
}

#[test]
fn fused_pair_counts_once() {
    let tree = parse_dump(indoc! {"
        Root
          PostfixUnarySuffix
            PsiElement(QUEST_NO_WS)('?')
            PsiElement(DOT)('.')
            PsiElement(Identifier)('x')
    "})
    .unwrap();
    let config = EquivalenceConfig::kotlin();
    let candidate = Normalizer::new(config.candidate());

    assert_eq!(candidate.relevant_child_count(&at(&tree, &[0])), 2);
}

#[test]
fn label_sigil_splits_only_when_attached() {
    let tree = parse_dump(indoc! {"
        Root
          Label
            PsiElement(LabelDefinition)('loop@')
          Other
            PsiElement(AT)('@')
    "})
    .unwrap();
    let config = EquivalenceConfig::kotlin();
    let candidate = Normalizer::new(config.candidate());

    assert_eq!(candidate.relevant_child_count(&at(&tree, &[0])), 2);
    assert_eq!(candidate.relevant_child_count(&at(&tree, &[1])), 1);
}

#[test]
fn sigil_merge_counts_once() {
    let profile = Profile::build(&RawProfile {
        sigil_merges: vec![RawSigilMerge {
            sigil: "@".to_owned(),
            next_rule: "UnescapedAnnotation".to_owned(),
        }],
        ..RawProfile::default()
    });
    let tree = parse_dump(indoc! {"
        Root
          Annotation
            PsiElement(AT)('@')
            UnescapedAnnotation
              PsiElement(Identifier)('Foo')
    "})
    .unwrap();

    let normalizer = Normalizer::new(&profile);
    assert_eq!(normalizer.relevant_child_count(&at(&tree, &[0])), 1);
}

#[test]
fn redundant_wrapper_contributes_its_children() {
    let tree = parse_dump(indoc! {"
        Root
          FunctionDeclaration
            PsiElement(FUN)('fun')
            SimpleIdentifier
              PsiElement(Identifier)('f')
            FunctionBody
              PsiElement(ASSIGNMENT)('=')
              Expression
                PsiElement(IntegerLiteral)('1')
    "})
    .unwrap();
    let config = EquivalenceConfig::kotlin();
    let candidate = Normalizer::new(config.candidate());

    assert!(candidate.is_redundant(&at(&tree, &[0, 2])));
    assert_eq!(candidate.relevant_child_count(&at(&tree, &[0])), 4);
}

#[test]
fn redundancy_exception_under_listed_parent() {
    let tree = parse_dump(indoc! {"
        Root
          MultiVariableDeclaration
            PsiElement(LPAREN)('(')
            VariableDeclaration
              SimpleIdentifier
                PsiElement(Identifier)('a')
              PsiElement(COLON)(':')
              Type
                PsiElement(Identifier)('Int')
            PsiElement(RPAREN)(')')
          VariableDeclaration
            SimpleIdentifier
              PsiElement(Identifier)('b')
    "})
    .unwrap();
    let config = EquivalenceConfig::kotlin();
    let candidate = Normalizer::new(config.candidate());

    assert!(!candidate.is_redundant(&at(&tree, &[0, 1])));
    assert!(candidate.is_redundant(&at(&tree, &[1])));
    assert_eq!(candidate.relevant_child_count(&at(&tree, &[0])), 3);
}

#[test]
fn lists_and_collapse() {
    let tree = parse_dump(indoc! {"
        Root
          A
            B
              C
                PsiElement(X)('x')
          D
            E
            F
              PsiElement(Y)('y')
              PsiElement(Z)('z')
    "})
    .unwrap();
    let profile = Profile::default();
    let normalizer = Normalizer::new(&profile);

    let a = at(&tree, &[0]);
    assert!(normalizer.is_list(&a));
    assert_eq!(normalizer.collapse(&a), at(&tree, &[0, 0, 0, 0]));

    let d = at(&tree, &[1]);
    assert!(!normalizer.is_list(&d));
    assert_eq!(normalizer.collapse(&d), d);
    assert!(normalizer.is_list(&at(&tree, &[1, 0])));
    assert_eq!(normalizer.next_child(&d, 0), 1);
    assert_eq!(normalizer.next_child(&d, 2), 2);
    assert_eq!(normalizer.first_relevant_child(&d), Some(at(&tree, &[1, 0])));
}

#[test]
fn always_list_rule_is_a_list() {
    let profile = Profile::build(&RawProfile {
        always_list_rules: vec!["KDoc".to_owned()],
        ..RawProfile::default()
    });
    let tree = parse_dump("Root\n  KDoc\n    A\n      PsiElement(X)('x')\n    B\n      PsiElement(Y)('y')\n").unwrap();
    let normalizer = Normalizer::new(&profile);

    assert_eq!(normalizer.relevant_child_count(&at(&tree, &[0])), 2);
    assert!(normalizer.is_list(&at(&tree, &[0])));
    assert_eq!(normalizer.next_child(&tree.root(), 0), 1);
}

#[test]
fn list_nodes_collapse_to_leaves_and_collapse_is_idempotent() {
    let tree = parse_dump(indoc! {"
        KtFile: a.kt
          PACKAGE_DIRECTIVE
            <empty list>
          IMPORT_LIST
            <empty list>
          PsiWhiteSpace('\\n')
          PROPERTY
            PsiElement(val)('val')
            PsiWhiteSpace(' ')
            PsiElement(IDENTIFIER)('x')
            PsiWhiteSpace(' ')
            PsiElement(EQ)('=')
            PsiWhiteSpace(' ')
            PARENTHESIZED
              PsiElement(LPAR)('(')
              INTEGER_CONSTANT
                PsiElement(INTEGER_LITERAL)('1')
              PsiElement(RPAR)(')')
    "})
    .unwrap();
    let config = EquivalenceConfig::kotlin();
    let reference = Normalizer::new(config.reference());

    let mut nodes = Vec::new();
    all_nodes(tree.root(), &mut nodes);
    for node in nodes {
        let collapsed = reference.collapse(&node);
        assert_eq!(reference.collapse(&collapsed), collapsed);
        if reference.is_list(&node) {
            assert_eq!(reference.relevant_child_count(&collapsed), 0, "{node:?}");
        }
    }
}
