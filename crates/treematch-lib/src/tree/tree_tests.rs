use super::{NodeId, Token, TreeBuilder};

#[test]
fn builder_links_parent_and_children() {
    let mut builder = TreeBuilder::new("File");
    let root = builder.root();
    let class = builder.push(root, "CLASS", None);
    let name = builder.push(class, "PsiElement", Some(Token::new("IDENTIFIER", "Foo")));
    let tree = builder.finish();

    assert_eq!(tree.node_count(), 3);
    let root = tree.root();
    assert_eq!(root.rule_name(), "File");
    assert!(root.parent().is_none());
    assert_eq!(root.child_count(), 1);

    let class_ref = root.child(0).unwrap();
    assert_eq!(class_ref.id(), class);
    assert_eq!(class_ref.parent(), Some(root));

    let name_ref = tree.get(name).unwrap();
    assert!(name_ref.is_token());
    assert_eq!(name_ref.token().unwrap().kind, "IDENTIFIER");
    assert_eq!(name_ref.parent().unwrap().rule_name(), "CLASS");
}

#[test]
fn children_keep_insertion_order() {
    let mut builder = TreeBuilder::new("Root");
    let root = builder.root();
    for rule in ["A", "B", "C"] {
        builder.push(root, rule, None);
    }
    let tree = builder.finish();

    let names: Vec<_> = tree.root().children().map(|c| c.rule_name()).collect();
    assert_eq!(names, ["A", "B", "C"]);
    assert!(tree.root().child(3).is_none());
}

#[test]
fn text_concatenates_leaves() {
    let mut builder = TreeBuilder::new("Root");
    let root = builder.root();
    let call = builder.push(root, "CALL", None);
    builder.push(call, "PsiElement", Some(Token::new("IDENTIFIER", "f")));
    builder.push(call, "PsiElement", Some(Token::new("LPAR", "(")));
    builder.push(call, "PsiElement", Some(Token::new("RPAR", ")")));
    let tree = builder.finish();

    assert_eq!(tree.root().text(), "f()");
    assert_eq!(tree.root().child(0).unwrap().child(1).unwrap().text(), "(");
}

#[test]
fn builder_queries() {
    let mut builder = TreeBuilder::new("Root");
    let leaf = builder.push(NodeId::ROOT, "Leaf", Some(Token::new("K", "x")));

    assert!(builder.is_token(leaf));
    assert!(!builder.is_token(builder.root()));
    assert_eq!(builder.parent(leaf), Some(NodeId::ROOT));
    assert_eq!(builder.parent(NodeId::ROOT), None);
}

#[test]
fn get_rejects_unknown_id() {
    let tree = TreeBuilder::new("Root").finish();
    assert!(tree.get(NodeId::ROOT).is_some());
    assert!(tree.get(TreeBuilder::ensure_id(5)).is_none());
}

#[test]
#[should_panic(expected = "cannot have children")]
fn token_nodes_reject_children() {
    let mut builder = TreeBuilder::new("Root");
    let leaf = builder.push(NodeId::ROOT, "Leaf", Some(Token::new("K", "x")));
    builder.push(leaf, "Child", None);
}

#[test]
fn debug_shows_rule_name() {
    let tree = TreeBuilder::new("Root").finish();
    let debug = format!("{:?}", tree.root());
    assert!(debug.contains("rule_name: \"Root\""));
}
