use crate::parser::{ModifierFlags, NO_POS, NodeArena, NodeIndex, parse_file, syntax_kind_ext};
use dts_scanner::SyntaxKind;

fn first_class(file: &crate::ParsedFile) -> NodeIndex {
    file.arena.get_source_file_at(file.root).unwrap().statements.nodes[0]
}

#[test]
fn test_create_modifiers_from_flags_uses_canonical_order() {
    let mut arena = NodeArena::new();
    let flags = ModifierFlags::READONLY
        | ModifierFlags::STATIC
        | ModifierFlags::PUBLIC
        | ModifierFlags::EXPORT;
    let list = arena.create_modifiers_from_flags(flags).expect("modifiers");
    let kinds: Vec<u16> = list
        .nodes
        .iter()
        .map(|&m| arena.get(m).unwrap().kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::ExportKeyword as u16,
            SyntaxKind::PublicKeyword as u16,
            SyntaxKind::StaticKeyword as u16,
            SyntaxKind::ReadonlyKeyword as u16,
        ]
    );
    assert!(list.is_synthesized());
    assert_eq!(arena.modifiers_to_flags(Some(&list)), flags);
}

#[test]
fn test_create_modifiers_from_empty_flags_is_none() {
    let mut arena = NodeArena::new();
    assert!(arena.create_modifiers_from_flags(ModifierFlags::empty()).is_none());
    assert!(
        arena
            .create_modifiers_from_flags(ModifierFlags::DECORATOR)
            .is_none()
    );
}

#[test]
fn test_combined_modifier_flags_are_own_flags() {
    let file = parse_file(
        "a.d.ts",
        "export declare class A {\n    protected static get x(): number;\n}\n",
    );
    let class = first_class(&file);
    let getter = file.arena.get_class(file.arena.get(class).unwrap()).unwrap().members.nodes[0];
    assert_eq!(
        file.arena.get_combined_modifier_flags(getter),
        ModifierFlags::PROTECTED | ModifierFlags::STATIC
    );
    assert!(file.arena.has_modifier(class, ModifierFlags::EXPORT));
    assert!(file.arena.has_modifier(class, ModifierFlags::AMBIENT));
}

#[test]
fn test_rebuilt_container_keeps_original_parent_links() {
    let mut file = parse_file("a.d.ts", "declare class A {\n    get x(): number;\n}\n");
    let class = first_class(&file);
    let members = file.arena.get_children(class);
    let getter = *members.last().unwrap();

    let rebuilt = file.arena.update_class_members(class, vec![getter]);
    assert_ne!(rebuilt, class);
    assert_eq!(file.arena.get_parent(getter), class);
    assert_eq!(file.arena.get_original(rebuilt), class);

    let original = file.arena.get(class).unwrap().clone();
    let updated = file.arena.get(rebuilt).unwrap();
    assert_eq!(updated.pos, original.pos);
    assert_eq!(updated.end, original.end);
    assert_eq!(updated.kind, syntax_kind_ext::CLASS_DECLARATION);
}

#[test]
fn test_synthesized_nodes_take_first_parent() {
    let mut arena = NodeArena::new();
    let name = arena.create_identifier("ns_1");
    assert!(arena.get(name).unwrap().is_synthesized());
    assert_eq!(arena.get(name).unwrap().pos, NO_POS);
    assert!(arena.get_parent(name).is_none());

    let binding = arena.add_node(
        syntax_kind_ext::NAMESPACE_IMPORT,
        NO_POS,
        NO_POS,
        crate::parser::NodeData::NamespaceBinding(crate::parser::node::NamespaceBindingData {
            name,
        }),
    );
    assert_eq!(arena.get_parent(name), binding);
    assert_eq!(arena.get_node_text(name), Some("ns_1"));
}

#[test]
fn test_get_node_text_for_keyword_tokens() {
    let mut arena = NodeArena::new();
    let readonly = arena.create_modifier(SyntaxKind::ReadonlyKeyword);
    let any = arena.add_token(SyntaxKind::AnyKeyword as u16, NO_POS, NO_POS);
    assert_eq!(arena.get_node_text(readonly), Some("readonly"));
    assert_eq!(arena.get_node_text(any), Some("any"));
    assert_eq!(arena.get_node_text(NodeIndex::NONE), None);
}

#[test]
fn test_children_in_source_order() {
    let file = parse_file("a.d.ts", "declare class A {\n    a: string;\n    b: number;\n}\n");
    let class = first_class(&file);
    let children = file.arena.get_children(class);
    let texts: Vec<_> = children
        .iter()
        .filter_map(|&c| file.arena.get_node_text(c))
        .collect();
    // modifier, name, then members (which have no leaf text)
    assert_eq!(texts, vec!["declare", "A"]);
    assert_eq!(children.len(), 4);
}
