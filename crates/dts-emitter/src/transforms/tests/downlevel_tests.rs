use super::*;
use dts_parser::parse_file;

fn parse(source: &str) -> ParsedFile {
    let file = parse_file("test.d.ts", source);
    assert!(file.diagnostics.is_empty(), "{:?}", file.diagnostics);
    file
}

fn statements(file: &ParsedFile) -> Vec<NodeIndex> {
    file.arena
        .get_source_file_at(file.root)
        .unwrap()
        .statements
        .nodes
        .clone()
}

fn kinds(file: &ParsedFile, nodes: &[NodeIndex]) -> Vec<u16> {
    nodes
        .iter()
        .map(|&idx| file.arena.get(idx).unwrap().kind)
        .collect()
}

fn class_members(file: &ParsedFile, class: NodeIndex) -> Vec<NodeIndex> {
    file.arena
        .get_class(file.arena.get(class).unwrap())
        .unwrap()
        .members
        .nodes
        .clone()
}

#[test]
fn test_file_without_matches_is_returned_unchanged() {
    let file = parse("interface I {\n    get: number;\n    set(v: number): void;\n}\nexport * from \"m\";\ndeclare class A {\n    x: number;\n}\n");
    let root = file.root;
    let node_count = file.arena.len();
    let out = transform_file(file).unwrap();
    assert_eq!(out.root, root);
    assert_eq!(out.arena.len(), node_count);
}

#[test]
fn test_visit_reports_each_outcome() {
    let mut file = parse(
        "declare class A {\n    get x(): number;\n    set x(v: number);\n    y: string;\n}\nexport * as ns from \"m\";\n",
    );
    let stmts = statements(&file);
    let members = class_members(&file, stmts[0]);
    let mut transformer = DownlevelTransformer::new(&mut file.arena, file.root);

    assert!(matches!(
        transformer.visit(members[0]).unwrap(),
        VisitResult::Replace(_)
    ));
    assert_eq!(transformer.visit(members[1]).unwrap(), VisitResult::Remove);
    assert_eq!(transformer.visit(members[2]).unwrap(), VisitResult::Unchanged);
    match transformer.visit(stmts[1]).unwrap() {
        VisitResult::ReplaceMany(nodes) => assert_eq!(nodes.len(), 2),
        other => panic!("expected two statements, got {other:?}"),
    }
    assert_eq!(transformer.rewrites(), 3);
}

#[test]
fn test_accessor_pair_collapses_to_one_property() {
    let file = parse("declare class A {\n    get x(): number;\n    other(): void;\n    set x(v: number);\n}\n");
    let out = transform_file(file).unwrap();
    let class = statements(&out)[0];
    let members = class_members(&out, class);
    assert_eq!(
        kinds(&out, &members),
        vec![
            syntax_kind_ext::PROPERTY_DECLARATION,
            syntax_kind_ext::VERBATIM_MEMBER
        ]
    );
    assert!(out.arena.get_modifiers(members[0]).is_none());
}

#[test]
fn test_rebuilt_containers_point_at_their_originals() {
    let file = parse("declare namespace N {\n    class A {\n        get x(): number;\n    }\n    const keep: number;\n}\n");
    let original_root = file.root;
    let original_module = statements(&file)[0];
    let out = transform_file(file).unwrap();

    assert_ne!(out.root, original_root);
    assert_eq!(out.arena.get_original(out.root), original_root);
    let module = statements(&out)[0];
    assert_ne!(module, original_module);
    assert_eq!(out.arena.get_original(module), original_module);

    let body = out
        .arena
        .get_module(out.arena.get(module).unwrap())
        .unwrap()
        .body
        .clone()
        .unwrap();
    assert_eq!(
        kinds(&out, &body.nodes),
        vec![
            syntax_kind_ext::CLASS_DECLARATION,
            syntax_kind_ext::VERBATIM_STATEMENT
        ]
    );
    let members = class_members(&out, body.nodes[0]);
    assert_eq!(
        kinds(&out, &members),
        vec![syntax_kind_ext::PROPERTY_DECLARATION]
    );
}

#[test]
fn test_reexport_expands_in_place() {
    let file = parse("declare const a: number;\nexport * as ns from \"m\";\ndeclare const b: number;\n");
    let out = transform_file(file).unwrap();
    assert_eq!(
        kinds(&out, &statements(&out)),
        vec![
            syntax_kind_ext::VERBATIM_STATEMENT,
            syntax_kind_ext::IMPORT_DECLARATION,
            syntax_kind_ext::EXPORT_DECLARATION,
            syntax_kind_ext::VERBATIM_STATEMENT,
        ]
    );
}

#[test]
fn test_fresh_names_are_unique_within_a_file() {
    let file = parse("export * as ns from \"a\";\nexport * as ns from \"b\";\n");
    let out = transform_file(file).unwrap();
    let stmts = statements(&out);
    let temp_name = |import: NodeIndex| {
        let decl = out.arena.get_import_decl(out.arena.get(import).unwrap()).unwrap();
        let clause = out
            .arena
            .get_import_clause(out.arena.get(decl.import_clause).unwrap())
            .unwrap();
        let binding = out
            .arena
            .get_namespace_binding(out.arena.get(clause.named_bindings).unwrap())
            .unwrap();
        out.arena.get_node_text(binding.name).unwrap().to_string()
    };
    assert_eq!(temp_name(stmts[0]), "ns_1");
    assert_eq!(temp_name(stmts[2]), "ns_2");
}

#[test]
fn test_transform_all_keeps_input_order() {
    let files = vec![
        parse_file("a.d.ts", "declare class A {\n    get x(): number;\n}\n"),
        parse_file("b.d.ts", "export {};\n"),
        parse_file("c.d.ts", "export * as c from \"c\";\n"),
    ];
    let out = transform_all(files).unwrap();
    let names: Vec<_> = out.iter().map(|f| f.file_name.as_str()).collect();
    assert_eq!(names, vec!["a.d.ts", "b.d.ts", "c.d.ts"]);
}

#[test]
fn test_first_error_aborts_the_batch() {
    let files = vec![
        parse_file("a.d.ts", "declare class A {\n    get x(): number;\n}\n"),
        parse_file("b.d.ts", "declare class B {\n    set broken();\n}\n"),
    ];
    let err = transform_all(files).unwrap_err();
    assert!(matches!(err, TransformError::InvariantViolation { .. }));
}

#[test]
fn test_depth_limit_passes_nodes_through() {
    let mut file = parse("declare class A {\n    get x(): number;\n}\n");
    let class = statements(&file)[0];
    let mut transformer = DownlevelTransformer::new(&mut file.arena, file.root);
    transformer.visit_depth = MAX_AST_DEPTH;
    assert_eq!(transformer.visit(class).unwrap(), VisitResult::Unchanged);
}

fn malformed_parent(source: &str) -> (String, &'static str) {
    match transform_file(parse(source)) {
        Err(TransformError::MalformedTree {
            name, parent_kind, ..
        }) => (name, parent_kind),
        other => panic!("expected a malformed tree error, got {other:?}"),
    }
}

#[test]
fn test_interface_accessor_is_rejected() {
    let (name, parent_kind) = malformed_parent("interface I {\n    get x(): number;\n}\n");
    assert_eq!(name, "x");
    assert_eq!(parent_kind, "InterfaceDeclaration");
}

#[test]
fn test_type_literal_accessors_are_rejected() {
    let (name, parent_kind) = malformed_parent("type T = { set z(v: number) };\n");
    assert_eq!(name, "z");
    assert_eq!(parent_kind, "TypeLiteral");

    let (name, parent_kind) =
        malformed_parent("declare class A {\n    p: {\n        get y(): string;\n    };\n}\n");
    assert_eq!(name, "y");
    assert_eq!(parent_kind, "TypeLiteral");

    let (name, parent_kind) =
        malformed_parent("declare namespace N {\n    interface J {\n        a: string, get b(): number\n    }\n}\n");
    assert_eq!(name, "b");
    assert_eq!(parent_kind, "InterfaceDeclaration");
}
