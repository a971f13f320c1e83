use crate::parser::{NodeIndex, ParsedFile, parse_file, syntax_kind_ext};
use dts_common::diagnostics::diagnostic_codes;
use dts_scanner::SyntaxKind;

fn parse(source: &str) -> ParsedFile {
    parse_file("test.d.ts", source)
}

fn statements(file: &ParsedFile) -> Vec<NodeIndex> {
    file.arena
        .get_source_file_at(file.root)
        .expect("source file")
        .statements
        .nodes
        .clone()
}

fn kind_of(file: &ParsedFile, idx: NodeIndex) -> u16 {
    file.arena.get(idx).expect("node").kind
}

fn text_of(file: &ParsedFile, idx: NodeIndex) -> &str {
    file.arena.get_node_text(idx).expect("text")
}

fn class_members(file: &ParsedFile, class: NodeIndex) -> Vec<NodeIndex> {
    let node = file.arena.get(class).expect("class node");
    file.arena
        .get_class(node)
        .expect("class data")
        .members
        .nodes
        .clone()
}

#[test]
fn test_parse_accessor_pair() {
    let file = parse("declare class A {\n    get x(): number;\n    set x(v: number);\n}\n");
    assert!(file.diagnostics.is_empty(), "{:?}", file.diagnostics);

    let stmts = statements(&file);
    assert_eq!(stmts.len(), 1);
    assert_eq!(kind_of(&file, stmts[0]), syntax_kind_ext::CLASS_DECLARATION);

    let members = class_members(&file, stmts[0]);
    assert_eq!(members.len(), 2);
    assert_eq!(kind_of(&file, members[0]), syntax_kind_ext::GET_ACCESSOR);
    assert_eq!(kind_of(&file, members[1]), syntax_kind_ext::SET_ACCESSOR);

    let getter = file
        .arena
        .get_accessor(file.arena.get(members[0]).unwrap())
        .unwrap();
    assert_eq!(text_of(&file, getter.name), "x");
    assert_eq!(text_of(&file, getter.type_annotation), "number");
    assert!(getter.body.is_none());

    let setter = file
        .arena
        .get_accessor(file.arena.get(members[1]).unwrap())
        .unwrap();
    assert_eq!(setter.parameters.len(), 1);
    let param = file
        .arena
        .get_parameter(file.arena.get(setter.parameters.nodes[0]).unwrap())
        .unwrap();
    assert_eq!(text_of(&file, param.name), "v");
    assert_eq!(text_of(&file, param.type_annotation), "number");
    assert!(setter.type_annotation.is_none());
}

#[test]
fn test_members_are_linked_to_their_class() {
    let file = parse("declare class A {\n    get x(): number;\n}\n");
    let class = statements(&file)[0];
    let getter = class_members(&file, class)[0];
    assert_eq!(file.arena.get_parent(getter), class);
    assert_eq!(file.arena.get_parent(class), file.root);
}

#[test]
fn test_parse_namespace_reexport() {
    let file = parse("export * as utils from \"./utils\";\n");
    assert!(file.diagnostics.is_empty());
    let stmt = statements(&file)[0];
    assert_eq!(kind_of(&file, stmt), syntax_kind_ext::EXPORT_DECLARATION);

    let export = file.arena.get_export_decl(file.arena.get(stmt).unwrap()).unwrap();
    assert!(!export.is_type_only);
    assert_eq!(
        kind_of(&file, export.export_clause),
        syntax_kind_ext::NAMESPACE_EXPORT
    );
    let binding = file
        .arena
        .get_namespace_binding(file.arena.get(export.export_clause).unwrap())
        .unwrap();
    assert_eq!(text_of(&file, binding.name), "utils");
    let specifier = file
        .arena
        .get_literal(file.arena.get(export.module_specifier).unwrap())
        .unwrap();
    assert_eq!(specifier.value, "./utils");
    assert_eq!(specifier.text, "\"./utils\"");
}

#[test]
fn test_plain_export_star_has_no_clause() {
    let file = parse("export * from './a';");
    let stmt = statements(&file)[0];
    let export = file.arena.get_export_decl(file.arena.get(stmt).unwrap()).unwrap();
    assert!(export.export_clause.is_none());
    assert!(export.module_specifier.is_some());
}

#[test]
fn test_verbatim_statement_extents() {
    let source = "interface A {\n  x: string\n}\ntype B = A |\n  C;\ndeclare function f(): void\nexport {};\n";
    let file = parse(source);
    assert!(file.diagnostics.is_empty(), "{:?}", file.diagnostics);

    let stmts = statements(&file);
    assert_eq!(stmts.len(), 4);
    assert_eq!(kind_of(&file, stmts[0]), syntax_kind_ext::VERBATIM_STATEMENT);
    assert_eq!(text_of(&file, stmts[0]), "interface A {\n  x: string\n}");
    assert_eq!(text_of(&file, stmts[1]), "type B = A |\n  C;");
    assert_eq!(text_of(&file, stmts[2]), "declare function f(): void");
    assert_eq!(kind_of(&file, stmts[3]), syntax_kind_ext::EXPORT_DECLARATION);
}

fn type_members_of(file: &ParsedFile, idx: NodeIndex) -> Vec<NodeIndex> {
    let node = file.arena.get(idx).expect("text node");
    file.arena
        .get_text(node)
        .expect("text data")
        .type_members
        .clone()
}

fn accessors_in(file: &ParsedFile, body: NodeIndex) -> Vec<NodeIndex> {
    let node = file.arena.get(body).expect("type body");
    file.arena
        .get_type_members(node)
        .expect("type members")
        .members
        .nodes
        .clone()
}

#[test]
fn test_interface_accessor_signatures() {
    let source = "interface I<T extends { a: 1 }> extends J {\n    get x(): number;\n    set x(v: number), y: string\n    get: T;\n    set(v: T): void;\n}\n";
    let file = parse(source);
    assert!(file.diagnostics.is_empty(), "{:?}", file.diagnostics);

    let stmts = statements(&file);
    assert_eq!(stmts.len(), 1);
    assert_eq!(text_of(&file, stmts[0]), source.trim_end());

    let bodies = type_members_of(&file, stmts[0]);
    assert_eq!(bodies.len(), 1);
    assert_eq!(kind_of(&file, bodies[0]), syntax_kind_ext::INTERFACE_DECLARATION);
    assert_eq!(file.arena.get_parent(bodies[0]), stmts[0]);

    let accessors = accessors_in(&file, bodies[0]);
    assert_eq!(accessors.len(), 2);
    assert_eq!(kind_of(&file, accessors[0]), syntax_kind_ext::GET_ACCESSOR);
    assert_eq!(kind_of(&file, accessors[1]), syntax_kind_ext::SET_ACCESSOR);
    assert_eq!(file.arena.get_parent(accessors[0]), bodies[0]);

    let getter = file
        .arena
        .get_accessor(file.arena.get(accessors[0]).unwrap())
        .unwrap();
    assert_eq!(text_of(&file, getter.type_annotation), "number");
}

#[test]
fn test_type_literal_accessor_signatures() {
    let file = parse("declare class A {\n    p: { get y(): string };\n    q: { y: string };\n}\ntype T = {\n    set z(v: number)\n};\n");
    assert!(file.diagnostics.is_empty(), "{:?}", file.diagnostics);

    let stmts = statements(&file);
    let members = class_members(&file, stmts[0]);
    let property = file
        .arena
        .get_property_decl(file.arena.get(members[0]).unwrap())
        .unwrap();
    let bodies = type_members_of(&file, property.type_annotation);
    assert_eq!(bodies.len(), 1);
    assert_eq!(kind_of(&file, bodies[0]), syntax_kind_ext::TYPE_LITERAL);
    assert_eq!(accessors_in(&file, bodies[0]).len(), 1);

    let plain = file
        .arena
        .get_property_decl(file.arena.get(members[1]).unwrap())
        .unwrap();
    assert!(type_members_of(&file, plain.type_annotation).is_empty());

    let alias_bodies = type_members_of(&file, stmts[1]);
    assert_eq!(alias_bodies.len(), 1);
    assert_eq!(kind_of(&file, alias_bodies[0]), syntax_kind_ext::TYPE_LITERAL);
    assert_eq!(text_of(&file, stmts[1]), "type T = {\n    set z(v: number)\n};");
}

#[test]
fn test_parse_module_declarations() {
    let source = "declare namespace A.B {\n    class C {\n    }\n}\ndeclare module \"m\";\ndeclare global {\n}\n";
    let file = parse(source);
    assert!(file.diagnostics.is_empty(), "{:?}", file.diagnostics);

    let stmts = statements(&file);
    assert_eq!(stmts.len(), 3);
    let modules: Vec<_> = stmts
        .iter()
        .map(|&s| file.arena.get_module(file.arena.get(s).unwrap()).unwrap().clone())
        .collect();

    assert_eq!(kind_of(&file, modules[0].name), syntax_kind_ext::QUALIFIED_NAME);
    assert_eq!(text_of(&file, modules[0].name), "A.B");
    assert_eq!(modules[0].body.as_ref().map(|b| b.len()), Some(1));
    assert_eq!(modules[0].keyword, SyntaxKind::NamespaceKeyword as u16);

    assert_eq!(text_of(&file, modules[1].name), "\"m\"");
    assert!(modules[1].body.is_none());

    assert_eq!(modules[2].keyword, SyntaxKind::GlobalKeyword as u16);
    assert_eq!(text_of(&file, modules[2].name), "global");
}

#[test]
fn test_parse_class_member_forms() {
    let source = "declare class A {\n    readonly a?: string;\n    b!: number\n    static c = 1;\n    #d;\n    [\"e\"]: any;\n    [key: string]: any;\n    m(): void;\n}\n";
    let file = parse(source);
    assert!(file.diagnostics.is_empty(), "{:?}", file.diagnostics);

    let members = class_members(&file, statements(&file)[0]);
    let kinds: Vec<_> = members.iter().map(|&m| kind_of(&file, m)).collect();
    assert_eq!(
        kinds,
        vec![
            syntax_kind_ext::PROPERTY_DECLARATION,
            syntax_kind_ext::PROPERTY_DECLARATION,
            syntax_kind_ext::PROPERTY_DECLARATION,
            syntax_kind_ext::PROPERTY_DECLARATION,
            syntax_kind_ext::PROPERTY_DECLARATION,
            syntax_kind_ext::VERBATIM_MEMBER,
            syntax_kind_ext::VERBATIM_MEMBER,
        ]
    );

    let prop = |idx: NodeIndex| {
        file.arena
            .get_property_decl(file.arena.get(idx).unwrap())
            .unwrap()
            .clone()
    };
    let a = prop(members[0]);
    assert!(a.question_token);
    assert_eq!(a.modifiers.as_ref().map(|m| m.len()), Some(1));
    let b = prop(members[1]);
    assert!(b.exclamation_token);
    assert_eq!(text_of(&file, b.type_annotation), "number");
    let c = prop(members[2]);
    assert_eq!(text_of(&file, c.initializer), "1");
    let d = prop(members[3]);
    assert_eq!(kind_of(&file, d.name), SyntaxKind::PrivateIdentifier as u16);
    assert_eq!(text_of(&file, d.name), "#d");
    let e = prop(members[4]);
    assert_eq!(kind_of(&file, e.name), syntax_kind_ext::COMPUTED_PROPERTY_NAME);
    assert_eq!(text_of(&file, e.name), "[\"e\"]");

    assert_eq!(text_of(&file, members[5]), "[key: string]: any;");
    assert_eq!(text_of(&file, members[6]), "m(): void;");
}

#[test]
fn test_modifier_keyword_used_as_member_name() {
    let file = parse("declare class A {\n    static: number;\n    readonly get: string;\n}\n");
    assert!(file.diagnostics.is_empty(), "{:?}", file.diagnostics);
    let members = class_members(&file, statements(&file)[0]);
    assert_eq!(members.len(), 2);
    let first = file
        .arena
        .get_property_decl(file.arena.get(members[0]).unwrap())
        .unwrap();
    assert!(first.modifiers.is_none());
    assert_eq!(text_of(&file, first.name), "static");
    assert_eq!(kind_of(&file, members[1]), syntax_kind_ext::PROPERTY_DECLARATION);
}

#[test]
fn test_decorators_and_accessor_bodies() {
    let source = "@sealed\nexport class A {\n    @dec() get x(): number { return 1; }\n}\n";
    let file = parse(source);
    assert!(file.diagnostics.is_empty(), "{:?}", file.diagnostics);

    let class_idx = statements(&file)[0];
    let class = file.arena.get_class(file.arena.get(class_idx).unwrap()).unwrap();
    let decorators = class.decorators.as_ref().expect("class decorators");
    assert_eq!(text_of(&file, decorators.nodes[0]), "sealed");

    let getter_idx = class.members.nodes[0];
    let getter = file
        .arena
        .get_accessor(file.arena.get(getter_idx).unwrap())
        .unwrap();
    let accessor_decorators = getter.decorators.as_ref().expect("accessor decorators");
    assert_eq!(text_of(&file, accessor_decorators.nodes[0]), "dec()");
    assert_eq!(text_of(&file, getter.type_annotation), "number");
    assert_eq!(text_of(&file, getter.body), "{ return 1; }");
}

#[test]
fn test_setter_with_this_parameter() {
    let file = parse("declare class A {\n    set x(this: A, value: string);\n}\n");
    let members = class_members(&file, statements(&file)[0]);
    let setter = file
        .arena
        .get_accessor(file.arena.get(members[0]).unwrap())
        .unwrap();
    assert_eq!(setter.parameters.len(), 2);
}

#[test]
fn test_parse_import_forms() {
    let source = "import type { A, type B as C } from \"./a\";\nimport D, * as E from 'e';\nimport 'side-effect';\nimport F = require('f');\n";
    let file = parse(source);
    assert!(file.diagnostics.is_empty(), "{:?}", file.diagnostics);

    let stmts = statements(&file);
    assert_eq!(stmts.len(), 4);
    assert_eq!(kind_of(&file, stmts[3]), syntax_kind_ext::VERBATIM_STATEMENT);

    let first = file.arena.get_import_decl(file.arena.get(stmts[0]).unwrap()).unwrap();
    let clause = file
        .arena
        .get_import_clause(file.arena.get(first.import_clause).unwrap())
        .unwrap();
    assert!(clause.is_type_only);
    let named = file
        .arena
        .get_named_bindings(file.arena.get(clause.named_bindings).unwrap())
        .unwrap();
    assert_eq!(named.elements.len(), 2);
    let second = file
        .arena
        .get_specifier(file.arena.get(named.elements.nodes[1]).unwrap())
        .unwrap();
    assert!(second.is_type_only);
    assert_eq!(text_of(&file, second.property_name), "B");
    assert_eq!(text_of(&file, second.name), "C");

    let default_and_ns = file.arena.get_import_decl(file.arena.get(stmts[1]).unwrap()).unwrap();
    let clause = file
        .arena
        .get_import_clause(file.arena.get(default_and_ns.import_clause).unwrap())
        .unwrap();
    assert_eq!(text_of(&file, clause.name), "D");
    assert_eq!(
        kind_of(&file, clause.named_bindings),
        syntax_kind_ext::NAMESPACE_IMPORT
    );

    let side_effect = file.arena.get_import_decl(file.arena.get(stmts[2]).unwrap()).unwrap();
    assert!(side_effect.import_clause.is_none());
}

#[test]
fn test_missing_close_brace_is_reported() {
    let file = parse("declare class A {\n    get x(): number;\n");
    assert!(file.has_errors());
    assert!(
        file.diagnostics
            .iter()
            .any(|d| d.code == diagnostic_codes::EXPECTED && d.message_text == "'}' expected.")
    );
}

#[test]
fn test_unterminated_comment_is_reported() {
    let file = parse("declare const a: string; /* oops");
    assert!(
        file.diagnostics
            .iter()
            .any(|d| d.code == diagnostic_codes::ASTERISK_SLASH_EXPECTED)
    );
}

#[test]
fn test_stray_close_brace_is_reported() {
    let file = parse("declare const a: string;\n}\ndeclare const b: string;\n");
    assert_eq!(statements(&file).len(), 2);
    assert_eq!(file.diagnostics.len(), 1);
    assert_eq!(
        file.diagnostics[0].code,
        diagnostic_codes::DECLARATION_OR_STATEMENT_EXPECTED
    );
}

#[test]
fn test_missing_property_type_is_reported() {
    let file = parse("declare class A {\n    x: ;\n}\n");
    assert!(
        file.diagnostics
            .iter()
            .any(|d| d.code == diagnostic_codes::TYPE_EXPECTED)
    );
}

#[test]
fn test_deep_nesting_is_reported_not_overflowed() {
    let depth = 300;
    let mut source = String::new();
    for _ in 0..depth {
        source.push_str("namespace N {\n");
    }
    for _ in 0..depth {
        source.push_str("}\n");
    }
    let file = parse(&source);
    assert!(
        file.diagnostics
            .iter()
            .any(|d| d.code == diagnostic_codes::NESTING_TOO_DEEP)
    );
}

#[test]
fn test_identifier_set_covers_file() {
    let file = parse("export * as utils from './utils';\ndeclare const utils_1: number;\n");
    let sf = file.arena.get_source_file_at(file.root).unwrap();
    assert!(sf.identifiers.contains("utils"));
    assert!(sf.identifiers.contains("utils_1"));
}
