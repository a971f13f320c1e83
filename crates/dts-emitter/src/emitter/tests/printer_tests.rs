use super::*;
use dts_parser::parse_file;

fn print_with(source: &str, new_line: NewLineKind) -> String {
    let file = parse_file("test.d.ts", source);
    assert!(file.diagnostics.is_empty(), "{:?}", file.diagnostics);
    print_parsed_file(&file, PrinterOptions { new_line })
}

fn print(source: &str) -> String {
    print_with(source, NewLineKind::LineFeed)
}

#[test]
fn test_print_imports_and_exports() {
    let source = "import   { A, type B as C } from './a';\nimport D, * as E from \"e\";\nimport \"side-effect\";\nimport type F from \"f\";\nexport {x as y};\nexport type * from \"t\";\nexport * from \"u\" with { type: \"json\" };\nexport {};\n";
    let expected = "import { A, type B as C } from './a';\nimport D, * as E from \"e\";\nimport \"side-effect\";\nimport type F from \"f\";\nexport { x as y };\nexport type * from \"t\";\nexport * from \"u\" with { type: \"json\" };\nexport {};\n";
    assert_eq!(print(source), expected);
}

#[test]
fn test_print_module_declarations() {
    let source = "declare namespace   A.B {\n    class C {\n    }\n}\ndeclare module \"m\";\ndeclare global {\n}\ndeclare module \"empty\" {}\n";
    let expected = "declare namespace A.B {\n    class C {\n    }\n}\ndeclare module \"m\";\ndeclare global { }\ndeclare module \"empty\" { }\n";
    assert_eq!(print(source), expected);
}

#[test]
fn test_print_class_members() {
    let source = "export declare abstract class Base<T> extends Array<T> implements I {\n    protected   readonly a?: string;\n    b!: number\n    static c = 1;\n    #d;\n    [\"e\"]: any;\n    [key: string]: any;\n    m<U>(u: U): void;\n}\n";
    let expected = "export declare abstract class Base<T> extends Array<T> implements I {\n    protected readonly a?: string;\n    b!: number;\n    static c = 1;\n    #d;\n    [\"e\"]: any;\n    [key: string]: any;\n    m<U>(u: U): void;\n}\n";
    assert_eq!(print(source), expected);
}

#[test]
fn test_print_accessors_and_decorators_unchanged() {
    let source = "@sealed\nexport class A {\n    @dec() get x(): number { return 1; }\n    set x(...values: number[]);\n}\n";
    let expected = "@sealed\nexport class A {\n    @dec()\n    get x(): number { return 1; }\n    set x(...values: number[]);\n}\n";
    assert_eq!(print(source), expected);
}

#[test]
fn test_verbatim_statements_are_reindented() {
    let source = "declare namespace N {\n        interface I {\n            x: string;\n        }\n}\n";
    let expected = "declare namespace N {\n    interface I {\n        x: string;\n    }\n}\n";
    assert_eq!(print(source), expected);
}

#[test]
fn test_multiline_member_type_keeps_relative_indentation() {
    let source = "declare class A {\n    a: {\n        b: string;\n    };\n}\n";
    assert_eq!(print(source), source);
}

#[test]
fn test_comments_are_preserved() {
    let source = "/// <reference types=\"node\" />\n/**\n * Doc.\n */\ndeclare class A { // open\n    /** Field. */\n    a: string; // trailing\n    // before close\n}\n// end of file\n";
    assert_eq!(print(source), source);
}

#[test]
fn test_comment_inside_empty_module_forces_block() {
    let source = "declare module \"m\" {\n    // nothing here\n}\n";
    assert_eq!(print(source), source);
}

#[test]
fn test_crlf_output_normalizes_line_breaks() {
    let source = "/**\n * Doc.\n */\ninterface I {\r\n    x: string;\n}\n";
    let output = print_with(source, NewLineKind::CarriageReturnLineFeed);
    assert_eq!(
        output,
        "/**\r\n * Doc.\r\n */\r\ninterface I {\r\n    x: string;\r\n}\r\n"
    );
    assert!(!output.replace("\r\n", "").contains('\n'));
}

#[test]
fn test_default_options_use_crlf() {
    let file = parse_file("test.d.ts", "export {};\n");
    let output = print_parsed_file(&file, PrinterOptions::default());
    assert_eq!(output, "export {};\r\n");
}

#[test]
fn test_empty_file_prints_nothing() {
    assert_eq!(print(""), "");
}

#[test]
fn test_synthesized_nodes_have_no_source_comments() {
    let mut arena = NodeArena::new();
    let name = arena.create_identifier("ns_1");
    let printer = Printer::new(&arena, "", PrinterOptions::default());
    assert_eq!(printer.comment_span(name), None);
    assert_eq!(printer.source_column(name), 0);
}
