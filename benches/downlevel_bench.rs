//! Parse + rewrite + print benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use downlevel_dts::{NewLineKind, PrinterOptions, parse_file, print_parsed_file, transform_file};

const SMALL_SOURCE: &str = r#"import { Base } from "./base";
export * as helpers from "./helpers";

/**
 * A widget.
 */
export declare class Widget extends Base {
    /** Current size. */
    get size(): number;
    set size(value: number);
    get id(): string;
    set label(value: string);
    render(): void;
}
"#;

/// Generate a declaration file with `classes` classes of `accessors`
/// accessor pairs each, wrapped in a namespace.
fn generate_source(classes: usize, accessors: usize) -> String {
    let mut source = String::new();
    for c in 0..classes {
        source.push_str(&format!("export * as reexport{c} from \"./module{c}\";\n"));
    }
    source.push_str("export declare namespace Generated {\n");
    for c in 0..classes {
        source.push_str(&format!("    class Class{c} {{\n"));
        for a in 0..accessors {
            source.push_str(&format!("        /** Accessor {a}. */\n"));
            source.push_str(&format!("        get value{a}(): Map<string, number>;\n"));
            if a % 2 == 0 {
                source.push_str(&format!("        set value{a}(v: Map<string, number>);\n"));
            }
        }
        source.push_str("        method(): void;\n");
        source.push_str("    }\n");
    }
    source.push_str("}\n");
    source
}

fn downlevel(source: &str) -> String {
    let parsed = parse_file("bench.d.ts", source);
    let rewritten = transform_file(parsed).expect("bench source rewrites cleanly");
    print_parsed_file(
        &rewritten,
        PrinterOptions {
            new_line: NewLineKind::LineFeed,
        },
    )
}

fn bench_downlevel_small(c: &mut Criterion) {
    c.bench_function("downlevel_small", |b| {
        b.iter(|| black_box(downlevel(black_box(SMALL_SOURCE))))
    });
}

fn bench_parse_only(c: &mut Criterion) {
    let source = generate_source(20, 10);
    c.bench_function("parse_only", |b| {
        b.iter(|| black_box(parse_file("bench.d.ts", source.as_str())))
    });
}

fn bench_downlevel_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("downlevel_throughput");

    for (classes, accessors) in [(10, 5), (50, 10), (200, 10)] {
        let source = generate_source(classes, accessors);
        let label = format!("{classes}cls_{accessors}acc");

        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("downlevel", &label), &source, |b, source| {
            b.iter(|| black_box(downlevel(source)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_downlevel_small,
    bench_parse_only,
    bench_downlevel_throughput,
);

criterion_main!(benches);
