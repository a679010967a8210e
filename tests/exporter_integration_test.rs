//! Integration tests for export rendering and batch processing

use globex::core::batch::{process, BatchProcessor, ExportJobs};
use globex::core::exporter::{exporter_for, select_exporter, Exporter};
use globex::domain::{ExportSpec, FileName, GlobexError, ModuleFormat};
use std::collections::BTreeMap;
use test_case::test_case;

fn name(s: &str) -> FileName {
    FileName::new(s).unwrap()
}

fn spec(default_export: Option<&str>, exports: &[&str]) -> ExportSpec {
    ExportSpec::new(
        default_export.map(str::to_string),
        exports.iter().map(|s| s.to_string()).collect(),
    )
    .unwrap()
}

fn run(source: &str, spec: ExportSpec, format: ModuleFormat) -> String {
    let foo = name("foo.js");
    let jobs = ExportJobs::single(foo.clone(), spec);
    let inputs = BTreeMap::from([(foo.clone(), source.to_string())]);
    process(&inputs, &jobs, format).unwrap().remove(&foo).unwrap()
}

#[test_case(ModuleFormat::Es2015; "es2015")]
#[test_case(ModuleFormat::CommonJs; "commonjs")]
fn test_block_ends_with_single_semicolon(format: ModuleFormat) {
    let exporter = exporter_for(format);
    for spec in [
        spec(Some("Foo"), &[]),
        spec(None, &["a", "b"]),
        spec(Some("Foo"), &["a"]),
    ] {
        let block = exporter.combined_export_block(&spec).unwrap();
        assert!(block.ends_with(';'));
        assert!(!block.ends_with(";;"));
    }
}

#[test_case(ModuleFormat::Es2015; "es2015")]
#[test_case(ModuleFormat::CommonJs; "commonjs")]
fn test_default_only_block(format: ModuleFormat) {
    let exporter = exporter_for(format);
    let spec = spec(Some("Foo"), &[]);
    let expected = format!("{};", exporter.default_export_statement(&spec).unwrap());
    assert_eq!(exporter.combined_export_block(&spec).unwrap(), expected);
}

#[test]
fn test_named_only_block() {
    let spec = spec(None, &["a", "b", "c"]);
    assert_eq!(
        exporter_for(ModuleFormat::Es2015)
            .combined_export_block(&spec)
            .unwrap(),
        "export a;\nexport b;\nexport c;"
    );
    assert_eq!(
        exporter_for(ModuleFormat::CommonJs)
            .combined_export_block(&spec)
            .unwrap(),
        "exports.a = a;\nexports.b = b;\nexports.c = c;"
    );
}

#[test]
fn test_trailing_semicolon_is_not_doubled() {
    let with = run("var i = 0;", spec(Some("i"), &[]), ModuleFormat::Es2015);
    let without = run("var i = 0", spec(Some("i"), &[]), ModuleFormat::Es2015);
    assert_eq!(with, without);
    assert_eq!(with, "var i = 0;\nexport default i;");
}

#[test]
fn test_trailing_whitespace_after_semicolon() {
    let output = run("var i = 0;  \n", spec(Some("i"), &[]), ModuleFormat::Es2015);
    assert_eq!(output, "var i = 0;  \n\nexport default i;");
}

#[test]
fn test_empty_spec_rejected() {
    let result = ExportSpec::new(None, vec![]);
    match result {
        Err(GlobexError::Configuration(msg)) => {
            assert_eq!(msg, "Must provide either default or named exports, or both.")
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn test_blank_default_counts_as_absent() {
    assert!(ExportSpec::new(Some("  ".to_string()), vec![]).is_err());
}

#[test]
fn test_es_default_export() {
    assert_eq!(
        run("function Foo() {}", spec(Some("Foo"), &[]), ModuleFormat::Es2015),
        "function Foo() {};\nexport default Foo;"
    );
}

#[test]
fn test_es_named_export() {
    assert_eq!(
        run("function Foo() {}", spec(None, &["Foo"]), ModuleFormat::Es2015),
        "function Foo() {};\nexport Foo;"
    );
}

#[test]
fn test_es_default_and_named() {
    assert_eq!(
        run(
            "function Foo() {};\nvar bar = {};",
            spec(Some("Foo"), &["bar"]),
            ModuleFormat::Es2015
        ),
        "function Foo() {};\nvar bar = {};\nexport bar;\nexport default Foo;"
    );
}

#[test]
fn test_commonjs_default_and_named() {
    let output = run(
        "function Foo() {};\nvar bar = {};",
        spec(Some("Foo"), &["bar"]),
        ModuleFormat::CommonJs,
    );

    assert!(output.contains("exports.bar = bar"));
    assert!(output.contains("exports['default'] = Foo"));
    assert!(output.contains("Object.defineProperty(exports, '__esModule', { value: true })"));
    assert!(output.ends_with("exports['default'] = Foo;"));
}

#[test]
fn test_commonjs_named_only_has_no_interop_flag() {
    let output = run("var bar = {}", spec(None, &["bar"]), ModuleFormat::CommonJs);
    assert_eq!(output, "var bar = {};\nexports.bar = bar;");
}

#[test]
fn test_missing_input_is_skipped() {
    let jobs = ExportJobs::single(name("foo.js"), spec(Some("Foo"), &[]));
    let outputs = process(&BTreeMap::new(), &jobs, ModuleFormat::Es2015).unwrap();
    assert!(outputs.is_empty());
}

#[test]
fn test_batch_preserves_directories() {
    let jobs = ExportJobs::batch([
        (name("foo.js"), spec(Some("Foo"), &[])),
        (name("lib/nested/bar.js"), spec(None, &["bar"])),
        (name("missing.js"), spec(Some("Missing"), &[])),
    ])
    .unwrap();
    let inputs = BTreeMap::from([
        (name("foo.js"), "var Foo".to_string()),
        (name("lib/nested/bar.js"), "var bar".to_string()),
        (name("unrelated.js"), "var x".to_string()),
    ]);

    let result = BatchProcessor::new(ModuleFormat::Es2015)
        .process(&inputs, &jobs)
        .unwrap();

    assert_eq!(result.processed(), 2);
    assert_eq!(result.outputs[&name("lib/nested/bar.js")], "var bar;\nexport bar;");
    assert_eq!(result.skipped, vec![name("missing.js")]);
    assert!(!result.outputs.contains_key(&name("unrelated.js")));
}

#[test_case(None, ModuleFormat::Es2015; "absent")]
#[test_case(Some("cjs"), ModuleFormat::CommonJs; "cjs")]
#[test_case(Some("es2015"), ModuleFormat::Es2015; "es2015")]
#[test_case(Some("iife"), ModuleFormat::Es2015; "unknown falls back")]
#[test_case(Some("amd"), ModuleFormat::Es2015; "delegated uses es template")]
fn test_select_exporter(identifier: Option<&str>, expected: ModuleFormat) {
    assert_eq!(select_exporter(identifier).format(), expected);
}

struct BrokenExporter;

impl Exporter for BrokenExporter {
    fn format(&self) -> ModuleFormat {
        ModuleFormat::Es2015
    }

    fn named_export_statements(&self, _spec: &ExportSpec) -> Vec<String> {
        Vec::new()
    }

    fn default_export_statement(&self, _spec: &ExportSpec) -> Option<String> {
        None
    }
}

#[test]
fn test_contract_violation_aborts_batch() {
    let jobs = ExportJobs::single(name("foo.js"), spec(None, &["bar"]));
    let inputs = BTreeMap::from([(name("foo.js"), "var bar".to_string())]);

    let result = BatchProcessor::with_exporter(std::sync::Arc::new(BrokenExporter))
        .process(&inputs, &jobs);
    assert!(matches!(result, Err(GlobexError::Contract(_))));
}
