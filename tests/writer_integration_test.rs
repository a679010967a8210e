//! Integration tests for the export writer against real directories

use globex::adapters::rewriter::{CommandRewriter, SourceRewriter};
use globex::adapters::tree::{FileTree, LocalFileTree};
use globex::config::RewriterConfig;
use globex::core::batch::ExportJobs;
use globex::core::writer::{ExportWriter, WriterOptions};
use globex::domain::{ExportSpec, FileName, GlobexError, ModuleFormat};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn name(s: &str) -> FileName {
    FileName::new(s).unwrap()
}

fn write_file(root: &Path, file: &str, contents: &str) {
    let path = root.join(file);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn local(root: &Path) -> Arc<dyn FileTree> {
    Arc::new(LocalFileTree::new(root))
}

fn jobs() -> ExportJobs {
    ExportJobs::batch([
        (name("foo.js"), ExportSpec::default_only("Foo").unwrap()),
        (
            name("lib/nested/bar.js"),
            ExportSpec::new(Some("bar".to_string()), vec!["baz".to_string()]).unwrap(),
        ),
        (name("missing.js"), ExportSpec::named_only(["missing"]).unwrap()),
    ])
    .unwrap()
}

fn input_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "foo.js", "function Foo() {}\n");
    write_file(dir.path(), "lib/nested/bar.js", "var bar = {}, baz = 1;");
    write_file(dir.path(), "untouched.js", "var untouched;");
    dir
}

#[tokio::test]
async fn test_build_es_module_tree() {
    let input = input_dir();
    let output = TempDir::new().unwrap();

    let writer = ExportWriter::new(
        vec![local(input.path())],
        local(output.path()),
        jobs(),
        WriterOptions::default(),
    )
    .unwrap();

    let summary = writer.build().await.unwrap();
    assert_eq!(summary.processed, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.written, 2);
    assert_eq!(summary.total_jobs(), 3);

    assert_eq!(
        fs::read_to_string(output.path().join("foo.js")).unwrap(),
        "function Foo() {}\n;\nexport default Foo;"
    );
    assert_eq!(
        fs::read_to_string(output.path().join("lib/nested/bar.js")).unwrap(),
        "var bar = {}, baz = 1;\nexport baz;\nexport default bar;"
    );
    assert!(!output.path().join("missing.js").exists());
    assert!(!output.path().join("untouched.js").exists());
}

#[tokio::test]
async fn test_build_commonjs_tree() {
    let input = input_dir();
    let output = TempDir::new().unwrap();

    let writer = ExportWriter::new(
        vec![local(input.path())],
        local(output.path()),
        jobs(),
        WriterOptions::new(ModuleFormat::CommonJs),
    )
    .unwrap();
    writer.build().await.unwrap();

    assert_eq!(
        fs::read_to_string(output.path().join("lib/nested/bar.js")).unwrap(),
        "var bar = {}, baz = 1;\n\
         exports.baz = baz;\n\
         Object.defineProperty(exports, '__esModule', { value: true });\n\
         exports['default'] = bar;"
    );
}

#[tokio::test]
async fn test_dry_run_leaves_output_empty() {
    let input = input_dir();
    let output = TempDir::new().unwrap();

    let writer = ExportWriter::new(
        vec![local(input.path())],
        local(output.path()),
        jobs(),
        WriterOptions::default().with_dry_run(true),
    )
    .unwrap();

    let summary = writer.build().await.unwrap();
    assert!(summary.dry_run);
    assert_eq!(summary.processed, 2);
    assert_eq!(summary.written, 0);
    assert_eq!(fs::read_dir(output.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_more_than_one_input_tree() {
    let input = input_dir();
    let other = input_dir();
    let output = TempDir::new().unwrap();

    let result = ExportWriter::new(
        vec![local(input.path()), local(other.path())],
        local(output.path()),
        jobs(),
        WriterOptions::default(),
    );
    assert!(matches!(result, Err(GlobexError::Shape(_))));
}

#[cfg(unix)]
fn shell_rewriter(script: &str) -> Arc<dyn SourceRewriter> {
    Arc::new(CommandRewriter::new(&RewriterConfig {
        command: "sh".to_string(),
        args: vec!["-c".to_string(), script.to_string()],
        timeout_secs: 10,
        options: toml::Table::new(),
    }))
}

#[cfg(unix)]
#[tokio::test]
async fn test_delegated_format_goes_through_rewriter() {
    let input = input_dir();
    let output = TempDir::new().unwrap();

    let rewriter = shell_rewriter("printf 'define(function () {\\n'; cat; printf '\\n});'");
    let writer = ExportWriter::new(
        vec![local(input.path())],
        local(output.path()),
        jobs(),
        WriterOptions::new(ModuleFormat::Amd).with_rewriter(rewriter),
    )
    .unwrap();

    let summary = writer.build().await.unwrap();
    assert_eq!(summary.rewritten, 2);
    assert_eq!(
        fs::read_to_string(output.path().join("foo.js")).unwrap(),
        "define(function () {\nfunction Foo() {}\n;\nexport default Foo;\n});"
    );
}

#[cfg(unix)]
#[tokio::test]
async fn test_rewriter_failure_stops_build() {
    let input = input_dir();
    let output = TempDir::new().unwrap();

    let writer = ExportWriter::new(
        vec![local(input.path())],
        local(output.path()),
        jobs(),
        WriterOptions::new(ModuleFormat::SystemJs)
            .with_rewriter(shell_rewriter("cat > /dev/null; echo 'unsupported' >&2; exit 1")),
    )
    .unwrap();

    let err = writer.build().await.unwrap_err();
    assert!(matches!(err, GlobexError::Rewrite(_)));
    assert!(!output.path().join("foo.js").exists());
}
