//! CommonJS export statements

use super::Exporter;
use crate::domain::{ExportSpec, ModuleFormat};

/// Marks the module as transpiled ES so default-import interop picks up
/// `exports['default']`
const ES_MODULE_INTEROP_FLAG: &str = "Object.defineProperty(exports, '__esModule', { value: true })";

/// Renders `exports.name = name` and the interop-flagged default export
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonJsExporter;

impl CommonJsExporter {
    /// Create a new CommonJS exporter
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for CommonJsExporter {
    fn format(&self) -> ModuleFormat {
        ModuleFormat::CommonJs
    }

    fn named_export_statements(&self, spec: &ExportSpec) -> Vec<String> {
        spec.named_exports()
            .iter()
            .map(|name| format!("exports.{name} = {name}"))
            .collect()
    }

    // The interop flag only goes out with a default export.
    fn default_export_statement(&self, spec: &ExportSpec) -> Option<String> {
        spec.default_export().map(|name| {
            format!("{ES_MODULE_INTEROP_FLAG};\nexports['default'] = {name}")
        })
    }
}
