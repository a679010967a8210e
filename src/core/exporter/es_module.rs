//! ES2015 export statements

use super::Exporter;
use crate::domain::{ExportSpec, ModuleFormat};

/// Renders `export name` and `export default name`
#[derive(Debug, Clone, Copy, Default)]
pub struct EsModuleExporter;

impl EsModuleExporter {
    /// Create a new ES module exporter
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for EsModuleExporter {
    fn format(&self) -> ModuleFormat {
        ModuleFormat::Es2015
    }

    fn named_export_statements(&self, spec: &ExportSpec) -> Vec<String> {
        spec.named_exports()
            .iter()
            .map(|name| format!("export {name}"))
            .collect()
    }

    fn default_export_statement(&self, spec: &ExportSpec) -> Option<String> {
        spec.default_export()
            .map(|name| format!("export default {name}"))
    }
}
