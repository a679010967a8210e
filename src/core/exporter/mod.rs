//! Export statement generation
//!
//! An [`Exporter`] renders an [`ExportSpec`] into the export statements of
//! one module format. Variants only decide how a single named or default
//! export is spelled; joining, ordering and terminating the statements is
//! shared by every variant.
//!
//! - **ES2015**: `export name` / `export default name`
//! - **CommonJS**: `exports.name = name` / interop flag plus `exports['default'] = name`

pub mod commonjs;
pub mod es_module;
pub mod factory;

pub use commonjs::CommonJsExporter;
pub use es_module::EsModuleExporter;
pub use factory::{exporter_for, select_exporter};

use crate::core::batch::merge::append_export_block;
use crate::domain::{ExportSpec, GlobexError, ModuleFormat, Result};

/// Separator placed between export statements
pub const STATEMENT_SEPARATOR: &str = ";\n";

/// Trait for module format renderers
pub trait Exporter: Send + Sync {
    /// Module format this exporter renders
    fn format(&self) -> ModuleFormat;

    /// One statement per named export, in declaration order
    fn named_export_statements(&self, spec: &ExportSpec) -> Vec<String>;

    /// Statement for the default export, `None` when the spec has none
    fn default_export_statement(&self, spec: &ExportSpec) -> Option<String>;

    /// Full export block: named statements first, then the default
    /// statement, joined by `";\n"` and terminated by `";"`
    ///
    /// # Errors
    ///
    /// Returns [`GlobexError::Contract`] when the named renderer does not
    /// return exactly one statement per named export.
    fn combined_export_block(&self, spec: &ExportSpec) -> Result<String> {
        let mut statements = self.named_export_statements(spec);

        if statements.len() != spec.named_exports().len() {
            return Err(GlobexError::Contract(format!(
                "{} exporter rendered {} named export statements for {} named exports",
                self.format(),
                statements.len(),
                spec.named_exports().len()
            )));
        }

        if let Some(default_statement) = self.default_export_statement(spec) {
            statements.push(default_statement);
        }

        Ok(format!("{};", statements.join(STATEMENT_SEPARATOR)))
    }

    /// Appends the export block for `spec` to `source_code`
    fn process_source_code(&self, source_code: &str, spec: &ExportSpec) -> Result<String> {
        let block = self.combined_export_block(spec)?;
        Ok(append_export_block(source_code, &block))
    }
}
