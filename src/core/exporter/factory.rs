//! Exporter factory
//!
//! This module provides factory functions to create exporters based on the
//! configured module type.

use super::{CommonJsExporter, EsModuleExporter, Exporter};
use crate::domain::ModuleFormat;
use std::sync::Arc;

/// Create the exporter whose template renders `format`
///
/// Delegated formats (AMD, UMD, SystemJS) are rendered with the ES module
/// template; the rewriter turns that into the requested wrapper later.
pub fn exporter_for(format: ModuleFormat) -> Arc<dyn Exporter> {
    match format.template_format() {
        ModuleFormat::CommonJs => Arc::new(CommonJsExporter::new()),
        _ => Arc::new(EsModuleExporter::new()),
    }
}

/// Create an exporter from a module type identifier
///
/// Absent or unrecognized identifiers select the ES module exporter.
///
/// # Examples
///
/// ```
/// use globex::core::exporter::select_exporter;
/// use globex::domain::ModuleFormat;
///
/// assert_eq!(select_exporter(Some("cjs")).format(), ModuleFormat::CommonJs);
/// assert_eq!(select_exporter(None).format(), ModuleFormat::Es2015);
/// ```
pub fn select_exporter(identifier: Option<&str>) -> Arc<dyn Exporter> {
    exporter_for(ModuleFormat::from_identifier(identifier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Some("es2015"), ModuleFormat::Es2015 ; "es2015 identifier")]
    #[test_case(None, ModuleFormat::Es2015 ; "no identifier")]
    #[test_case(Some("cjs"), ModuleFormat::CommonJs ; "cjs identifier")]
    #[test_case(Some("unknown"), ModuleFormat::Es2015 ; "unknown identifier")]
    #[test_case(Some("amd"), ModuleFormat::Es2015 ; "delegated identifier")]
    fn test_select_exporter(identifier: Option<&str>, expected: ModuleFormat) {
        assert_eq!(select_exporter(identifier).format(), expected);
    }

    #[test]
    fn test_exporter_for_native_formats() {
        assert_eq!(exporter_for(ModuleFormat::Es2015).format(), ModuleFormat::Es2015);
        assert_eq!(exporter_for(ModuleFormat::CommonJs).format(), ModuleFormat::CommonJs);
        assert_eq!(exporter_for(ModuleFormat::Umd).format(), ModuleFormat::Es2015);
    }
}
