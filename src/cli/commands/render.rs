//! Render command implementation
//!
//! Prints the export block for a set of exports without touching any file.

use super::{parse_module_type, report_error, EXIT_OK};
use crate::core::exporter::exporter_for;
use crate::domain::{ExportSpec, ModuleFormat, Result};
use clap::Args;

/// Arguments for the render command
#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// Name of the default export
    #[arg(long)]
    pub default_export: Option<String>,

    /// Named export (repeatable)
    #[arg(short = 'e', long = "export", value_name = "NAME")]
    pub exports: Vec<String>,

    /// Module type (es2015, cjs, amd, umd, system)
    #[arg(short, long)]
    pub module_type: Option<String>,
}

impl RenderArgs {
    /// Execute the render command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let format = parse_module_type(self.module_type.as_deref());

        if format.requires_rewrite() {
            eprintln!(
                "⚠️  {format} output is produced by the rewriter, showing the {} block it receives",
                format.template_format()
            );
        }

        match self.render(format) {
            Ok(block) => {
                println!("{block}");
                Ok(EXIT_OK)
            }
            Err(e) => Ok(report_error("Failed to render exports", &e)),
        }
    }

    fn render(&self, format: ModuleFormat) -> Result<String> {
        let spec = ExportSpec::new(self.default_export.clone(), self.exports.clone())?;
        exporter_for(format).combined_export_block(&spec)
    }
}
