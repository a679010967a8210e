//! Rewriter backed by an external command
//!
//! The command receives the source on stdin and must print the rewritten
//! source on stdout. The target format and the passthrough options are
//! handed over through the environment:
//!
//! - `GLOBEX_MODULE_FORMAT` - target format identifier (`amd`, `umd`, ...)
//! - `GLOBEX_REWRITE_OPTIONS` - passthrough options as a JSON object
//!
//! `{format}` in any argument is replaced with the format identifier.

use super::SourceRewriter;
use crate::config::schema::RewriterConfig;
use crate::domain::{ModuleFormat, Result, RewriteError};
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Environment variable carrying the target format
pub const FORMAT_ENV: &str = "GLOBEX_MODULE_FORMAT";

/// Environment variable carrying the passthrough options
pub const OPTIONS_ENV: &str = "GLOBEX_REWRITE_OPTIONS";

const FORMAT_PLACEHOLDER: &str = "{format}";

/// Runs an external command per file
#[derive(Debug, Clone)]
pub struct CommandRewriter {
    command: String,
    args: Vec<String>,
    timeout: Duration,
    options: toml::Table,
}

impl CommandRewriter {
    /// Create a rewriter from its configuration
    pub fn new(config: &RewriterConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            options: config.options.clone(),
        }
    }

    fn args_for(&self, format: ModuleFormat) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.replace(FORMAT_PLACEHOLDER, format.as_str()))
            .collect()
    }

    async fn run(&self, source: &str, format: ModuleFormat) -> Result<String> {
        let options = serde_json::to_string(&self.options)?;

        let mut child = Command::new(&self.command)
            .args(self.args_for(format))
            .env(FORMAT_ENV, format.as_str())
            .env(OPTIONS_ENV, options)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| RewriteError::SpawnFailed(format!("{}: {}", self.command, e)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| RewriteError::SpawnFailed("stdin not captured".to_string()))?;

        // Feed stdin while draining stdout so large files cannot deadlock.
        let feed = async move {
            let written = stdin.write_all(source.as_bytes()).await;
            drop(stdin);
            written
        };
        let (written, output) = tokio::join!(feed, child.wait_with_output());

        let output = output
            .map_err(|e| RewriteError::SpawnFailed(format!("{}: {}", self.command, e)))?;

        if !output.status.success() {
            return Err(RewriteError::Failed {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        if let Err(e) = written {
            tracing::warn!(
                rewriter = %self.command,
                error = %e,
                "Rewriter closed stdin before reading all input"
            );
        }

        String::from_utf8(output.stdout)
            .map_err(|e| RewriteError::InvalidOutput(e.to_string()).into())
    }
}

#[async_trait]
impl SourceRewriter for CommandRewriter {
    fn name(&self) -> &str {
        &self.command
    }

    async fn rewrite(&self, source: &str, format: ModuleFormat) -> Result<String> {
        tracing::debug!(
            rewriter = %self.command,
            format = %format,
            bytes = source.len(),
            "Rewriting module source"
        );

        match tokio::time::timeout(self.timeout, self.run(source, format)).await {
            Ok(result) => result,
            Err(_) => Err(RewriteError::Timeout(self.timeout.as_secs()).into()),
        }
    }
}
