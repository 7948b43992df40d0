//! LaTeX → PDF compilation behind a pluggable `LatexCompiler` trait.
//!
//! Default: `PdflatexCompiler`, which shells out to `pdflatex` in a temp
//! directory. `AppState` holds an `Arc<dyn LatexCompiler>` so tests can stub
//! compilation without a TeX installation.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::warn;

use crate::latex::service::validate_latex;

/// How long a single pdflatex invocation may run.
const COMPILE_TIMEOUT: Duration = Duration::from_secs(60);
/// Availability probe timeout.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);
/// pdflatex runs twice so references and the aux file settle.
const COMPILE_PASSES: usize = 2;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("LaTeX compiler (pdflatex) is not available on this system")]
    Unavailable,

    #[error("LaTeX validation failed: {0}")]
    Invalid(String),

    #[error("LaTeX compilation timed out")]
    Timeout,

    #[error("{0}")]
    Failed(String),

    #[error("Compilation I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Compiles LaTeX source to PDF bytes.
///
/// Carried in `AppState` as `Arc<dyn LatexCompiler>`.
#[async_trait]
pub trait LatexCompiler: Send + Sync {
    async fn compile(&self, latex_code: &str) -> Result<Vec<u8>, CompileError>;
}

/// Production compiler: `pdflatex -interaction=nonstopmode` in a tempdir.
pub struct PdflatexCompiler {
    available: bool,
}

impl PdflatexCompiler {
    /// Probes for a working `pdflatex` binary. Compilation requests fail
    /// with `Unavailable` when the probe did not succeed.
    pub async fn detect() -> Self {
        let probe = tokio::time::timeout(
            PROBE_TIMEOUT,
            Command::new("pdflatex").arg("--version").output(),
        )
        .await;

        let available = matches!(probe, Ok(Ok(output)) if output.status.success());
        if !available {
            warn!("pdflatex not found. PDF generation will be unavailable.");
        }

        Self { available }
    }
}

#[async_trait]
impl LatexCompiler for PdflatexCompiler {
    async fn compile(&self, latex_code: &str) -> Result<Vec<u8>, CompileError> {
        if !self.available {
            return Err(CompileError::Unavailable);
        }

        // Lint first so obviously-broken source gets a precise message
        // instead of a pdflatex log dump.
        let report = validate_latex(latex_code);
        if !report.is_valid {
            return Err(CompileError::Invalid(report.errors.join("; ")));
        }

        let temp_dir = tempfile::tempdir()?;
        let tex_path = temp_dir.path().join("resume.tex");
        let pdf_path = temp_dir.path().join("resume.pdf");

        tokio::fs::write(&tex_path, latex_code).await?;

        for _ in 0..COMPILE_PASSES {
            let run = tokio::time::timeout(
                COMPILE_TIMEOUT,
                Command::new("pdflatex")
                    .arg("-interaction=nonstopmode")
                    .arg("-output-directory")
                    .arg(temp_dir.path())
                    .arg(&tex_path)
                    .current_dir(temp_dir.path())
                    .output(),
            )
            .await;

            match run {
                Ok(Ok(_)) => {}
                Ok(Err(e)) => return Err(CompileError::Io(e)),
                Err(_) => return Err(CompileError::Timeout),
            }
        }

        if pdf_path.exists() {
            Ok(tokio::fs::read(&pdf_path).await?)
        } else {
            Err(CompileError::Failed(
                read_log_error(temp_dir.path()).await,
            ))
        }
    }
}

/// Pulls the first `!`-prefixed error line out of the pdflatex log.
async fn read_log_error(dir: &Path) -> String {
    let log_path = dir.join("resume.log");
    match tokio::fs::read_to_string(&log_path).await {
        Ok(log) => log
            .lines()
            .find(|line| line.starts_with('!'))
            .unwrap_or("Compilation failed")
            .to_string(),
        Err(_) => "Compilation failed".to_string(),
    }
}

#[cfg(test)]
pub mod test_support {
    use super::*;

    /// Stub compiler returning fixed PDF bytes, for router tests.
    pub struct StubCompiler;

    #[async_trait]
    impl LatexCompiler for StubCompiler {
        async fn compile(&self, latex_code: &str) -> Result<Vec<u8>, CompileError> {
            let report = validate_latex(latex_code);
            if !report.is_valid {
                return Err(CompileError::Invalid(report.errors.join("; ")));
            }
            Ok(b"%PDF-1.4 stub".to_vec())
        }
    }

    /// Stub compiler that always reports a compile failure.
    pub struct FailingCompiler(pub &'static str);

    #[async_trait]
    impl LatexCompiler for FailingCompiler {
        async fn compile(&self, _latex_code: &str) -> Result<Vec<u8>, CompileError> {
            Err(CompileError::Failed(self.0.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    const MINIMAL_DOC: &str =
        "\\documentclass{article}\n\\begin{document}\nHello\n\\end{document}";

    #[tokio::test]
    async fn test_unavailable_compiler_errors() {
        let compiler = PdflatexCompiler { available: false };
        assert!(matches!(
            compiler.compile(MINIMAL_DOC).await,
            Err(CompileError::Unavailable)
        ));
    }

    #[tokio::test]
    async fn test_invalid_source_rejected_before_compiling() {
        let compiler = StubCompiler;
        let err = compiler.compile("\\begin{document}").await.unwrap_err();
        assert!(matches!(err, CompileError::Invalid(_)));
        assert!(err.to_string().contains("documentclass"));
    }

    #[tokio::test]
    async fn test_stub_compiler_returns_pdf_bytes() {
        let compiler = StubCompiler;
        let pdf = compiler.compile(MINIMAL_DOC).await.unwrap();
        assert!(pdf.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn test_failing_compiler_surfaces_message() {
        let compiler = FailingCompiler("! Undefined control sequence.");
        let err = compiler.compile(MINIMAL_DOC).await.unwrap_err();
        assert_eq!(err.to_string(), "! Undefined control sequence.");
    }
}
