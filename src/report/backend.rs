use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::{AdvisorError, Result};
use crate::report::options::RenderOptions;

/// Converts a complete HTML document into a paginated PDF at `output_path`.
///
/// Implementations overwrite an existing file and report every failure as
/// [`AdvisorError::RenderFailure`].
#[async_trait]
pub trait RenderBackend: Send + Sync {
    async fn render(&self, html: &str, options: &RenderOptions, output_path: &Path) -> Result<()>;

    fn name(&self) -> &str;
}

const DEFAULT_BINARY: &str = "wkhtmltopdf";

/// Drives the `wkhtmltopdf` converter as a child process, feeding the
/// document on stdin.
#[derive(Debug, Clone)]
pub struct WkhtmltopdfBackend {
    binary: PathBuf,
    timeout: Option<Duration>,
}

impl Default for WkhtmltopdfBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl WkhtmltopdfBackend {
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from(DEFAULT_BINARY),
            timeout: None,
        }
    }

    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Kill the converter if it has not finished within `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn args(options: &RenderOptions, output_path: &Path) -> Vec<String> {
        let margins = &options.margins;
        vec![
            "--quiet".to_string(),
            "--page-size".to_string(),
            options.page_size.to_string(),
            "--margin-top".to_string(),
            margins.top.to_string(),
            "--margin-right".to_string(),
            margins.right.to_string(),
            "--margin-bottom".to_string(),
            margins.bottom.to_string(),
            "--margin-left".to_string(),
            margins.left.to_string(),
            "--encoding".to_string(),
            options.encoding.clone(),
            "-".to_string(),
            output_path.to_string_lossy().into_owned(),
        ]
    }

    async fn run(&self, html: &str, options: &RenderOptions, output_path: &Path) -> Result<()> {
        let mut child = Command::new(&self.binary)
            .args(Self::args(options, output_path))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                AdvisorError::RenderFailure(format!(
                    "Failed to start {}: {}",
                    self.binary.display(),
                    e
                ))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(html.as_bytes())
                .await
                .map_err(|e| AdvisorError::RenderFailure(format!("Failed to send document: {}", e)))?;
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| AdvisorError::RenderFailure(e.to_string()))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            return Err(AdvisorError::RenderFailure(format!(
                "{} exited with {}: {}",
                self.binary.display(),
                output.status,
                stderr.trim()
            )));
        }
        if !stderr.trim().is_empty() {
            warn!("{}: {}", self.binary.display(), stderr.trim());
        }

        Ok(())
    }
}

#[async_trait]
impl RenderBackend for WkhtmltopdfBackend {
    async fn render(&self, html: &str, options: &RenderOptions, output_path: &Path) -> Result<()> {
        debug!(
            "Converting {} bytes of HTML to {} ({} page)",
            html.len(),
            output_path.display(),
            options.page_size
        );

        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.run(html, options, output_path))
                .await
                .map_err(|_| {
                    AdvisorError::RenderFailure(format!(
                        "{} did not finish within {:?}",
                        self.binary.display(),
                        limit
                    ))
                })?,
            None => self.run(html, options, output_path).await,
        }
    }

    fn name(&self) -> &str {
        "wkhtmltopdf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::options::{Length, Margins, PageSize};

    #[test]
    fn test_args_follow_options() {
        let options = RenderOptions {
            page_size: PageSize::Letter,
            margins: Margins {
                top: Length::inches(1.0),
                right: Length::millimeters(15.0),
                bottom: Length::inches(0.5),
                left: Length::centimeters(2.0),
            },
            encoding: "UTF-8".to_string(),
        };

        let args = WkhtmltopdfBackend::args(&options, Path::new("/tmp/report.pdf"));
        assert_eq!(
            args,
            vec![
                "--quiet",
                "--page-size",
                "Letter",
                "--margin-top",
                "1in",
                "--margin-right",
                "15mm",
                "--margin-bottom",
                "0.5in",
                "--margin-left",
                "2cm",
                "--encoding",
                "UTF-8",
                "-",
                "/tmp/report.pdf",
            ]
        );
    }

    #[cfg(unix)]
    fn stub_converter(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.path().join(name);
        std::fs::write(&path, format!("#!/bin/sh\ncat > /dev/null\n{}\n", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_nonzero_exit_is_render_failure() {
        let dir = tempfile::tempdir().unwrap();
        let binary = stub_converter(&dir, "fail.sh", "echo boom >&2\nexit 3");
        let backend = WkhtmltopdfBackend::new().with_binary(binary);

        let result = backend
            .render(
                "<html></html>",
                &RenderOptions::default(),
                &dir.path().join("report.pdf"),
            )
            .await;

        match result {
            Err(AdvisorError::RenderFailure(message)) => {
                assert!(message.contains("boom"), "unexpected message: {}", message);
            }
            other => panic!("expected RenderFailure, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_slow_converter_times_out() {
        let dir = tempfile::tempdir().unwrap();
        let binary = stub_converter(&dir, "slow.sh", "sleep 5");
        let backend = WkhtmltopdfBackend::new()
            .with_binary(binary)
            .with_timeout(Duration::from_millis(300));

        let started = std::time::Instant::now();
        let result = backend
            .render(
                "<html></html>",
                &RenderOptions::default(),
                &dir.path().join("report.pdf"),
            )
            .await;

        match result {
            Err(AdvisorError::RenderFailure(message)) => {
                assert!(message.contains("did not finish"), "unexpected message: {}", message);
            }
            other => panic!("expected RenderFailure, got {:?}", other),
        }
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_missing_binary_is_render_failure() {
        let backend = WkhtmltopdfBackend::new().with_binary("/nonexistent/bin/wkhtmltopdf");
        let result = backend
            .render(
                "<html></html>",
                &RenderOptions::default(),
                Path::new("/tmp/never-written.pdf"),
            )
            .await;

        assert!(matches!(result, Err(AdvisorError::RenderFailure(_))));
    }
}
