//! Batch rendering of configuration documents through the provider

use serde_json::Value;
use std::time::Instant;
use tenant_manifest_schema::Diagnostics;
use tracing::{error, info, warn};

use crate::config::OutputFormat;
use crate::provider::Provider;
use crate::utils::InputDocument;
use crate::{TenantManifestError, TenantManifestResult};

#[cfg(test)]
mod tests;

/// Separator between YAML documents in manifest output
pub const DOCUMENT_SEPARATOR: &str = "---\n";

/// Coordinates reading a data source for many configuration documents
pub struct ManifestRenderer {
    provider: Provider,
    data_source: String,
    fail_fast: bool,
}

/// Successful read of one document
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub origin: String,
    pub state: Value,
}

impl RenderedDocument {
    /// The `yaml` attribute of the state
    pub fn manifest(&self) -> Option<&str> {
        self.state.get("yaml").and_then(Value::as_str)
    }
}

/// Failed read of one document
#[derive(Debug, Clone)]
pub struct RenderFailure {
    pub origin: String,
    pub diagnostics: Diagnostics,
}

/// Result of a batch
#[derive(Debug, Clone, Default)]
pub struct RenderReport {
    pub rendered: Vec<RenderedDocument>,
    pub failures: Vec<RenderFailure>,
    /// Set when fail-fast stopped the batch before every document was read
    pub stopped_early: bool,
    pub processing_time_ms: u64,
}

impl RenderReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn total(&self) -> usize {
        self.rendered.len() + self.failures.len()
    }

    /// Assemble the rendered documents in the requested format.
    ///
    /// Manifests are joined with `---`; states are written as one JSON array.
    pub fn to_output(&self, format: OutputFormat) -> TenantManifestResult<String> {
        match format {
            OutputFormat::Manifest => {
                let manifests: Vec<&str> = self
                    .rendered
                    .iter()
                    .filter_map(RenderedDocument::manifest)
                    .collect();
                Ok(manifests.join(DOCUMENT_SEPARATOR))
            }
            OutputFormat::State => {
                let states: Vec<&Value> = self.rendered.iter().map(|doc| &doc.state).collect();
                let mut json = serde_json::to_string_pretty(&states)?;
                json.push('\n');
                Ok(json)
            }
        }
    }
}

impl ManifestRenderer {
    pub fn new(provider: Provider, data_source: impl Into<String>) -> Self {
        Self {
            provider,
            data_source: data_source.into(),
            fail_fast: false,
        }
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Read one document; validation and read errors come back as `Diagnostics`
    pub async fn render_document(&self, document: &InputDocument) -> TenantManifestResult<Value> {
        let response = self
            .provider
            .read_data_source(&self.data_source, document.config.clone())
            .await?;

        for diagnostic in response.diagnostics.iter().filter(|d| !d.is_error()) {
            warn!("{}: {}", document.origin, diagnostic);
        }

        response.into_state()
    }

    /// Read every document, collecting failures unless fail-fast is set
    pub async fn render_all(&self, documents: &[InputDocument]) -> TenantManifestResult<RenderReport> {
        let start = Instant::now();
        let mut report = RenderReport::default();

        for document in documents {
            match self.render_document(document).await {
                Ok(state) => report.rendered.push(RenderedDocument {
                    origin: document.origin.clone(),
                    state,
                }),
                Err(TenantManifestError::Diagnostics(diagnostics)) => {
                    error!(
                        "{} has {} error(s)",
                        document.origin,
                        diagnostics.error_count()
                    );
                    report.failures.push(RenderFailure {
                        origin: document.origin.clone(),
                        diagnostics,
                    });
                    if self.fail_fast {
                        report.stopped_early = report.total() < documents.len();
                        break;
                    }
                }
                Err(e) => return Err(e),
            }
        }

        report.processing_time_ms = start.elapsed().as_millis() as u64;
        info!(
            "Rendered {}/{} document(s) in {}ms",
            report.rendered.len(),
            documents.len(),
            report.processing_time_ms
        );

        Ok(report)
    }
}
