//! Controller introspection — `version` and `status` queries.

use std::path::Path;

use crate::application::ports::CaptureRunner;

/// Introspection queries the controller answers on its command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeQuery {
    Version,
    Status,
}

impl ProbeQuery {
    #[must_use]
    pub fn as_arg(self) -> &'static str {
        match self {
            ProbeQuery::Version => "version",
            ProbeQuery::Status => "status",
        }
    }
}

/// Ask the controller binary at `path` for its version or status.
///
/// Returns the right-trimmed stdout; an absent binary or a failed run yields
/// an empty string, never an error.
pub async fn probe(runner: &impl CaptureRunner, path: &Path, query: ProbeQuery) -> String {
    if !path.exists() {
        return String::new();
    }
    match runner.run_capture(path, &[query.as_arg()]).await {
        Ok(output) => String::from_utf8_lossy(&output.stdout)
            .trim_end_matches(['\n', '\r'])
            .to_string(),
        Err(err) => {
            tracing::debug!(
                controller = %path.display(),
                query = query.as_arg(),
                error = %err,
                "controller probe failed"
            );
            String::new()
        }
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
