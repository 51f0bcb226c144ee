//! Error adapter for converting DriftError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use drift::DriftError;
use drift_core::error::GraphError;

/// Adapter that renders a [`DriftError`] as a miette diagnostic with a
/// stable error code and, where useful, a hint on how to fix it.
pub struct ErrorAdapter<'a>(pub &'a DriftError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            DriftError::InvalidParameter(_) => "drift::invalid_parameter",
            DriftError::Graph(_) => "drift::graph",
            DriftError::Config(_) => "drift::config",
            DriftError::Io(_) => "drift::io",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            DriftError::InvalidParameter(_) => {
                "n vertices allow at most n*(n-1)/2 edges; the cooling decay must lie in (0, 1)"
            }
            DriftError::Graph(GraphError::InvalidCanvas { .. }) => {
                "pass a positive --width and --height"
            }
            DriftError::Config(_) => "check the TOML file passed with --config",
            DriftError::Graph(_) | DriftError::Io(_) => return None,
        };
        Some(Box::new(help))
    }
}

/// Wrap a [`DriftError`] for rendering.
pub fn to_reportable(err: &DriftError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let err = DriftError::InvalidParameter("too many edges".to_string());
        let adapter = to_reportable(&err);
        assert_eq!(
            adapter.code().map(|c| c.to_string()),
            Some("drift::invalid_parameter".to_string())
        );
        assert!(adapter.help().is_some());
        assert_eq!(adapter.to_string(), "Invalid parameter: too many edges");
    }

    #[test]
    fn test_canvas_help() {
        let err = DriftError::from(GraphError::InvalidCanvas {
            width: 0.0,
            height: 1.0,
        });
        let adapter = to_reportable(&err);
        assert_eq!(
            adapter.code().map(|c| c.to_string()),
            Some("drift::graph".to_string())
        );
        assert_eq!(
            adapter.help().map(|h| h.to_string()),
            Some("pass a positive --width and --height".to_string())
        );
    }

    #[test]
    fn test_other_graph_errors_have_no_help() {
        let err = DriftError::from(GraphError::SelfLoop { vertex: 3 });
        assert!(to_reportable(&err).help().is_none());
    }
}
