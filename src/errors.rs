//! Error types with miette diagnostics.
//!
//! Rendering itself never fails: degenerate wedges, unknown sector ids and
//! unshrinkable text all degrade visually instead of erroring. The only
//! fallible surface is validation of the chart configuration and the input
//! tree at the API boundary.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised when validating a render request.
#[derive(Error, Diagnostic, Debug)]
pub enum ChartError {
    #[error("invalid chart size: {value}")]
    #[diagnostic(
        code(sunburst::config::invalid_size),
        help("the chart size must be a positive, finite number of logical units")
    )]
    InvalidSize { value: f64 },

    #[error("non-finite share for node `{id}`: {share}")]
    #[diagnostic(
        code(sunburst::input::non_finite_share),
        help("shares are percentages of the parent's angular budget; NaN and infinite values cannot be partitioned")
    )]
    NonFiniteShare { id: String, share: f64 },
}
