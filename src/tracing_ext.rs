//! Tracing integration for falta.
//!
//! Annotates [`Falta`] instances with the active `tracing` span, and emits them
//! as structured events via [`Falta::trace`].
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! falta = { version = "0.3", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::types::alloc_type::format;
use crate::types::Falta;

/// Adds span context to a [`Falta`].
pub trait FaltaSpanExt {
    /// Annotates the error with the current span's name.
    fn with_current_span(self) -> Falta;

    /// Annotates the error with `span`'s name.
    fn with_span(self, span: &Span) -> Falta;
}

impl FaltaSpanExt for Falta {
    #[inline]
    fn with_current_span(self) -> Falta {
        self.with_span(&Span::current())
    }

    fn with_span(self, span: &Span) -> Falta {
        // Span names are metadata, never templates, so the verb check is skipped.
        self.annotate_unchecked(&span_annotation(span))
    }
}

/// Adds span context to the error of a `Result<T, Falta>`.
pub trait ResultSpanExt<T> {
    fn with_current_span(self) -> Result<T, Falta>;

    fn with_span(self, span: &Span) -> Result<T, Falta>;
}

impl<T> ResultSpanExt<T> for Result<T, Falta> {
    #[inline]
    fn with_current_span(self) -> Result<T, Falta> {
        self.with_span(&Span::current())
    }

    fn with_span(self, span: &Span) -> Result<T, Falta> {
        self.map_err(|err| FaltaSpanExt::with_span(err, span))
    }
}

fn span_annotation(span: &Span) -> crate::types::alloc_type::String {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    format!("in span '{name}'")
}
