//! Feature-gated tracing macros for the optimizer stages.
//!
//! With the `tracing` feature enabled these forward to the `tracing` crate;
//! without it they expand to no-ops so call sites need no `cfg` attributes.

/// Opens an info-level span around one optimizer invocation.
///
/// With `tracing` enabled this is `tracing::info_span!`. Without it the
/// macro yields a [`NoopSpan`] whose `entered()` returns itself.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

/// Emits an info-level event with per-stage candidate counts.
///
/// With `tracing` enabled this is `tracing::info!`. Without it the field
/// values are still evaluated, then discarded, so they never go unused.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!(name: $name, $($key = $value),+)
    };
    ($name:expr) => {
        tracing::info!(name: $name)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
    ($name:expr) => {};
}

/// Emits a debug-level event with per-peak detail.
///
/// With `tracing` enabled this is `tracing::debug!`. Without it the field
/// values are still evaluated, then discarded, so they never go unused.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::debug!(name: $name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
}

pub(crate) use trace_debug;
pub(crate) use trace_event;
pub(crate) use trace_span;

/// Span guard used when tracing is compiled out.
///
/// Lets `let _span = trace_span!(...).entered();` read the same with and
/// without the `tracing` feature.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Mirrors `Span::entered()`.
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
