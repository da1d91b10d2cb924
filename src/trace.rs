//! Internal logging shim.
//!
//! Events go through `tracing` when the `tracing` feature is enabled and
//! compile away otherwise.

/// Emits a `tracing` event at the given level.
///
/// ```ignore
/// trace_event!(trace, depth = cursor.depth(), "seek settled");
/// ```
macro_rules! trace_event {
    ($level:ident, $($argument:tt)+) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::$level!($($argument)+);
        }
    }};
}

pub(crate) use trace_event;
