//! HTTP middleware: session resolution and request tracing.

pub mod session;
pub mod tracing;
