//! Structured logging and optional OTLP span export.
//!
//! ```text
//! tracing macros → EnvFilter ┬→ fmt layer (stderr)
//!                            └→ tracing-opentelemetry → FileSpanExporter → RotatingFile
//! ```
//!
//! The span file is only written when `trace_file` is configured. It rotates
//! at 10 MiB and keeps three backups.
//!
//! # Modules
//!
//! - [`init`]: Subscriber installation and level resolution
//! - [`export`]: OTLP JSON exporter and tracer provider
//! - [`rotating_file`]: Size-rotated line file

pub mod export;
pub mod init;
pub mod rotating_file;

pub use init::init_tracing;
