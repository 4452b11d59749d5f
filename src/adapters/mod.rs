// Adapters layer: concrete closeables and logging sinks for std, tokio and tracing.

pub mod loggers;
pub mod std_io;
pub mod tokio_io;
