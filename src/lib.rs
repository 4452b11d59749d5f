//! Close a resource and log the failure instead of dropping it.
//!
//! ```
//! use deferred_close::{close_or_log_std, CloseExt, TracingLogger};
//! use std::io::{BufWriter, Write};
//!
//! let mut out = BufWriter::new(Vec::new());
//! out.write_all(b"report").unwrap();
//! close_or_log_std(&mut out);
//!
//! let _guard = BufWriter::new(Vec::new()).defer_close(TracingLogger);
//! ```

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::loggers::{std_logger, StdLogger, TracingLogger, WriterLogger};
pub use adapters::std_io::CloseFn;
pub use config::{LogFormat, LoggingConfig};
pub use core::deferred::{close_or_log, close_or_log_ctx, close_or_log_std, close_or_log_std_ctx};
pub use core::ext::CloseExt;
pub use core::guard::{close_on_drop_std, CloseOnDrop};
pub use domain::ports::{Close, CloseWithContext, ErrorLogger};
pub use utils::error::{DeferredError, Result};
