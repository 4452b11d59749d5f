use crate::domain::ports::ErrorLogger;
use chrono::Local;
use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;
use tracing::Level;

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// The process-wide default sink.
///
/// Emits a `tracing` error event when the current subscriber records one for
/// this crate. Otherwise, with no subscriber or one that filters us out, it
/// writes a timestamped line to stderr. Stateless, so one shared instance is
/// safe to use from any thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdLogger;

static STD_LOGGER: StdLogger = StdLogger;

pub fn std_logger() -> &'static StdLogger {
    &STD_LOGGER
}

impl ErrorLogger for StdLogger {
    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.report(&mut io::stderr().lock(), args)
    }
}

impl StdLogger {
    fn report<W: Write + ?Sized>(&self, fallback: &mut W, args: fmt::Arguments<'_>) {
        if tracing::enabled!(Level::ERROR) {
            tracing::error!("{}", args);
        } else {
            let _ = write_line(fallback, args);
        }
    }
}

/// Emits every message as a `tracing` error event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl ErrorLogger for TracingLogger {
    fn errorf(&self, args: fmt::Arguments<'_>) {
        tracing::error!("{}", args);
    }
}

/// Writes one timestamped line per message to the wrapped writer.
#[derive(Debug)]
pub struct WriterLogger<W: Write> {
    out: Mutex<W>,
}

impl<W: Write> WriterLogger<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write> ErrorLogger for WriterLogger<W> {
    fn errorf(&self, args: fmt::Arguments<'_>) {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        // A failed log write has nowhere left to go.
        let _ = write_line(&mut *out, args);
    }
}

fn write_line<W: Write + ?Sized>(out: &mut W, args: fmt::Arguments<'_>) -> io::Result<()> {
    writeln!(out, "{} {}", Local::now().format(TIMESTAMP_FORMAT), args)?;
    out.flush()
}
