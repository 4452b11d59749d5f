use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// A resource that can be released and may fail while doing so.
pub trait Close {
    type Error: fmt::Display;

    fn close(&mut self) -> Result<(), Self::Error>;
}

/// A resource whose release takes a cancellation-bearing context.
///
/// The context is opaque to this crate. Implementations decide whether and how
/// to honor it.
///
/// Implementors must be `Send` so the returned future can run on a
/// multi-threaded runtime. A `!Send` resource has to use [`Close`] instead.
#[async_trait]
pub trait CloseWithContext<Ctx: ?Sized + Sync>: Send {
    type Error: fmt::Display;

    async fn close(&mut self, ctx: &Ctx) -> Result<(), Self::Error>;
}

/// Error-level sink for formatted messages.
///
/// Anything with a single "format this at error level" entry point fits here:
/// a `tracing` macro, a writer, a test recorder.
pub trait ErrorLogger {
    fn errorf(&self, args: fmt::Arguments<'_>);
}

impl<L: ErrorLogger + ?Sized> ErrorLogger for &L {
    fn errorf(&self, args: fmt::Arguments<'_>) {
        (**self).errorf(args)
    }
}

impl<L: ErrorLogger + ?Sized> ErrorLogger for Box<L> {
    fn errorf(&self, args: fmt::Arguments<'_>) {
        (**self).errorf(args)
    }
}

impl<L: ErrorLogger + ?Sized> ErrorLogger for Arc<L> {
    fn errorf(&self, args: fmt::Arguments<'_>) {
        (**self).errorf(args)
    }
}
