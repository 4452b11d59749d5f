use crate::domain::ports::{Close, CloseWithContext};
use async_trait::async_trait;
use std::fs::File;
use std::io::{self, BufWriter, LineWriter, Write};
use std::net::{Shutdown, TcpStream};

/// Dropping a `File` swallows any late write error, so closing syncs it first.
impl Close for File {
    type Error = io::Error;

    fn close(&mut self) -> io::Result<()> {
        self.sync_all()
    }
}

impl<W: Write> Close for BufWriter<W> {
    type Error = io::Error;

    fn close(&mut self) -> io::Result<()> {
        self.flush()
    }
}

impl<W: Write> Close for LineWriter<W> {
    type Error = io::Error;

    fn close(&mut self) -> io::Result<()> {
        self.flush()
    }
}

impl Close for TcpStream {
    type Error = io::Error;

    fn close(&mut self) -> io::Result<()> {
        self.shutdown(Shutdown::Both)
    }
}

/// A missing resource has nothing to release.
impl<C: Close> Close for Option<C> {
    type Error = C::Error;

    fn close(&mut self) -> Result<(), C::Error> {
        match self {
            Some(inner) => inner.close(),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<Ctx, C> CloseWithContext<Ctx> for Option<C>
where
    Ctx: ?Sized + Sync,
    C: CloseWithContext<Ctx>,
{
    type Error = C::Error;

    async fn close(&mut self, ctx: &Ctx) -> Result<(), C::Error> {
        match self {
            Some(inner) => inner.close(ctx).await,
            None => Ok(()),
        }
    }
}

/// Turns a closure into a closeable.
///
/// ```
/// use deferred_close::{close_or_log, CloseFn, TracingLogger};
///
/// let mut release = CloseFn(|| -> Result<(), String> { Err("lease expired".into()) });
/// close_or_log(&mut release, &TracingLogger);
/// ```
pub struct CloseFn<F>(pub F);

impl<F, E> Close for CloseFn<F>
where
    F: FnMut() -> Result<(), E>,
    E: std::fmt::Display,
{
    type Error = E;

    fn close(&mut self) -> Result<(), E> {
        (self.0)()
    }
}
