use crate::domain::ports::CloseWithContext;
use async_trait::async_trait;
use std::io;
use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};
use tokio::net::TcpStream;

// These resources have no notion of a context; it is accepted and ignored.

#[async_trait]
impl<Ctx: ?Sized + Sync> CloseWithContext<Ctx> for File {
    type Error = io::Error;

    async fn close(&mut self, _ctx: &Ctx) -> io::Result<()> {
        self.flush().await?;
        self.sync_all().await
    }
}

#[async_trait]
impl<Ctx, W> CloseWithContext<Ctx> for BufWriter<W>
where
    Ctx: ?Sized + Sync,
    W: AsyncWrite + Unpin + Send,
{
    type Error = io::Error;

    async fn close(&mut self, _ctx: &Ctx) -> io::Result<()> {
        self.shutdown().await
    }
}

#[async_trait]
impl<Ctx: ?Sized + Sync> CloseWithContext<Ctx> for TcpStream {
    type Error = io::Error;

    async fn close(&mut self, _ctx: &Ctx) -> io::Result<()> {
        self.shutdown().await
    }
}
