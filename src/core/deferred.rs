use crate::adapters::loggers::std_logger;
use crate::domain::ports::{Close, CloseWithContext, ErrorLogger};

/// Closes `cl` and reports a failure to `log` as `can't close: <err>`.
///
/// The error never reaches the caller. Use [`Close::close`] directly when the
/// error value is needed.
///
/// ```
/// use deferred_close::{close_or_log, TracingLogger};
///
/// let mut out = std::io::BufWriter::new(Vec::new());
/// close_or_log(&mut out, &TracingLogger);
/// ```
pub fn close_or_log<C, L>(cl: &mut C, log: &L)
where
    C: Close + ?Sized,
    L: ErrorLogger + ?Sized,
{
    if let Err(e) = cl.close() {
        log.errorf(format_args!("can't close: {}", e));
    }
}

/// Like [`close_or_log`], for resources closed under a context.
///
/// `ctx` is handed to the close operation untouched. Nothing here races the
/// close against cancellation.
pub async fn close_or_log_ctx<Ctx, C, L>(ctx: &Ctx, cl: &mut C, log: &L)
where
    Ctx: ?Sized + Sync,
    C: CloseWithContext<Ctx> + ?Sized,
    L: ErrorLogger + ?Sized,
{
    if let Err(e) = cl.close(ctx).await {
        log.errorf(format_args!("can't close: {}", e));
    }
}

/// [`close_or_log`] with the process-wide default logger.
pub fn close_or_log_std<C>(cl: &mut C)
where
    C: Close + ?Sized,
{
    close_or_log(cl, std_logger())
}

/// [`close_or_log_ctx`] with the process-wide default logger.
pub async fn close_or_log_std_ctx<Ctx, C>(ctx: &Ctx, cl: &mut C)
where
    Ctx: ?Sized + Sync,
    C: CloseWithContext<Ctx> + ?Sized,
{
    close_or_log_ctx(ctx, cl, std_logger()).await
}
