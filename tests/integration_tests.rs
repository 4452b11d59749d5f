use anyhow::Result;
use async_trait::async_trait;
use deferred_close::{
    close_or_log, close_or_log_ctx, Close, CloseExt, CloseWithContext, ErrorLogger, WriterLogger,
};
use std::fmt;
use std::io::{BufWriter, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Records every call the way a test double for a logging library would.
#[derive(Default)]
struct SpyLogger {
    calls: Mutex<Vec<String>>,
}

impl SpyLogger {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ErrorLogger for SpyLogger {
    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.calls.lock().unwrap().push(args.to_string());
    }
}

#[derive(Debug)]
struct DiskFull;

impl fmt::Display for DiskFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("disk full")
    }
}

struct Volume {
    closes: Arc<AtomicUsize>,
    full: bool,
}

impl Close for Volume {
    type Error = DiskFull;

    fn close(&mut self) -> Result<(), DiskFull> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        if self.full {
            Err(DiskFull)
        } else {
            Ok(())
        }
    }
}

struct Session {
    closes: usize,
    last_ctx: Option<usize>,
    error: Option<String>,
}

struct ShutdownCtx {
    _grace_ms: u64,
}

#[async_trait]
impl CloseWithContext<ShutdownCtx> for Session {
    type Error = String;

    async fn close(&mut self, ctx: &ShutdownCtx) -> Result<(), String> {
        self.closes += 1;
        self.last_ctx = Some(ctx as *const ShutdownCtx as usize);
        tokio::task::yield_now().await;
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[test]
fn test_disk_full_scenario() {
    let log = SpyLogger::default();
    let closes = Arc::new(AtomicUsize::new(0));
    let mut volume = Volume {
        closes: closes.clone(),
        full: true,
    };

    close_or_log(&mut volume, &log);

    assert_eq!(closes.load(Ordering::SeqCst), 1);
    assert_eq!(log.calls(), vec!["can't close: disk full".to_string()]);
}

#[test]
fn test_clean_close_is_silent() {
    let log = SpyLogger::default();
    let closes = Arc::new(AtomicUsize::new(0));
    let mut volume = Volume {
        closes: closes.clone(),
        full: false,
    };

    close_or_log(&mut volume, &log);

    assert_eq!(closes.load(Ordering::SeqCst), 1);
    assert!(log.calls().is_empty());
}

#[test]
fn test_each_call_closes_exactly_once() {
    let log = SpyLogger::default();
    let closes = Arc::new(AtomicUsize::new(0));
    let mut volume = Volume {
        closes: closes.clone(),
        full: true,
    };

    for _ in 0..3 {
        close_or_log(&mut volume, &log);
    }

    assert_eq!(closes.load(Ordering::SeqCst), 3);
    assert_eq!(log.calls().len(), 3);
}

#[test]
fn test_concurrent_callers_share_a_logger() {
    let log = Arc::new(SpyLogger::default());
    let closes = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let log = log.clone();
            let closes = closes.clone();
            std::thread::spawn(move || {
                let mut volume = Volume {
                    closes,
                    full: i % 2 == 0,
                };
                close_or_log(&mut volume, &log);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(closes.load(Ordering::SeqCst), 8);
    assert_eq!(log.calls().len(), 4);
}

#[test]
fn test_buffered_file_is_flushed_on_close() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("report.csv");
    let log = WriterLogger::new(Vec::new());

    {
        let mut out = BufWriter::new(std::fs::File::create(&path)?).defer_close(&log);
        writeln!(out, "id,name")?;
        writeln!(out, "1,alpha")?;
    }

    assert_eq!(std::fs::read_to_string(&path)?, "id,name\n1,alpha\n");
    assert!(log.into_inner().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_ctx_variant_forwards_same_context() {
    let log = SpyLogger::default();
    let ctx = ShutdownCtx { _grace_ms: 500 };
    let mut session = Session {
        closes: 0,
        last_ctx: None,
        error: Some("handshake timed out".to_string()),
    };

    close_or_log_ctx(&ctx, &mut session, &log).await;

    assert_eq!(session.closes, 1);
    assert_eq!(session.last_ctx, Some(&ctx as *const ShutdownCtx as usize));
    assert_eq!(log.calls(), vec!["can't close: handshake timed out".to_string()]);
}

#[tokio::test]
async fn test_ctx_variant_on_optional_session() {
    let log = SpyLogger::default();
    let ctx = ShutdownCtx { _grace_ms: 0 };
    let mut missing: Option<Session> = None;

    close_or_log_ctx(&ctx, &mut missing, &log).await;

    assert!(log.calls().is_empty());
}

#[tokio::test]
async fn test_ctx_variant_with_tokio_file() -> Result<()> {
    use tokio::io::AsyncWriteExt;

    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("events.log");
    let log = SpyLogger::default();

    let mut file = tokio::fs::File::create(&path).await?;
    file.write_all(b"started\n").await?;
    close_or_log_ctx(&(), &mut file, &log).await;

    assert_eq!(tokio::fs::read_to_string(&path).await?, "started\n");
    assert!(log.calls().is_empty());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_ctx_variant_runs_on_spawned_task() {
    let log = Arc::new(SpyLogger::default());
    let task_log = log.clone();

    let closes = tokio::spawn(async move {
        let ctx = ShutdownCtx { _grace_ms: 100 };
        let mut session = Session {
            closes: 0,
            last_ctx: None,
            error: Some("drain aborted".to_string()),
        };
        close_or_log_ctx(&ctx, &mut session, &*task_log).await;
        session.closes
    })
    .await
    .unwrap();

    assert_eq!(closes, 1);
    assert_eq!(log.calls(), vec!["can't close: drain aborted".to_string()]);
}
