use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use pacer_core::impls::{LogEvent, RecordingLogger};
use pacer_core::{IterationError, Worker, WorkerLoop};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// iter1: ok(1s) / iter2: error / iter3: ok(0s), cancelled before the next check
struct TimelineWorker {
    origin: Instant,
    cancel: CancellationToken,
    starts: Mutex<Vec<Duration>>,
}

#[async_trait]
impl Worker for TimelineWorker {
    async fn run_iteration(&self, _cancel: &CancellationToken) -> Result<Duration, IterationError> {
        let n = {
            let mut starts = self.starts.lock().unwrap();
            starts.push(self.origin.elapsed());
            starts.len()
        };
        match n {
            1 => Ok(Duration::from_secs(1)),
            2 => Err(anyhow!("upstream unavailable").into()),
            3 => {
                // 0s の wait は yield しないことがあるので、ここでキャンセルしておく
                self.cancel.cancel();
                Ok(Duration::ZERO)
            }
            _ => panic!("iteration {n} must not run"),
        }
    }
}

#[tokio::test(start_paused = true)]
async fn documented_timeline() {
    let logger = Arc::new(RecordingLogger::new());
    let worker_loop = WorkerLoop::builder()
        .name("timeline")
        .logger(logger.clone())
        .build();
    let cancel = CancellationToken::new();
    let worker = TimelineWorker {
        origin: Instant::now(),
        cancel: cancel.clone(),
        starts: Mutex::new(Vec::new()),
    };

    worker_loop
        .run(&worker, Duration::from_secs(5), &cancel)
        .await;

    let starts = worker.starts.lock().unwrap().clone();
    assert_eq!(starts.len(), 3);
    assert_eq!(starts[0], Duration::ZERO);
    assert!(starts[1] >= Duration::from_secs(1));
    assert!(starts[2] - starts[1] >= Duration::from_secs(5));

    let events = logger.events();
    assert_eq!(events.first(), Some(&LogEvent::info("worker started")));
    assert_eq!(events.last(), Some(&LogEvent::info("worker stopped")));
    let errors = logger.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].0, "upstream unavailable");
}

#[tokio::test(start_paused = true)]
async fn independent_loops_run_concurrently() {
    let cancel = CancellationToken::new();
    let mut handles = Vec::new();
    let mut loggers = Vec::new();

    for i in 0..3u64 {
        let logger = Arc::new(RecordingLogger::new());
        loggers.push(logger.clone());
        let worker_loop = WorkerLoop::new(format!("loop-{i}"), logger);
        let worker = pacer_core::impls::FnWorker::new(move |_cancel| async move {
            Ok(Duration::from_secs(i + 1))
        });
        let cancel = cancel.clone();
        handles.push(tokio::spawn(async move {
            worker_loop
                .run(&worker, Duration::from_secs(1), &cancel)
                .await;
        }));
    }

    tokio::time::sleep(Duration::from_secs(10)).await;
    cancel.cancel();
    for h in handles {
        h.await.unwrap();
    }

    for logger in loggers {
        assert_eq!(
            logger.infos(),
            vec!["worker started".to_string(), "worker stopped".to_string()]
        );
        assert!(logger.errors().is_empty());
    }
}
