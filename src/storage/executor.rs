//! Background write context
//!
//! Writes are submitted to a [`WriteExecutor`], a handle to a tokio runtime
//! plus a semaphore bounding how many writes run at once. The submitting side
//! never waits; it receives a `JoinHandle` it may await or drop.

use std::{future::Future, sync::Arc};

use tokio::{runtime::Handle, sync::Semaphore, task::JoinHandle};

/// A bounded pool of background workers shared by every writer
#[derive(Debug, Clone)]
pub struct WriteExecutor {
    runtime: Handle,
    permits: Arc<Semaphore>,
}

impl WriteExecutor {
    /// Creates an executor running at most `workers` jobs at once
    ///
    /// A worker count of zero is raised to one.
    pub fn new(runtime: Handle, workers: usize) -> Self {
        Self {
            runtime,
            permits: Arc::new(Semaphore::new(workers.max(1))),
        }
    }

    /// Number of jobs that could start right now
    pub fn idle_workers(&self) -> usize {
        self.permits.available_permits()
    }

    /// Submits a job to run in the background
    ///
    /// Each job waits for a free worker before it starts. Jobs waiting at the
    /// same time may start in any order. Dropping the returned handle detaches
    /// the job; it still runs to completion.
    pub fn execute<F>(&self, job: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let permits = Arc::clone(&self.permits);
        self.runtime.spawn(async move {
            // The semaphore is never closed, so acquiring only waits.
            let _permit = permits.acquire_owned().await.ok();
            job.await
        })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tokio::sync::oneshot;

    use super::*;

    #[tokio::test]
    async fn test_execute_returns_job_output() {
        let executor = WriteExecutor::new(Handle::current(), 2);
        let handle = executor.execute(async { 21 * 2 });
        assert_eq!(handle.await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_zero_workers_still_runs_jobs() {
        let executor = WriteExecutor::new(Handle::current(), 0);
        assert_eq!(executor.idle_workers(), 1);
        assert_eq!(executor.execute(async { "done" }).await.unwrap(), "done");
    }

    #[tokio::test]
    async fn test_dropped_handle_still_completes() {
        let executor = WriteExecutor::new(Handle::current(), 1);
        let (tx, rx) = oneshot::channel();

        drop(executor.execute(async move {
            let _ = tx.send(());
        }));

        assert!(rx.await.is_ok());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrency_is_bounded() {
        let executor = WriteExecutor::new(Handle::current(), 2);
        let running = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let running = Arc::clone(&running);
                let peak = Arc::clone(&peak);
                executor.execute(async move {
                    let now = running.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
                    running.fetch_sub(1, Ordering::SeqCst);
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert!(peak.load(Ordering::SeqCst) <= 2);
        assert_eq!(executor.idle_workers(), 2);
    }
}
