use anyhow::{Context, Result};
use rayon::{Scope, ThreadPool, ThreadPoolBuilder};

/// Fixed-size worker pool that file loading fans out over.
///
/// Wraps an owned, non-global rayon pool: construction pins the worker
/// count, `scope` blocks until every spawned task has finished, and dropping
/// the value joins all worker threads. No worker outlives the pool on any
/// exit path, success or error.
pub struct WorkerPool {
    pool: ThreadPool,
    workers: usize,
}

impl WorkerPool {
    /// Build a pool with `workers` threads. `None` or `Some(0)` means one
    /// thread per available CPU.
    pub fn new(workers: Option<usize>) -> Result<Self> {
        let workers = match workers {
            Some(n) if n > 0 => n,
            _ => available_workers(),
        };
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("cetl-worker-{i}"))
            .build()
            .context("spawning worker threads")?;
        Ok(Self { pool, workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run `op` inside a fan-out scope on this pool. Returns only after
    /// every task spawned within the scope has completed.
    pub fn scope<'scope, OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce(&Scope<'scope>) -> R + Send,
        R: Send,
    {
        self.pool.scope(op)
    }

    /// Run two closures on the pool, potentially in parallel.
    pub fn join<A, B, RA, RB>(&self, oper_a: A, oper_b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        self.pool.join(oper_a, oper_b)
    }
}

fn available_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
