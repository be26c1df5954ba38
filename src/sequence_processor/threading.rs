use super::core::*;
use crate::error::Result;
use anyhow::anyhow;
use crossbeam_channel::{bounded, Sender};
use std::thread;
use tracing::debug;

type WorkerOutput<P> = Result<(P, ProcessingStats)>;

/// Fixed set of workers, each folding whole batches into its own processor.
pub struct ThreadPool<P: SequenceProcessor> {
    handles: Vec<thread::JoinHandle<WorkerOutput<P>>>,
    tx: Sender<Vec<Sequence>>,
}

impl<P: SequenceProcessor> ThreadPool<P> {
    /// Workers start from `processor.fork()`, never from its accumulated state.
    pub fn new(processor: &P, num_threads: usize) -> Result<Self> {
        let num_threads = num_threads.max(1);
        let (tx, rx) = bounded::<Vec<Sequence>>(num_threads * 2);
        let mut handles = Vec::with_capacity(num_threads);

        for worker in 0..num_threads {
            let rx = rx.clone();
            let mut worker_processor = processor.fork();
            let handle = thread::Builder::new()
                .name(format!("content-worker-{worker}"))
                .spawn(move || -> WorkerOutput<P> {
                    let mut local_stats = ProcessingStats::default();
                    while let Ok(batch) = rx.recv() {
                        worker_processor.process_batch(&batch)?;
                        local_stats.record_batch(&batch);
                    }
                    Ok((worker_processor, local_stats))
                })?;
            handles.push(handle);
        }

        debug!(workers = num_threads, "started worker pool");
        Ok(ThreadPool { handles, tx })
    }

    pub fn send(&self, batch: Vec<Sequence>) -> Result<()> {
        self.tx
            .send(batch)
            .map_err(|_| anyhow!("all workers have stopped").into())
    }

    /// Close the channel and collect every worker's processor.
    ///
    /// The first worker error (or panic) is returned instead of partial results.
    pub fn finish(self) -> Result<(ProcessingStats, Vec<P>)> {
        drop(self.tx);

        let mut stats = ProcessingStats::default();
        let mut processors = Vec::with_capacity(self.handles.len());
        let mut first_error = None;

        for (idx, handle) in self.handles.into_iter().enumerate() {
            match handle.join() {
                Ok(Ok((worker_processor, worker_stats))) => {
                    processors.push(worker_processor);
                    stats += worker_stats;
                }
                Ok(Err(e)) => {
                    first_error.get_or_insert(e);
                }
                Err(_) => {
                    first_error.get_or_insert(anyhow!("worker {idx} panicked").into());
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok((stats, processors)),
        }
    }
}

/// Fold worker processors into `main_processor` by pairwise (tree) merging.
pub fn merge_processors<P: SequenceProcessor>(processors: Vec<P>, main_processor: &mut P) -> Result<()> {
    debug!(count = processors.len(), "merging worker results");

    let mut level = processors;
    while level.len() > 1 {
        let mut next = Vec::with_capacity(level.len().div_ceil(2));
        let mut pending = level.into_iter();
        while let Some(mut left) = pending.next() {
            if let Some(right) = pending.next() {
                left.merge_processor(right)?;
            }
            next.push(left);
        }
        level = next;
    }

    if let Some(merged) = level.pop() {
        main_processor.merge_processor(merged)?;
    }
    Ok(())
}
