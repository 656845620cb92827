use std::thread::{self, JoinHandle};

use crossbeam::channel;
use log::{debug, info, warn};

use super::cancel::CancelToken;
use super::constants::{DEFAULT_BUFFER_CAPACITY, STAGE_THREAD_PREFIX};
use super::errors::PipelineError;
use super::stream::{Stream, stream};

/// Counters reported by a finished stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageReport {
    pub seen: usize,
    pub accepted: usize,
}

struct StageHandle {
    index: usize,
    handle: JoinHandle<StageReport>,
}

/// Builder over a chain of concurrent filter stages
///
/// Each [`filter`](Self::filter) consumes the builder and returns it with one
/// more stage. The stage list is only touched by the thread holding the
/// builder; stage threads own nothing but their two streams.
///
/// Dropping an undrained pipeline does not leak blocked stages: the last
/// stage's sends start failing, it exits and drops its input, and so on
/// back to the root producer.
pub struct Pipeline<T> {
    terminal: Option<Stream<T>>,
    stages: Vec<StageHandle>,
    capacity: usize,
    cancel: CancelToken,
    error: Option<PipelineError>,
}

impl<T: Send + 'static> Pipeline<T> {
    pub fn new(root: Stream<T>) -> Self {
        Self::with_capacity(root, DEFAULT_BUFFER_CAPACITY)
    }

    /// Start a pipeline whose stage buffers hold `capacity` items each
    pub fn with_capacity(root: Stream<T>, capacity: usize) -> Self {
        Self {
            terminal: Some(root),
            stages: Vec::new(),
            capacity: capacity.max(1),
            cancel: CancelToken::new(),
            error: None,
        }
    }

    /// Append a stage that keeps only the items `predicate` accepts
    ///
    /// Returns without waiting for any filtering. Once the pipeline is errored
    /// this is a no-op.
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + 'static,
    {
        if let Some(error) = &self.error {
            warn!("Skipping filter because of previous error: {}", error);
            return self;
        }

        if self.cancel.is_cancelled() {
            warn!("Skipping filter on a cancelled pipeline");
            self.error = Some(PipelineError::Cancelled);
            return self;
        }

        let Some(input) = self.terminal.take() else {
            return self;
        };

        let index = self.stages.len();
        let (writer, output) = stream(self.capacity);
        let cancel = self.cancel.clone();

        // The input is handed over only after the thread exists, so a failed
        // spawn leaves the current terminal stream in place.
        let (handoff_tx, handoff_rx) = channel::bounded::<Stream<T>>(1);

        let spawned = thread::Builder::new()
            .name(format!("{}-{}", STAGE_THREAD_PREFIX, index))
            .spawn(move || {
                let mut report = StageReport::default();
                let Ok(input) = handoff_rx.recv() else {
                    return report;
                };

                debug!("Stage {} started", index);
                while let Some(item) = input.recv_or_cancel(&cancel) {
                    report.seen += 1;
                    if predicate(&item) {
                        if !writer.send_or_cancel(item, &cancel) {
                            debug!("Stage {} stopped early", index);
                            break;
                        }
                        report.accepted += 1;
                    }
                }

                writer.close();
                debug!(
                    "Stage {} closed after accepting {} of {}",
                    index, report.accepted, report.seen
                );
                report
            });

        match spawned {
            Ok(handle) => {
                if let Err(returned) = handoff_tx.send(input) {
                    warn!("Stage {} exited before receiving its input", index);
                    self.terminal = Some(returned.into_inner());
                    self.error = Some(PipelineError::Cancelled);
                    return self;
                }
                self.stages.push(StageHandle { index, handle });
                self.terminal = Some(output);
            }
            Err(source) => {
                warn!("Error spawning filter stage {}: {}", index, source);
                self.terminal = Some(input);
                self.error = Some(PipelineError::Spawn {
                    stage: index,
                    source,
                });
            }
        }

        self
    }

    /// Block until the terminal stream closes and return its items in order
    ///
    /// On a cancelled pipeline this returns whatever already reached the
    /// terminal stream.
    pub fn drain(self) -> Vec<T> {
        self.drain_with_reports().0
    }

    /// Like [`drain`](Self::drain), also returning the counters of every stage
    /// that finished normally
    pub fn drain_with_reports(self) -> (Vec<T>, Vec<StageReport>) {
        let mut items = Vec::new();

        if let Some(terminal) = self.terminal {
            while let Some(item) = terminal.recv_or_cancel(&self.cancel) {
                items.push(item);
            }
            if self.cancel.is_cancelled() {
                items.extend(terminal.try_iter());
            }
        }

        let mut reports = Vec::with_capacity(self.stages.len());
        for stage in self.stages {
            match stage.handle.join() {
                Ok(report) => {
                    debug!(
                        "Stage {} accepted {} of {} items",
                        stage.index, report.accepted, report.seen
                    );
                    reports.push(report);
                }
                Err(_) => warn!("Filter stage {} panicked", stage.index),
            }
        }

        info!("Drained {} items from the pipeline", items.len());
        (items, reports)
    }

    /// Fire the cancellation signal; running stages close their outputs early
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn is_errored(&self) -> bool {
        self.error.is_some()
    }

    pub fn error(&self) -> Option<&PipelineError> {
        self.error.as_ref()
    }

    /// The stream the next stage would read from
    pub fn terminal(&self) -> Option<&Stream<T>> {
        self.terminal.as_ref()
    }
}
