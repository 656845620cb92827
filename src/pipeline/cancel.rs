use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crossbeam::channel::{self, Receiver, Sender};
use log::debug;

/// Shared cancellation signal for every stage of a pipeline
///
/// Firing the token drops the only sender of an otherwise silent channel, so
/// threads blocked in `select!` on [`watch`](Self::watch) wake up at once.
#[derive(Clone)]
pub struct CancelToken {
    fired: Arc<AtomicBool>,
    trigger: Arc<Mutex<Option<Sender<()>>>>,
    watch: Receiver<()>,
}

impl CancelToken {
    pub fn new() -> Self {
        let (trigger, watch) = channel::bounded(0);
        Self {
            fired: Arc::new(AtomicBool::new(false)),
            trigger: Arc::new(Mutex::new(Some(trigger))),
            watch,
        }
    }

    pub fn cancel(&self) {
        if self.fired.swap(true, Ordering::AcqRel) {
            return;
        }
        debug!("Cancellation requested");
        self.trigger
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }

    pub fn is_cancelled(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }

    pub(crate) fn watch(&self) -> &Receiver<()> {
        &self.watch
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}
