use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use crossbeam::channel::{self, Receiver, Sender};
use crossbeam::select;

use super::cancel::CancelToken;

/// Lifecycle of a stream as seen by its reader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    /// The writer may still send items
    Open,
    /// The writer is gone; buffered items remain readable
    Closing,
    /// Everything has been read
    Closed,
}

const OPEN: u8 = 0;
const CLOSING: u8 = 1;
const CLOSED: u8 = 2;

/// Allocate a bounded stream and its single writer
pub fn stream<T>(capacity: usize) -> (StreamWriter<T>, Stream<T>) {
    let (sender, receiver) = channel::bounded(capacity);
    let state = Arc::new(AtomicU8::new(OPEN));

    (
        StreamWriter {
            sender,
            state: Arc::clone(&state),
        },
        Stream {
            receiver,
            state,
            capacity,
        },
    )
}

/// Write half of a stream; dropping it closes the stream
pub struct StreamWriter<T> {
    sender: Sender<T>,
    state: Arc<AtomicU8>,
}

impl<T> StreamWriter<T> {
    /// Send an item, blocking while the buffer is full
    ///
    /// Returns `false` once the reader has gone away.
    pub fn send(&self, item: T) -> bool {
        self.sender.send(item).is_ok()
    }

    /// Like [`send`](Self::send), but also gives up when `cancel` fires
    pub fn send_or_cancel(&self, item: T, cancel: &CancelToken) -> bool {
        select! {
            send(self.sender, item) -> result => result.is_ok(),
            recv(cancel.watch()) -> _ => false,
        }
    }

    /// Close the stream. Equivalent to dropping the writer.
    pub fn close(self) {}
}

impl<T> Drop for StreamWriter<T> {
    fn drop(&mut self) {
        let _ = self
            .state
            .compare_exchange(OPEN, CLOSING, Ordering::AcqRel, Ordering::Acquire);
    }
}

/// Read half of a bounded FIFO stream
pub struct Stream<T> {
    receiver: Receiver<T>,
    state: Arc<AtomicU8>,
    capacity: usize,
}

impl<T> Stream<T> {
    /// Block until the next item arrives, or return `None` once the stream is closed
    pub fn recv(&self) -> Option<T> {
        match self.receiver.recv() {
            Ok(item) => Some(item),
            Err(_) => {
                self.mark_closed();
                None
            }
        }
    }

    /// Like [`recv`](Self::recv), but returns `None` as soon as `cancel` fires
    pub fn recv_or_cancel(&self, cancel: &CancelToken) -> Option<T> {
        select! {
            recv(self.receiver) -> item => match item {
                Ok(item) => Some(item),
                Err(_) => {
                    self.mark_closed();
                    None
                }
            },
            recv(cancel.watch()) -> _ => None,
        }
    }

    pub fn state(&self) -> StreamState {
        match self.state.load(Ordering::Acquire) {
            OPEN => StreamState::Open,
            // Nothing can arrive after the writer is gone
            CLOSING if self.receiver.is_empty() => StreamState::Closed,
            CLOSING => StreamState::Closing,
            _ => StreamState::Closed,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items written but not yet read
    pub fn buffered(&self) -> usize {
        self.receiver.len()
    }

    /// Take whatever is buffered right now without blocking
    pub fn try_iter(&self) -> impl Iterator<Item = T> + '_ {
        self.receiver.try_iter()
    }

    /// Read every remaining item in arrival order
    pub fn drain(self) -> Vec<T> {
        self.collect()
    }

    fn mark_closed(&self) {
        self.state.store(CLOSED, Ordering::Release);
    }
}

impl<T> Iterator for Stream<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.recv()
    }
}
