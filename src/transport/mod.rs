//! Byte channel consumed by the turn engine: exact-length reads and writes
//! that suspend until satisfied, failed, timed out or cancelled.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::watch;

pub mod in_memory;
pub mod stream;
pub mod tcp;

pub use stream::StreamChannel;

/// Transport-level failures. Every one of them ends the game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    #[error("channel closed by peer")]
    Closed,
    #[error("short read: expected {expected} bytes, got {received}")]
    ShortRead { expected: usize, received: usize },
    #[error("timed out after {0:?}")]
    TimedOut(Duration),
    #[error("cancelled")]
    Cancelled,
    #[error("i/o error: {0}")]
    Io(io::ErrorKind),
}

impl From<io::Error> for ChannelError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof
            | io::ErrorKind::BrokenPipe
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted => ChannelError::Closed,
            kind => ChannelError::Io(kind),
        }
    }
}

#[async_trait::async_trait]
pub trait Channel: Send {
    /// Fill `buf` completely or fail. A peer that closes before sending any
    /// byte yields [`ChannelError::Closed`], one that closes mid-frame
    /// yields [`ChannelError::ShortRead`].
    async fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), ChannelError>;

    /// Write all of `data` or fail.
    async fn write_exact(&mut self, data: &[u8]) -> Result<(), ChannelError>;

    /// Close our sending side. A peer blocked in a read sees
    /// [`ChannelError::Closed`]. Not interrupted by cancellation.
    async fn shutdown(&mut self) -> Result<(), ChannelError>;
}

#[async_trait::async_trait]
impl<C: Channel + ?Sized> Channel for Box<C> {
    async fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), ChannelError> {
        (**self).read_exact(buf).await
    }

    async fn write_exact(&mut self, data: &[u8]) -> Result<(), ChannelError> {
        (**self).write_exact(data).await
    }

    async fn shutdown(&mut self) -> Result<(), ChannelError> {
        (**self).shutdown().await
    }
}

/// Owner side of a cancellation signal.
#[derive(Clone, Debug)]
pub struct CancelHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl CancelHandle {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Token observed by the channels of one game.
    pub fn token(&self) -> CancelToken {
        CancelToken {
            rx: self.tx.subscribe(),
        }
    }

    /// Wake every pending and future call guarded by a token of this handle.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

impl Default for CancelHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Passed into blocking channel calls; resolves once its handle cancels.
#[derive(Clone, Debug)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    /// A token that is never cancelled.
    pub fn never() -> Self {
        let (_, rx) = watch::channel(false);
        Self { rx }
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Completes when cancellation is requested.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                // Handle dropped without cancelling.
                std::future::pending::<()>().await;
            }
        }
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::never()
    }
}
