use std::future::Future;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;

use super::{CancelToken, Channel, ChannelError};

/// [`Channel`] over any ordered byte stream, with an optional per-call
/// timeout and a cancellation token raced against every call.
pub struct StreamChannel<S> {
    stream: S,
    io_timeout: Option<Duration>,
    cancel: CancelToken,
}

impl<S> StreamChannel<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            io_timeout: None,
            cancel: CancelToken::never(),
        }
    }

    /// Fail any single read or write that takes longer than `io_timeout`.
    pub fn with_timeout(mut self, io_timeout: Duration) -> Self {
        self.io_timeout = Some(io_timeout);
        self
    }

    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn get_ref(&self) -> &S {
        &self.stream
    }

    pub fn into_inner(self) -> S {
        self.stream
    }
}

async fn guarded<T, F>(
    io_timeout: Option<Duration>,
    cancel: &CancelToken,
    op: F,
) -> Result<T, ChannelError>
where
    F: Future<Output = Result<T, ChannelError>>,
{
    if cancel.is_cancelled() {
        return Err(ChannelError::Cancelled);
    }
    let bounded = async {
        match io_timeout {
            Some(limit) => timeout(limit, op)
                .await
                .map_err(|_| ChannelError::TimedOut(limit))?,
            None => op.await,
        }
    };
    tokio::select! {
        res = bounded => res,
        _ = cancel.cancelled() => Err(ChannelError::Cancelled),
    }
}

#[async_trait::async_trait]
impl<S> Channel for StreamChannel<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    async fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), ChannelError> {
        let Self {
            stream,
            io_timeout,
            cancel,
        } = self;
        let expected = buf.len();
        let read = async {
            let mut received = 0;
            while received < expected {
                let n = stream.read(&mut buf[received..]).await?;
                if n == 0 {
                    return Err(if received == 0 {
                        ChannelError::Closed
                    } else {
                        ChannelError::ShortRead { expected, received }
                    });
                }
                received += n;
            }
            Ok::<(), ChannelError>(())
        };
        guarded(*io_timeout, cancel, read).await
    }

    async fn write_exact(&mut self, data: &[u8]) -> Result<(), ChannelError> {
        let Self {
            stream,
            io_timeout,
            cancel,
        } = self;
        let write = async {
            stream.write_all(data).await?;
            stream.flush().await?;
            Ok::<(), ChannelError>(())
        };
        guarded(*io_timeout, cancel, write).await
    }

    async fn shutdown(&mut self) -> Result<(), ChannelError> {
        let close = self.stream.shutdown();
        let closed = match self.io_timeout {
            Some(limit) => timeout(limit, close)
                .await
                .map_err(|_| ChannelError::TimedOut(limit))?,
            None => close.await,
        };
        closed.map_err(ChannelError::from)
    }
}
