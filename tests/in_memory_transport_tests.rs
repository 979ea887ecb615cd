use std::time::Duration;

use seabattle::transport::in_memory;
use seabattle::{CancelHandle, CancelToken, Channel, ChannelError, StreamChannel};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

#[tokio::test(flavor = "multi_thread")]
async fn test_exact_frames_in_order() {
    let (mut a, mut b) = in_memory::pair();
    a.write_exact(b"A1").await.unwrap();
    a.write_exact(b"2").await.unwrap();

    let mut frame = [0u8; 2];
    b.read_exact(&mut frame).await.unwrap();
    assert_eq!(&frame, b"A1");
    let mut result = [0u8; 1];
    b.read_exact(&mut result).await.unwrap();
    assert_eq!(&result, b"2");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_read_waits_for_split_frame() {
    let (raw_a, raw_b) = tokio::io::duplex(16);
    let mut reader = StreamChannel::new(raw_b);
    let writer = tokio::spawn(async move {
        let mut raw_a = raw_a;
        raw_a.write_all(b"C").await.unwrap();
        raw_a.flush().await.unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
        raw_a.write_all(b"3").await.unwrap();
        raw_a
    });

    let mut frame = [0u8; 2];
    reader.read_exact(&mut frame).await.unwrap();
    assert_eq!(&frame, b"C3");
    writer.await.unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_into_inner_keeps_unread_bytes() {
    let (mut a, mut b) = in_memory::pair();
    a.write_exact(b"D4E5").await.unwrap();
    let mut frame = [0u8; 2];
    b.read_exact(&mut frame).await.unwrap();
    assert_eq!(&frame, b"D4");

    let mut raw = b.into_inner();
    let mut rest = [0u8; 2];
    raw.read_exact(&mut rest).await.unwrap();
    assert_eq!(&rest, b"E5");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_closed_before_any_byte() {
    let (a, mut b) = in_memory::pair();
    drop(a);
    let mut frame = [0u8; 2];
    assert_eq!(b.read_exact(&mut frame).await, Err(ChannelError::Closed));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_closed_mid_frame() {
    let (mut a, mut b) = in_memory::pair();
    a.write_exact(b"B").await.unwrap();
    drop(a);
    let mut frame = [0u8; 2];
    assert_eq!(
        b.read_exact(&mut frame).await,
        Err(ChannelError::ShortRead {
            expected: 2,
            received: 1
        })
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_write_to_closed_peer() {
    let (mut a, b) = in_memory::pair();
    drop(b);
    assert_eq!(a.write_exact(b"A1").await, Err(ChannelError::Closed));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_timeout_applies_per_call() {
    let (a, _b) = in_memory::pair();
    let limit = Duration::from_millis(30);
    let mut a = a.with_timeout(limit);
    let mut frame = [0u8; 1];
    assert_eq!(
        a.read_exact(&mut frame).await,
        Err(ChannelError::TimedOut(limit))
    );
    // Writes into buffer space finish well inside the limit.
    a.write_exact(b"0").await.unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cancel_token_states() {
    let handle = CancelHandle::new();
    let token = handle.token();
    assert!(!token.is_cancelled());
    handle.cancel();
    assert!(token.is_cancelled());
    token.cancelled().await;

    let never = CancelToken::default();
    assert!(!never.is_cancelled());
    let wait = tokio::time::timeout(Duration::from_millis(20), never.cancelled()).await;
    assert!(wait.is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cancelled_channel_refuses_writes() {
    let handle = CancelHandle::new();
    let (a, _b) = in_memory::pair();
    let mut a = a.with_cancel(handle.token());
    handle.cancel();
    assert_eq!(a.write_exact(b"A1").await, Err(ChannelError::Cancelled));
}

#[test]
fn test_io_errors_map_to_channel_errors() {
    use std::io::{Error, ErrorKind};
    assert_eq!(
        ChannelError::from(Error::from(ErrorKind::ConnectionReset)),
        ChannelError::Closed
    );
    assert_eq!(
        ChannelError::from(Error::from(ErrorKind::UnexpectedEof)),
        ChannelError::Closed
    );
    assert_eq!(
        ChannelError::from(Error::from(ErrorKind::PermissionDenied)),
        ChannelError::Io(ErrorKind::PermissionDenied)
    );
}
