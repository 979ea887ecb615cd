use tokio::io::{duplex, DuplexStream};

use super::StreamChannel;

pub type InMemoryChannel = StreamChannel<DuplexStream>;

/// Buffer size of each direction of the in-memory pipe.
const PIPE_CAPACITY: usize = 64;

/// Two connected channels. Dropping one makes reads on the other report
/// the peer as closed.
pub fn pair() -> (InMemoryChannel, InMemoryChannel) {
    let (a, b) = duplex(PIPE_CAPACITY);
    (StreamChannel::new(a), StreamChannel::new(b))
}
