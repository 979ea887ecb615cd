use std::net::SocketAddr;

use tokio::net::{TcpListener, TcpStream, ToSocketAddrs};

use super::StreamChannel;

pub type TcpChannel = StreamChannel<TcpStream>;

impl StreamChannel<TcpStream> {
    /// Actively open a connection to a waiting peer.
    pub async fn connect<A: ToSocketAddrs>(addr: A) -> std::io::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        Self::from_tcp(stream)
    }

    /// Wait for one peer on `listener`.
    pub async fn accept(listener: &TcpListener) -> std::io::Result<(Self, SocketAddr)> {
        let (stream, addr) = listener.accept().await?;
        Ok((Self::from_tcp(stream)?, addr))
    }

    fn from_tcp(stream: TcpStream) -> std::io::Result<Self> {
        // Frames are one or two bytes; do not let Nagle hold them back.
        stream.set_nodelay(true)?;
        Ok(Self::new(stream))
    }

    pub fn peer_addr(&self) -> std::io::Result<SocketAddr> {
        self.get_ref().peer_addr()
    }
}
