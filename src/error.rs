use thiserror::Error;

use crate::game::TurnError;
use crate::protocol::CodecError;
use crate::transport::ChannelError;

/// Why a game was aborted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The peer sent a malformed frame.
    #[error("malformed frame: {0}")]
    Codec(#[from] CodecError),
    #[error("channel failure: {0}")]
    Channel(#[from] ChannelError),
    /// A result code contradicted what we already know about the opponent.
    #[error("inconsistent game state: {0}")]
    Turn(#[from] TurnError),
    #[error("no move available from the local player")]
    NoMove,
}

impl GameError {
    /// `true` for failures of the byte channel rather than of frame content.
    pub fn is_transport(&self) -> bool {
        matches!(self, GameError::Channel(_))
    }
}
