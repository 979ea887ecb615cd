//! Wire format: two fixed-length ASCII frames and nothing else.
//!
//! | Frame  | Length | Encoding                                   |
//! |--------|--------|--------------------------------------------|
//! | Move   | 2      | `[col letter][row digit]`, e.g. `A1`, `C3` |
//! | Result | 1      | `'0'` miss, `'1'` hit, `'2'` kill          |
//!
//! There is no handshake, length prefix or checksum; framing relies on
//! exact-length reads.

use alloc::vec::Vec;
use thiserror::Error;

use crate::common::{Coordinate, ShotResult};
use crate::config::{FIELD_SIZE, MOVE_FRAME_LEN, RESULT_FRAME_LEN};

pub type MoveFrame = [u8; MOVE_FRAME_LEN];
pub type ResultFrame = [u8; RESULT_FRAME_LEN];

const MISS_CODE: u8 = b'0';
const HIT_CODE: u8 = b'1';
const KILL_CODE: u8 = b'2';

/// Frame content errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("invalid move frame \"{}\"", .0.escape_ascii())]
    InvalidMove(Vec<u8>),
    #[error("unknown result code {:#04x}", .0)]
    UnknownResultCode(u8),
    #[error("cannot encode {0}: outside the field")]
    OutOfRange(Coordinate),
}

pub fn encode_move(target: Coordinate) -> Result<MoveFrame, CodecError> {
    if !target.in_bounds() {
        return Err(CodecError::OutOfRange(target));
    }
    Ok([b'A' + target.col as u8, b'1' + target.row as u8])
}

pub fn decode_move(frame: &[u8]) -> Result<Coordinate, CodecError> {
    let invalid = || CodecError::InvalidMove(frame.to_vec());
    let &[letter, digit] = frame else {
        return Err(invalid());
    };
    let col = letter.wrapping_sub(b'A') as usize;
    let row = digit.wrapping_sub(b'1') as usize;
    if col >= FIELD_SIZE || row >= FIELD_SIZE {
        return Err(invalid());
    }
    Ok(Coordinate::new(row, col))
}

pub fn encode_result(result: ShotResult) -> ResultFrame {
    [match result {
        ShotResult::Miss => MISS_CODE,
        ShotResult::Hit => HIT_CODE,
        ShotResult::Kill => KILL_CODE,
    }]
}

pub fn decode_result(frame: ResultFrame) -> Result<ShotResult, CodecError> {
    match frame[0] {
        MISS_CODE => Ok(ShotResult::Miss),
        HIT_CODE => Ok(ShotResult::Hit),
        KILL_CODE => Ok(ShotResult::Kill),
        other => Err(CodecError::UnknownResultCode(other)),
    }
}

#[cfg(feature = "std")]
pub use io::*;

#[cfg(feature = "std")]
mod io {
    use super::*;
    use crate::error::GameError;
    use crate::transport::Channel;

    /// Send one move frame.
    pub async fn send_move<C: Channel + ?Sized>(
        channel: &mut C,
        target: Coordinate,
    ) -> Result<(), GameError> {
        let frame = encode_move(target)?;
        channel.write_exact(&frame).await?;
        Ok(())
    }

    /// Read exactly one move frame and decode it.
    pub async fn recv_move<C: Channel + ?Sized>(channel: &mut C) -> Result<Coordinate, GameError> {
        let mut frame: MoveFrame = [0; MOVE_FRAME_LEN];
        channel.read_exact(&mut frame).await?;
        Ok(decode_move(&frame)?)
    }

    /// Send one result frame.
    pub async fn send_result<C: Channel + ?Sized>(
        channel: &mut C,
        result: ShotResult,
    ) -> Result<(), GameError> {
        channel.write_exact(&encode_result(result)).await?;
        Ok(())
    }

    /// Read exactly one result frame and decode it.
    pub async fn recv_result<C: Channel + ?Sized>(
        channel: &mut C,
    ) -> Result<ShotResult, GameError> {
        let mut frame: ResultFrame = [0; RESULT_FRAME_LEN];
        channel.read_exact(&mut frame).await?;
        Ok(decode_result(frame)?)
    }
}
