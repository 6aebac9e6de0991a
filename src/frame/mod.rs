//! Websocket data frame.
//!
//! [RFC-6455 Section5](https://datatracker.ietf.org/doc/html/rfc6455#section-5)
//!
//! ```text
//! 0                   1                   2                   3
//! 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-------+-+-------------+-------------------------------+
//! |F|R|R|R| opcode|M| Payload len |    Extended payload length    |
//! |I|S|S|S|  (4)  |A|     (7)     |             (16/64)           |
//! |N|V|V|V|       |S|             |   (if payload len==126/127)   |
//! | |1|2|3|       |K|             |                               |
//! +-+-+-+-+-------+-+-------------+ - - - - - - - - - - - - - - - +
//! |     Extended payload length continued, if payload len == 127  |
//! + - - - - - - - - - - - - - - - +-------------------------------+
//! |                               |Masking-key, if MASK set to 1  |
//! +-------------------------------+-------------------------------+
//! | Masking-key (continued)       |          Payload Data         |
//! +-------------------------------- - - - - - - - - - - - - - - - +
//! :                     Payload Data continued ...                :
//! + - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - +
//! |                     Payload Data continued ...                |
//! +---------------------------------------------------------------+
//! ```
//!
//! [`make_frame`] builds unmasked frames (server to client),
//! [`extract_payload`] and [`parse_frame`] read frames in either direction
//! and remove the mask in place.

pub mod flag;
pub mod kind;
pub mod length;
pub mod mask;

pub use flag::{Fin, OpCode};
pub use kind::{FrameType, Options};
pub use length::PayloadLen;
pub use mask::Mask;

use log::{debug, trace};

use flag::RSV_BITS;
use crate::cursor::{Reader, Writer};
use crate::error::FrameError;

/// 2 + 8 + 4
pub const MAX_FRAME_HEAD_LEN: usize = 14;

/// Websocket frame head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHead {
    pub fin: Fin,
    pub opcode: OpCode,
    pub mask: Mask,
    pub length: PayloadLen,
}

impl FrameHead {
    /// Constructor.
    #[inline]
    pub const fn new(fin: Fin, opcode: OpCode, mask: Mask, length: PayloadLen) -> Self {
        Self {
            fin,
            opcode,
            mask,
            length,
        }
    }

    /// Encoded size: 2, 4 or 10 bytes, plus 4 if masked.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize { 2 + self.length.ext_len() + self.mask.key_len() }

    /// Encode to provided buffer, returns the count of written bytes.
    /// The caller should ensure the buffer is large enough,
    /// otherwise a [`FrameError::NotEnoughCapacity`] error will be returned.
    pub fn encode(&self, buf: &mut [u8]) -> Result<usize, FrameError> {
        let mut writer = Writer::new(buf);

        macro_rules! writex {
            ($src: expr) => {
                writer.write_or_err($src, || FrameError::NotEnoughCapacity)?
            };
        }

        // fin, opcode
        let b1 = self.fin as u8 | self.opcode as u8;

        // mask, payload length
        let b2 = self.mask.to_flag() | self.length.to_flag();

        writex!(&[b1, b2]);

        // extended payload length
        match &self.length {
            PayloadLen::Standard(_) => 0,
            PayloadLen::Extended1(v) => writex!(&v.to_be_bytes()),
            PayloadLen::Extended2(v) => writex!(&v.to_be_bytes()),
        };

        // mask key
        match &self.mask {
            Mask::Key(k) => writex!(k),
            Mask::Skip => writex!(&[0u8; 4]),
            Mask::None => 0,
        };

        Ok(writer.pos())
    }

    /// Parse from provided buffer, returns [`FrameHead`] and the count of read bytes
    /// if the parse succeeds.
    /// If there is not enough data to parse, a [`FrameError::Incomplete`] error
    /// will be returned.
    pub fn decode(buf: &[u8]) -> Result<(Self, usize), FrameError> {
        let mut reader = Reader::new(buf);

        macro_rules! readx {
            ($read: expr) => {
                $read.ok_or(FrameError::Incomplete)?
            };
        }

        // fin, opcode
        let b1 = readx!(reader.read_byte());

        // mask, payload length
        let b2 = readx!(reader.read_byte());

        if b1 & RSV_BITS != 0 {
            return Err(FrameError::IllegalRsv);
        }

        let fin = Fin::from_flag(b1);
        let opcode = OpCode::from_flag(b1)?;

        // branch on the marker value, never on a range
        let length = match PayloadLen::from_flag(b2) {
            length @ PayloadLen::Standard(_) => length,
            PayloadLen::Extended1(_) => PayloadLen::from_byte2(readx!(reader.read_array())),
            PayloadLen::Extended2(_) => {
                let length = PayloadLen::from_byte8(readx!(reader.read_array()));
                // the most significant bit must be 0
                if length.to_num() >> 63 != 0 {
                    return Err(FrameError::TooLarge);
                }
                length
            }
        };

        let mask = match Mask::from_flag(b2) {
            Mask::None => Mask::None,
            _ => Mask::from_key(readx!(reader.read_array())),
        };

        Ok((
            FrameHead {
                fin,
                opcode,
                mask,
                length,
            },
            reader.pos(),
        ))
    }
}

/// A decoded frame, borrowing its payload from the input buffer.
#[derive(Debug, PartialEq, Eq)]
pub struct Frame<'a> {
    pub fin: Fin,
    pub frame_type: FrameType,
    /// Unmasked payload.
    pub payload: &'a mut [u8],
    /// Head and payload, the number of bytes to advance past this frame.
    pub frame_len: usize,
}

/// Build a complete unmasked frame: head immediately followed by payload.
///
/// Empty payloads are rejected with [`FrameError::EmptyPayload`];
/// use [`FrameHead::encode`] to build an empty control frame.
/// `options` must be exactly [`Options::FINAL_FRAME`] or [`Options::NONE`].
pub fn make_frame(
    payload: &[u8],
    frame_type: FrameType,
    options: Options,
) -> Result<Vec<u8>, FrameError> {
    if payload.is_empty() {
        debug!("refuse to make {:?} frame: empty payload", frame_type);
        return Err(FrameError::EmptyPayload);
    }

    let fin = options.fin()?;
    let opcode = frame_type.to_opcode()?;

    let head = FrameHead::new(
        fin,
        opcode,
        Mask::None,
        PayloadLen::from_num(payload.len() as u64),
    );

    let mut frame = vec![0_u8; head.len() + payload.len()];
    let head_len = head.encode(&mut frame)?;
    frame[head_len..].copy_from_slice(payload);

    trace!(
        "make {:?} frame, head {} bytes, payload {} bytes",
        frame_type,
        head_len,
        payload.len()
    );

    Ok(frame)
}

/// Classify a frame by its opcode.
///
/// Fewer than 2 bytes gives [`FrameType::Incomplete`],
/// a reserved opcode gives [`FrameType::Error`].
pub fn parse_frame_type(buf: &[u8]) -> FrameType {
    let b1 = match buf {
        [b1, _, ..] => *b1,
        _ => return FrameType::Incomplete,
    };

    match OpCode::from_flag(b1) {
        Ok(opcode) => {
            trace!("frame type: {:?}", opcode);
            opcode.into()
        }
        Err(e) => {
            debug!("frame type: {}, byte {:#04x}", e, b1);
            FrameType::Error
        }
    }
}

/// Decode a frame, unmask its payload in place and return it.
///
/// The payload length is the length of the returned slice.
/// See [`parse_frame`] for the effect on `buf`.
pub fn extract_payload(buf: &mut [u8]) -> Result<&mut [u8], FrameError> {
    parse_frame(buf).map(|frame| frame.payload)
}

/// Decode a frame at the start of `buf`.
///
/// The payload is unmasked in place and the mask key in `buf` is
/// zeroed, so the bytes left behind form the same frame with a
/// zero key and decoding them again yields the same payload.
///
/// If the head is cut short, a [`FrameError::Incomplete`] error is returned;
/// if the declared payload does not fit in `buf`, a
/// [`FrameError::TruncatedPayload`] error is returned. `buf` is left
/// untouched in both cases.
pub fn parse_frame(buf: &mut [u8]) -> Result<Frame<'_>, FrameError> {
    let (head, head_len) = FrameHead::decode(buf)?;

    let payload_len = usize::try_from(head.length.to_num()).map_err(|_| FrameError::TooLarge)?;

    let available = buf.len() - head_len;
    if available < payload_len {
        debug!(
            "truncated payload: declared {}, available {}",
            payload_len, available
        );
        return Err(FrameError::TruncatedPayload);
    }

    let frame_len = head_len + payload_len;
    let (head_buf, rest) = buf.split_at_mut(head_len);
    let payload = &mut rest[..payload_len];

    if let Mask::Key(_) = head.mask {
        mask::unmask(head.mask, payload);
        head_buf[head_len - 4..].fill(0);
    }

    trace!(
        "parse {:?} frame, fin {:?}, head {} bytes, payload {} bytes",
        head.opcode,
        head.fin,
        head_len,
        payload_len
    );

    Ok(Frame {
        fin: head.fin,
        frame_type: head.opcode.into(),
        payload,
        frame_len,
    })
}
