//! Fin flag and opcode.

use crate::error::FrameError;

/// Fin flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fin {
    /// a byte with its leading bit set
    Y = 0x80,

    /// a byte with its leading bit clear
    N = 0x00,
}

/// Frame opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpCode {
    /// denotes a continuation frame, 0x00
    Continue = 0x00,
    /// denotes a text frame, 0x01
    Text = 0x01,
    /// denotes a binary frame, 0x02
    Binary = 0x02,

    /// denotes a connection close, 0x08
    Close = 0x08,
    /// denotes a ping, 0x09
    Ping = 0x09,
    /// denotes a pong, 0x0a
    Pong = 0x0a,
}

/// RSV1, RSV2, RSV3.
pub const RSV_BITS: u8 = 0x70;

impl Fin {
    /// Parse from byte, only the leading bit is read.
    #[inline]
    pub const fn from_flag(b: u8) -> Self {
        match b & 0x80 {
            0x80 => Fin::Y,
            _ => Fin::N,
        }
    }

    #[inline]
    pub const fn is_final(self) -> bool { matches!(self, Fin::Y) }
}

impl OpCode {
    /// Parse from byte, only the low 4 bits are read.
    #[inline]
    pub const fn from_flag(b: u8) -> Result<Self, FrameError> {
        use OpCode::*;
        let opcode = match b & 0x0f {
            0x00 => Continue,
            0x01 => Text,
            0x02 => Binary,
            0x08 => Close,
            0x09 => Ping,
            0x0a => Pong,
            _ => return Err(FrameError::UnsupportedOpcode),
        };
        Ok(opcode)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    macro_rules!  enc_dec {
        ($class: ident $(, $v: expr )+ ) => {
            $(
                let v = $class::from_flag($v).unwrap();
                assert_eq!(v as u8, $v);
            )+
        };
    }

    #[test]
    fn fin() {
        assert_eq!(Fin::from_flag(0x80), Fin::Y);
        assert_eq!(Fin::from_flag(0x81), Fin::Y);
        assert_eq!(Fin::from_flag(0x01), Fin::N);
        assert!(Fin::Y.is_final());
    }

    #[test]
    fn opcode() {
        enc_dec!(OpCode, 0x00, 0x01, 0x02, 0x08, 0x09, 0x0a);
    }

    #[test]
    fn opcode_reserved() {
        for b in [0x03, 0x04, 0x05, 0x06, 0x07, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f] {
            assert_eq!(OpCode::from_flag(b), Err(FrameError::UnsupportedOpcode));
            assert_eq!(OpCode::from_flag(0x80 | b), Err(FrameError::UnsupportedOpcode));
        }
    }
}
