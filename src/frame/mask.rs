//!  Mask flag, key and the masking engine.

/// Payload mask with a 32-bit key.
///
/// `Mask::Skip` is used by server side to skip unmask
/// if mask key equals 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mask {
    Key([u8; 4]),
    Skip,
    None,
}

impl Mask {
    /// Read the flag which indicates whether mask is used.
    /// The key itself follows the length field.
    #[inline]
    pub const fn from_flag(b: u8) -> Self {
        match b & 0x80 {
            0x80 => Mask::Skip,
            _ => Mask::None,
        }
    }

    /// Build from a key read off the wire.
    #[inline]
    pub fn from_key(key: [u8; 4]) -> Self {
        if key.iter().all(|b| *b == 0) {
            Mask::Skip
        } else {
            Mask::Key(key)
        }
    }

    /// Get the flag byte.
    #[inline]
    pub const fn to_flag(&self) -> u8 {
        use Mask::*;
        match self {
            Key(_) | Skip => 0x80,
            None => 0x00,
        }
    }

    /// Number of key bytes on the wire: 0 or 4.
    #[inline]
    pub const fn key_len(&self) -> usize {
        match self {
            Mask::None => 0,
            _ => 4,
        }
    }
}

/// Generate a new random key.
#[inline]
pub fn new_mask_key() -> [u8; 4] { rand::random::<[u8; 4]>() }

/// Mask the buffer, byte by byte.
#[inline]
pub fn apply_mask(key: [u8; 4], buf: &mut [u8]) {
    for (i, b) in buf.iter_mut().enumerate() {
        *b ^= key[i & 0x03];
    }
}

/// Mask the buffer, 4 bytes at a time.
#[inline]
pub fn apply_mask4(key: [u8; 4], buf: &mut [u8]) {
    let key4 = u32::from_ne_bytes(key);

    let mut chunks = buf.chunks_exact_mut(4);
    for b4 in &mut chunks {
        let v = u32::from_ne_bytes([b4[0], b4[1], b4[2], b4[3]]) ^ key4;
        b4.copy_from_slice(&v.to_ne_bytes());
    }

    // the remainder starts at a multiple of 4, key offset is 0
    apply_mask(key, chunks.into_remainder());
}

cfg_if::cfg_if! {
    if #[cfg(feature = "bytewise_mask")] {
        /// Remove the mask in place. No-op for [`Mask::Skip`] and [`Mask::None`].
        #[inline]
        pub fn unmask(mask: Mask, buf: &mut [u8]) {
            if let Mask::Key(key) = mask {
                apply_mask(key, buf);
            }
        }
    } else {
        /// Remove the mask in place. No-op for [`Mask::Skip`] and [`Mask::None`].
        #[inline]
        pub fn unmask(mask: Mask, buf: &mut [u8]) {
            if let Mask::Key(key) = mask {
                apply_mask4(key, buf);
            }
        }
    }
}
