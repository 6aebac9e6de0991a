/// Forward-only cursor over a borrowed buffer.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    #[inline]
    pub const fn new(buf: &'a [u8]) -> Self { Reader { buf, pos: 0 } }

    #[inline]
    pub const fn pos(&self) -> usize { self.pos }

    #[inline]
    pub const fn remaining(&self) -> usize { self.buf.len() - self.pos }

    #[inline]
    pub fn read_byte(&mut self) -> Option<u8> {
        let b = *self.buf.get(self.pos)?;
        self.pos += 1;
        Some(b)
    }

    #[inline]
    pub fn read_slice(&mut self, n: usize) -> Option<&'a [u8]> {
        if self.remaining() < n {
            return None;
        }
        let s = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Some(s)
    }

    #[inline]
    pub fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        let mut out = [0_u8; N];
        out.copy_from_slice(self.read_slice(N)?);
        Some(out)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn read_in_bounds() {
        let buf: Vec<u8> = (0..=255).collect();
        let mut r = Reader::new(&buf);

        assert_eq!(r.read_byte(), Some(0));
        assert_eq!(r.read_array::<2>(), Some([1, 2]));
        assert_eq!(r.read_slice(3), Some(&buf[3..6]));
        assert_eq!(r.pos(), 6);
        assert_eq!(r.remaining(), 250);
    }

    #[test]
    fn read_out_of_bounds() {
        let buf = [0x81_u8, 0xfe, 0x01];
        let mut r = Reader::new(&buf);

        assert_eq!(r.read_array::<4>(), None);
        // a failed read does not move the cursor
        assert_eq!(r.pos(), 0);
        assert_eq!(r.read_slice(3), Some(&buf[..]));
        assert_eq!(r.read_byte(), None);
        assert_eq!(r.read_slice(0), Some(&[][..]));
    }
}
