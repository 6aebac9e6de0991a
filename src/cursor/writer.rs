/// Forward-only cursor over a caller provided buffer.
pub struct Writer<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> Writer<'a> {
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self { Writer { buf, pos: 0 } }

    #[inline]
    pub const fn pos(&self) -> usize { self.pos }

    #[inline]
    pub fn remaining(&self) -> usize { self.buf.len() - self.pos }

    /// Copy `src` to the buffer, or return the error made by `f`
    /// if it does not fit. Nothing is written on failure.
    #[inline]
    pub fn write_or_err<F, E>(&mut self, src: &[u8], f: F) -> Result<usize, E>
    where
        F: Fn() -> E,
        E: std::error::Error,
    {
        let len = src.len();
        if self.remaining() < len {
            return Err(f());
        }
        self.buf[self.pos..self.pos + len].copy_from_slice(src);
        self.pos += len;
        Ok(len)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::FrameError;

    #[test]
    fn write_until_full() {
        let mut buf = vec![0; 4096];
        let data: Vec<u8> = std::iter::repeat(rand::random::<u8>()).take(1000).collect();

        let mut writer = Writer::new(&mut buf);
        for _ in 0..4 {
            let n = writer
                .write_or_err(&data, || FrameError::NotEnoughCapacity)
                .unwrap();
            assert_eq!(n, 1000);
        }
        assert_eq!(writer.pos(), 4000);
        assert_eq!(writer.remaining(), 96);

        let err = writer.write_or_err(&data, || FrameError::NotEnoughCapacity);
        assert_eq!(err, Err(FrameError::NotEnoughCapacity));
        assert_eq!(writer.pos(), 4000);

        assert_eq!(&buf[..1000], &data[..]);
        assert_eq!(&buf[3000..4000], &data[..]);
    }
}
