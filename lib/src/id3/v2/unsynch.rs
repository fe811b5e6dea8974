use std::io::{self, Read};

/// Reader that undoes ID3v2 unsynchronisation.
///
/// Every `0x00` directly following a `0xFF` is dropped. Whether the last byte handed
/// out was `0xFF` is remembered between calls, so the result does not depend on how
/// the reads are split.
pub struct Unsynchroniser<R> {
    inner: R,
    last_ff: bool,
}

impl<R> Unsynchroniser<R>
where
    R: Read,
{
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            last_ff: false,
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R> Read for Unsynchroniser<R>
where
    R: Read,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            let read = self.inner.read(buf)?;
            if read == 0 {
                return Ok(0);
            }

            // filter in place, `written` never overtakes `idx`
            let mut written = 0;
            for idx in 0..read {
                let byte = buf[idx];
                if self.last_ff && byte == 0x00 {
                    self.last_ff = false;
                    continue;
                }

                buf[written] = byte;
                written += 1;
                self.last_ff = byte == 0xFF;
            }

            // a lone dropped zero is not the end of the stream
            if written > 0 {
                return Ok(written);
            }
        }
    }
}
