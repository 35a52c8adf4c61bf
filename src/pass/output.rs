//! Display slots: where generated passwords end up.

use std::io::{self, Write};

use zeroize::Zeroize;

use super::Password;

const DEFAULT_CAPACITY: usize = 8 * 1024;

/// An output target for generated passwords.
pub trait DisplaySlot {
    /// Drop whatever the slot is currently showing.
    fn clear(&mut self) -> io::Result<()>;

    fn show(&mut self, password: &Password) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writes each password on its own line. Clearing is a no-op since written
/// lines can't be taken back.
pub struct LineSlot<W: Write> {
    out: W,
}

impl<W: Write> LineSlot<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySlot for LineSlot<W> {
    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn show(&mut self, password: &Password) -> io::Result<()> {
        self.out.write_all(password.as_bytes())?;
        self.out.write_all(b"\n")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Buffered writer that zeroes its buffer every time it is written out and
/// again on drop, so passwords don't linger in freed heap memory.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, inner)
    }

    pub fn with_capacity(capacity: usize, inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(capacity),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let result = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        result
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > self.buf.capacity() {
            self.flush_buf()?;
        }
        // Too big to buffer; going straight through avoids a reallocation.
        if data.len() >= self.buf.capacity() {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush_buf();
        self.buf.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use std::hint::black_box;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::pass::generate;
    use crate::pass::wipe_check::unwiped_frees;
    use crate::settings::GeneratorConfig;

    fn spare_is_zeroed(buf: &Vec<u8>) -> bool {
        // Zeroize writes zeros over the whole capacity, so it is initialized.
        let all = unsafe { std::slice::from_raw_parts(buf.as_ptr(), buf.capacity()) };
        all.iter().all(|&b| b == 0)
    }

    #[test]
    fn secure_writer_zeroes_after_flush() {
        let mut out = Vec::new();
        let mut writer = SecureBufWriter::with_capacity(64, &mut out);
        writer.write_all(b"hunter2\n").unwrap();
        assert_eq!(writer.buf, b"hunter2\n");

        writer.flush().unwrap();
        assert!(writer.buf.is_empty());
        assert_eq!(writer.buf.capacity(), 64);
        assert!(spare_is_zeroed(&writer.buf));

        drop(writer);
        assert_eq!(out, b"hunter2\n");
    }

    #[test]
    fn secure_writer_flushes_when_full() {
        let mut out = Vec::new();
        {
            let mut writer = SecureBufWriter::with_capacity(8, &mut out);
            writer.write_all(b"abcde").unwrap();
            writer.write_all(b"fghij").unwrap();
            assert_eq!(writer.buf, b"fghij");
            writer.write_all(b"0123456789").unwrap();
            assert!(writer.buf.is_empty());
        }
        assert_eq!(out, b"abcdefghij0123456789");
    }

    #[test]
    fn secure_writer_leaves_nothing_behind() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut config = GeneratorConfig::default();
        config.set_length("40");

        let unwiped = unwiped_frees(|| {
            let mut slot = LineSlot::new(SecureBufWriter::new(io::sink()));
            for _ in 0..500 {
                slot.show(&generate(&config, &mut rng)).unwrap();
            }
            slot.flush().unwrap();
            drop(black_box(slot));
        });
        assert_eq!(unwiped, 0);
    }

    #[test]
    fn line_per_password() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = GeneratorConfig::default();
        let mut slot = LineSlot::new(Vec::new());

        let first = generate(&config, &mut rng);
        let second = generate(&config, &mut rng);
        slot.show(&first).unwrap();
        slot.show(&second).unwrap();

        let expected = format!("{}\n{}\n", first.as_str(), second.as_str());
        assert_eq!(slot.into_inner(), expected.into_bytes());
    }

    #[test]
    fn empty_password_is_empty_line() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut config = GeneratorConfig::default();
        config.set_length("0");
        let mut slot = LineSlot::new(Vec::new());
        slot.show(&generate(&config, &mut rng)).unwrap();
        assert_eq!(slot.into_inner(), b"\n");
    }
}
