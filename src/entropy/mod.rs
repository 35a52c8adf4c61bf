//! Random sources for sampling.
//!
//! The default is a small, fast, non-cryptographic generator seeded once from
//! the OS. `-u` swaps in the operating system's random source for every draw.

use rand::rngs::{OsRng, SmallRng};
use rand::{RngCore, SeedableRng};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Source {
    #[default]
    Fast,
    Os,
}

impl Source {
    pub fn name(self) -> &'static str {
        match self {
            Source::Fast => "SmallRng",
            Source::Os => "OsRng",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Source::Fast => Source::Os,
            Source::Os => Source::Fast,
        }
    }
}

enum Inner {
    Fast(SmallRng),
    Os(OsRng),
}

/// The generator handed to [`crate::pass::generate`].
pub struct Rand {
    source: Source,
    inner: Inner,
}

impl Rand {
    pub fn new(source: Source) -> Self {
        let inner = match source {
            Source::Fast => Inner::Fast(SmallRng::from_entropy()),
            Source::Os => Inner::Os(OsRng),
        };
        Self { source, inner }
    }

    pub fn source(&self) -> Source {
        self.source
    }
}

impl RngCore for Rand {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        match &mut self.inner {
            Inner::Fast(r) => r.next_u32(),
            Inner::Os(r) => r.next_u32(),
        }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        match &mut self.inner {
            Inner::Fast(r) => r.next_u64(),
            Inner::Os(r) => r.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match &mut self.inner {
            Inner::Fast(r) => r.fill_bytes(dest),
            Inner::Os(r) => r.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match &mut self.inner {
            Inner::Fast(r) => r.try_fill_bytes(dest),
            Inner::Os(r) => r.try_fill_bytes(dest),
        }
    }
}
