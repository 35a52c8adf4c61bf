//! Password generation.

use std::fmt;
use std::ops::Deref;

use rand::Rng;
use zeroize::Zeroizing;

use super::alphabet;
use super::output::DisplaySlot;
use crate::settings::GeneratorConfig;

const PREALLOC_LIMIT: usize = 4096;

/// A generated password. The buffer is wiped when dropped.
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Password {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password({} chars)", self.0.len())
    }
}

/// Sample `config.length` characters from the active pool, with replacement.
pub fn generate<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Password {
    let chars = alphabet::pool(config);
    let length = config.length.count();

    // Length has no upper bound, so don't trust it for the allocation.
    let mut buf = Zeroizing::new(String::with_capacity(length.min(PREALLOC_LIMIT)));
    for _ in 0..length {
        if buf.len() == buf.capacity() {
            grow(&mut buf);
        }
        buf.push(random_char(chars, rng));
    }
    Password(buf)
}

/// Double the capacity without letting `String` reallocate, so the old block
/// is wiped before it is freed.
fn grow(buf: &mut Zeroizing<String>) {
    let mut bigger = Zeroizing::new(String::with_capacity(buf.capacity().max(1) * 2));
    bigger.push_str(buf.as_str());
    *buf = bigger;
}

/// Clear `slot` and show one freshly generated password in it.
pub fn generate_into<R, S>(
    config: &GeneratorConfig,
    rng: &mut R,
    slot: &mut S,
) -> std::io::Result<()>
where
    R: Rng,
    S: DisplaySlot + ?Sized,
{
    generate_batch(config, 1, rng, slot)
}

/// Clear `slot`, then show `count` passwords in it one after another.
pub fn generate_batch<R, S>(
    config: &GeneratorConfig,
    count: usize,
    rng: &mut R,
    slot: &mut S,
) -> std::io::Result<()>
where
    R: Rng,
    S: DisplaySlot + ?Sized,
{
    slot.clear()?;
    for _ in 0..count {
        let pass = generate(config, rng);
        slot.show(&pass)?;
    }
    slot.flush()
}

#[inline]
fn random_char<R: Rng>(chars: &[u8], rng: &mut R) -> char {
    chars[rng.gen_range(0..chars.len())] as char
}
