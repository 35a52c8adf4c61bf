//! CLI context - bundles flags, generator config and the random source.

use std::ffi::OsString;
use std::io;

use clap::Parser;

use super::{CliFlags, Error, prompts, quiet};
use crate::entropy::{Rand, Source};
use crate::pass::output::{DisplaySlot, LineSlot, SecureBufWriter};
use crate::pass::{self, alphabet};
use crate::settings::{GeneratorConfig, Length};

/// Application context for CLI mode.
pub struct Context {
    pub config: GeneratorConfig,
    pub flags: CliFlags,
    rng: Rand,
}

impl Context {
    pub fn from_args<I, T>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let flags = CliFlags::try_parse_from(args)?;
        Ok(Self::new(flags))
    }

    pub fn new(flags: CliFlags) -> Self {
        let source = if flags.urandom {
            Source::Os
        } else {
            Source::Fast
        };
        let mut ctx = Self {
            config: GeneratorConfig::default(),
            rng: Rand::new(source),
            flags,
        };
        ctx.apply_flags();
        ctx
    }

    /// Print the requested passwords to stdout.
    pub fn run(&mut self) -> Result<(), Error> {
        quiet::set(self.flags.quiet);
        self.report_length();

        if self.flags.verbose {
            prompts::summary(
                self.config.length.count(),
                alphabet::pool(&self.config).len(),
                self.rng.source(),
            );
        }

        let stdout = io::stdout();
        let mut slot = LineSlot::new(SecureBufWriter::new(stdout.lock()));
        match self.write_to(&mut slot) {
            Err(Error::Output(e)) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            other => other,
        }
    }

    pub fn write_to<S: DisplaySlot + ?Sized>(&mut self, slot: &mut S) -> Result<(), Error> {
        pass::generate_batch(&self.config, self.flags.number, &mut self.rng, slot)?;
        Ok(())
    }

    fn apply_flags(&mut self) {
        if let Some(ref raw) = self.flags.length {
            self.config.set_length(raw);
        }
        if self.flags.letters_only {
            self.config.include_symbols_and_numbers = false;
        }
        for _ in 0..self.flags.toggle {
            self.config.toggle_symbols_and_numbers();
        }
    }

    fn report_length(&self) {
        let Some(ref raw) = self.flags.length else {
            return;
        };
        match self.config.length {
            Length::NotANumber => prompts::length_not_a_number(raw),
            Length::Negative => prompts::length_negative(raw),
            Length::Chars(_) => {}
        }
    }
}
