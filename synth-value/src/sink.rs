//! Text sink that adapters render themselves into.

use core::fmt::{self, Debug, Formatter, Write};

/// Base used when rendering integral quantities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Radix {
    /// Base 10.
    #[default]
    Decimal,
    /// Base 16, lowercase digits.
    Hex,
}

/// Rendering options carried by a [`Sink`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SinkOptions {
    /// Base for integral output.
    pub radix: Radix,
    /// Digits after the decimal point for non-integral floating values.
    /// `None` uses the shortest representation that round-trips.
    pub precision: Option<usize>,
}

impl SinkOptions {
    /// Options selecting hexadecimal output.
    ///
    /// Negative numbers print as two's complement at the width of their host
    /// kind; floats are truncated toward zero first.
    #[must_use]
    pub const fn hex() -> Self {
        Self {
            radix: Radix::Hex,
            precision: None,
        }
    }

    /// Returns these options with a fixed floating precision.
    #[must_use]
    pub const fn with_precision(self, precision: usize) -> Self {
        Self {
            precision: Some(precision),
            ..self
        }
    }
}

/// Where a value writes its human-readable rendering.
///
/// A sink wraps any [`fmt::Write`] together with the [`SinkOptions`] the
/// caller asked for. Adapters read the options, engines pick them.
pub struct Sink<'w> {
    out: &'w mut dyn Write,
    options: SinkOptions,
}

impl<'w> Sink<'w> {
    /// Creates a sink with default options.
    pub fn new(out: &'w mut dyn Write) -> Self {
        Self::with_options(out, SinkOptions::default())
    }

    /// Creates a sink with explicit options.
    pub fn with_options(out: &'w mut dyn Write, options: SinkOptions) -> Self {
        Self { out, options }
    }

    /// The options this sink was created with.
    #[must_use]
    pub fn options(&self) -> SinkOptions {
        self.options
    }

    /// Returns `true` if hexadecimal output was requested.
    #[must_use]
    pub fn is_hex(&self) -> bool {
        self.options.radix == Radix::Hex
    }

    /// Requested floating precision, if any.
    #[must_use]
    pub fn precision(&self) -> Option<usize> {
        self.options.precision
    }
}

impl Write for Sink<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.out.write_str(s)
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.out.write_char(c)
    }
}

impl Debug for Sink<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
