//! The conversion trait bundle.
//!
//! Every adapter and every engine converts text, numbers and character
//! widths through the functions here, so behaviour stays identical wherever a
//! conversion happens. Engine code is written once against [`ValueTraits`]
//! and instantiated at whatever working character width it needs:
//!
//! ```
//! use synth_value::{DefaultTraits, ValueTraits};
//!
//! fn open_tag<T: ValueTraits>() -> Vec<T::Char> {
//!     T::literal("{%")
//! }
//!
//! assert_eq!(open_tag::<DefaultTraits<u16>>(), vec![0x7b, 0x25]);
//! assert_eq!(open_tag::<DefaultTraits<char>>(), vec!['{', '%']);
//! ```
//!
//! The text round trip in [`ValueTraits::to`] and the element-by-element
//! width conversion in [`ValueTraits::transcode`] are deliberately crude:
//! precision follows default formatting, and width conversion is not a
//! Unicode transcoder.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{Debug, Display, Write};
use core::marker::PhantomData;
use core::str::FromStr;

use crate::error::ConversionError;

/// Canonical numeric currency shared by every numeric kind.
pub type Number = f64;

/// Text at working width `C`.
pub type Text<C> = Vec<C>;

/// A code unit at some fixed character width.
pub trait Character: Copy + Eq + Ord + Debug + Send + Sync + 'static {
    /// Builds a unit from a code, keeping only the bits this width holds.
    ///
    /// For `char`, codes that are not scalar values become
    /// [`char::REPLACEMENT_CHARACTER`].
    fn from_code(code: u32) -> Self;

    /// The numeric code of this unit.
    fn code(self) -> u32;

    /// Converts a Unicode scalar, or returns `None` if it does not fit.
    fn from_char(c: char) -> Option<Self>;
}

impl Character for u8 {
    fn from_code(code: u32) -> Self {
        code as u8
    }

    fn code(self) -> u32 {
        u32::from(self)
    }

    fn from_char(c: char) -> Option<Self> {
        u8::try_from(c).ok()
    }
}

impl Character for u16 {
    fn from_code(code: u32) -> Self {
        code as u16
    }

    fn code(self) -> u32 {
        u32::from(self)
    }

    fn from_char(c: char) -> Option<Self> {
        u16::try_from(c).ok()
    }
}

impl Character for u32 {
    fn from_code(code: u32) -> Self {
        code
    }

    fn code(self) -> u32 {
        self
    }

    fn from_char(c: char) -> Option<Self> {
        Some(u32::from(c))
    }
}

impl Character for char {
    fn from_code(code: u32) -> Self {
        char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    fn code(self) -> u32 {
        u32::from(self)
    }

    fn from_char(c: char) -> Option<Self> {
        Some(c)
    }
}

/// Text, number and character-width conversions at one working width.
///
/// All methods are provided; implementors only pick [`ValueTraits::Char`].
pub trait ValueTraits: 'static {
    /// Working character width.
    type Char: Character;

    /// Converts by formatting `from` as text and parsing `To` back.
    ///
    /// Parsing behaves like stream extraction: leading whitespace is
    /// skipped and the longest prefix of the first token that parses as `To`
    /// is taken. `"12 apples"` and `"12apples"` both convert to `12`, and
    /// `2.5` converts to the integer `2`. A word is never split, so
    /// `"nancy"` does not become a float NaN.
    ///
    /// # Errors
    ///
    /// Returns a [`ConversionError`] if formatting fails, the rendering is
    /// blank, or no prefix of the token parses as `To`.
    fn to<To, Src>(from: &Src) -> Result<To, ConversionError>
    where
        To: FromStr + 'static,
        Src: Display + ?Sized + 'static,
    {
        let mut rendered = String::new();
        if write!(rendered, "{from}").is_err() {
            return Err(ConversionError::new::<Src, To>());
        }
        rendered
            .split_whitespace()
            .next()
            .and_then(extract_prefix)
            .ok_or_else(ConversionError::new::<Src, To>)
    }

    /// Formats `from` as text at the working width.
    ///
    /// # Errors
    ///
    /// Returns a [`ConversionError`] if formatting fails or a rendered
    /// character does not fit the working width.
    fn to_text<Src>(from: &Src) -> Result<Text<Self::Char>, ConversionError>
    where
        Src: Display + ?Sized + 'static,
    {
        let mut rendered = String::new();
        write!(rendered, "{from}")
            .map_err(|_| ConversionError::new::<Src, Text<Self::Char>>())?;
        rendered
            .chars()
            .map(Self::Char::from_char)
            .collect::<Option<Text<Self::Char>>>()
            .ok_or_else(ConversionError::new::<Src, Text<Self::Char>>)
    }

    /// Converts `from` to the canonical [`Number`].
    ///
    /// # Errors
    ///
    /// Same as [`ValueTraits::to`].
    fn to_number<Src>(from: &Src) -> Result<Number, ConversionError>
    where
        Src: Display + ?Sized + 'static,
    {
        Self::to::<Number, Src>(from)
    }

    /// Builds a constant string at the working width from a narrow literal.
    fn literal(text: &str) -> Text<Self::Char> {
        Self::widen(text.as_bytes())
    }

    /// Converts text between widths one unit at a time.
    ///
    /// Wider units are truncated to the destination width, narrower ones are
    /// zero-extended. No attempt is made to preserve Unicode meaning.
    fn transcode<To: Character, Src: Character>(text: &[Src]) -> Text<To> {
        text.iter().map(|unit| To::from_code(unit.code())).collect()
    }

    /// Converts working-width text to 8-bit units.
    fn narrow(text: &[Self::Char]) -> Text<u8> {
        Self::transcode::<u8, Self::Char>(text)
    }

    /// Converts 8-bit units to working-width text.
    fn widen(text: &[u8]) -> Text<Self::Char> {
        Self::transcode::<Self::Char, u8>(text)
    }
}

/// Parses the longest prefix of `token` that `To` accepts.
///
/// Cuts inside a run of letters are skipped.
fn extract_prefix<To: FromStr>(token: &str) -> Option<To> {
    let mut cuts: Vec<usize> = token.char_indices().map(|(at, _)| at).skip(1).collect();
    cuts.push(token.len());
    cuts.into_iter().rev().find_map(|end| {
        let (head, tail) = token.split_at(end);
        let splits_word =
            head.ends_with(char::is_alphabetic) && tail.starts_with(char::is_alphabetic);
        if splits_word {
            None
        } else {
            head.parse().ok()
        }
    })
}

/// The stock [`ValueTraits`] instantiation for working width `C`.
#[derive(Debug, Clone, Copy)]
pub struct DefaultTraits<C = char>(PhantomData<fn() -> C>);

impl<C: Character> ValueTraits for DefaultTraits<C> {
    type Char = C;
}

/// Bundle the adapters themselves convert through.
pub(crate) type Conversions = DefaultTraits<char>;
