//! Scalar adapters: none, booleans, characters and text.

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt::{self, Write};

use crate::error::TypeIdentity;
use crate::sink::Sink;
use crate::traits::{Conversions, Number, ValueTraits};
use crate::value::{Adapter, Capability};

/// A non-numeric, non-sequence value.
///
/// Scalars of the same kind compare natively. Scalars of different kinds
/// share no canonical coercion, so they only meet in the text fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VScalar<'a> {
    /// Absence of a value.
    None,
    /// A boolean.
    Boolean(bool),
    /// A single character.
    Character(char),
    /// Text, borrowed from the host or owned by the adapter.
    Text(Cow<'a, str>),
}

impl VScalar<'_> {
    /// Detaches borrowed text from the host.
    #[must_use]
    pub fn into_owned(self) -> VScalar<'static> {
        match self {
            VScalar::None => VScalar::None,
            VScalar::Boolean(b) => VScalar::Boolean(b),
            VScalar::Character(c) => VScalar::Character(c),
            VScalar::Text(text) => VScalar::Text(Cow::Owned(text.into_owned())),
        }
    }

    /// The text, if this is a text scalar.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            VScalar::Text(text) => Some(&**text),
            _ => None,
        }
    }

    pub(crate) fn equal_exact(&self, other: &VScalar<'_>) -> bool {
        match (self, other) {
            (VScalar::None, VScalar::None) => true,
            (VScalar::Boolean(a), VScalar::Boolean(b)) => a == b,
            (VScalar::Character(a), VScalar::Character(b)) => a == b,
            (VScalar::Text(a), VScalar::Text(b)) => **a == **b,
            _ => false,
        }
    }

    pub(crate) fn less_exact(&self, other: &VScalar<'_>) -> bool {
        match (self, other) {
            (VScalar::Boolean(a), VScalar::Boolean(b)) => a < b,
            (VScalar::Character(a), VScalar::Character(b)) => a < b,
            (VScalar::Text(a), VScalar::Text(b)) => **a < **b,
            _ => false,
        }
    }
}

impl Adapter for VScalar<'_> {
    fn capability(&self) -> Capability {
        Capability::Scalar
    }

    fn type_identity(&self) -> TypeIdentity {
        match self {
            VScalar::None => TypeIdentity::of::<()>(),
            VScalar::Boolean(_) => TypeIdentity::of::<bool>(),
            VScalar::Character(_) => TypeIdentity::of::<char>(),
            VScalar::Text(_) => TypeIdentity::of::<str>(),
        }
    }

    fn to_boolean(&self) -> bool {
        match self {
            VScalar::None => false,
            VScalar::Boolean(b) => *b,
            VScalar::Character(c) => *c != '\0',
            VScalar::Text(text) => !text.is_empty(),
        }
    }

    fn to_number(&self) -> Number {
        match self {
            VScalar::None => 0.0,
            VScalar::Boolean(b) => Number::from(u8::from(*b)),
            VScalar::Character(c) => Conversions::to_number(c).unwrap_or(0.0),
            VScalar::Text(text) => Conversions::to_number::<str>(text).unwrap_or(0.0),
        }
    }

    fn to_text(&self, sink: &mut Sink<'_>) -> fmt::Result {
        match self {
            VScalar::None => Ok(()),
            VScalar::Boolean(true) => sink.write_str("true"),
            VScalar::Boolean(false) => sink.write_str("false"),
            VScalar::Character(c) => sink.write_char(*c),
            VScalar::Text(text) => sink.write_str(text),
        }
    }
}

impl From<bool> for VScalar<'_> {
    fn from(b: bool) -> Self {
        VScalar::Boolean(b)
    }
}

impl From<char> for VScalar<'_> {
    fn from(c: char) -> Self {
        VScalar::Character(c)
    }
}

impl<'a> From<&'a str> for VScalar<'a> {
    fn from(text: &'a str) -> Self {
        VScalar::Text(Cow::Borrowed(text))
    }
}

impl From<String> for VScalar<'_> {
    fn from(text: String) -> Self {
        VScalar::Text(Cow::Owned(text))
    }
}

impl<'a> From<Cow<'a, str>> for VScalar<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        VScalar::Text(text)
    }
}
