//! The value contract and the comparison protocol.

use alloc::string::String;
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter, LowerHex};

use crate::adapt::Adaptable;
use crate::array::{Iter, VSequence};
use crate::error::TypeIdentity;
use crate::number::VNumber;
use crate::scalar::VScalar;
use crate::sink::{Sink, SinkOptions};
use crate::traits::Number;

/// Capability marker used when two values differ in concrete kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Compares through the canonical [`Number`].
    Numeric,
    /// Compares element by element.
    Sequence,
    /// No shared coercion; only exact kinds compare natively.
    Scalar,
}

/// Operations every adapter kind provides.
///
/// All of them are total: rendering can only fail if the sink's underlying
/// writer does.
pub trait Adapter {
    /// The capability class this adapter belongs to.
    fn capability(&self) -> Capability;

    /// Token for the exact host kind being adapted.
    fn type_identity(&self) -> TypeIdentity;

    /// Truthiness.
    fn to_boolean(&self) -> bool;

    /// Canonical numeric coercion.
    fn to_number(&self) -> Number;

    /// Writes a human-readable rendering into `sink`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the writer behind `sink`.
    fn to_text(&self, sink: &mut Sink<'_>) -> fmt::Result;
}

/// A host value seen through the value contract.
///
/// `'a` is the lifetime of the host data a value borrows. Values over
/// shared buffers or owned text are `Value<'static>`.
///
/// # Comparison
///
/// [`Value::equal`] and [`Value::less`] dispatch in three tiers, stopping at
/// the first that applies:
///
/// 1. Same concrete kind: native equality and ordering.
/// 2. Same capability: numbers compare as [`Number`], sequences compare
///    element-wise and lexicographically.
/// 3. Otherwise `equal` is `false` and `less` compares the text renderings.
///
/// The last tier makes `less` total over every pair of values, at the cost of
/// being arbitrary between unrelated kinds.
#[derive(Clone)]
pub enum Value<'a> {
    /// A primitive number.
    Number(VNumber),
    /// A none, boolean, character or text value.
    Scalar(VScalar<'a>),
    /// A sequence of values.
    Sequence(VSequence<'a>),
}

impl<'a> Value<'a> {
    /// The absent value.
    pub const NONE: Self = Value::Scalar(VScalar::None);

    /// Adapts `host`.
    pub fn of<T: Adaptable + ?Sized>(host: &'a T) -> Self {
        host.adapt()
    }

    /// Returns `true` for the absent value.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Value::Scalar(VScalar::None))
    }

    /// The numeric adapter, if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<&VNumber> {
        match self {
            Value::Number(number) => Some(number),
            _ => None,
        }
    }

    /// The scalar adapter, if this is a scalar.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&VScalar<'a>> {
        match self {
            Value::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// The sequence adapter, if this is a sequence.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&VSequence<'a>> {
        match self {
            Value::Sequence(sequence) => Some(sequence),
            _ => None,
        }
    }

    /// Equality under the three-tier protocol.
    #[must_use]
    pub fn equal(&self, other: &Value<'_>) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => {
                if a.type_identity() == b.type_identity() {
                    a.equal_exact(b)
                } else {
                    a.equal_numeric(b)
                }
            }
            (Value::Sequence(a), Value::Sequence(b)) => a.equal_elements(b),
            (Value::Scalar(a), Value::Scalar(b)) if a.type_identity() == b.type_identity() => {
                a.equal_exact(b)
            }
            _ => false,
        }
    }

    /// Strict ordering under the three-tier protocol.
    #[must_use]
    pub fn less(&self, other: &Value<'_>) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => {
                if a.type_identity() == b.type_identity() {
                    a.less_exact(b)
                } else {
                    a.less_numeric(b)
                }
            }
            (Value::Sequence(a), Value::Sequence(b)) => a.less_elements(b),
            (Value::Scalar(a), Value::Scalar(b)) if a.type_identity() == b.type_identity() => {
                a.less_exact(b)
            }
            _ => {
                trace!(
                    left = self.type_identity().name(),
                    right = other.type_identity().name(),
                    "ordering through text fallback"
                );
                self.render() < other.render()
            }
        }
    }

    /// Renders with default sink options.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.to_text(&mut Sink::new(&mut out));
        out
    }

    /// Iterates over the elements of a sequence.
    ///
    /// Every call starts a fresh traversal; values that are not sequences
    /// yield nothing.
    pub fn iterate(&self) -> Iter<'_> {
        match self {
            Value::Sequence(sequence) => sequence.iter(),
            _ => Iter::empty(),
        }
    }
}

impl Adapter for Value<'_> {
    fn capability(&self) -> Capability {
        match self {
            Value::Number(number) => number.capability(),
            Value::Scalar(scalar) => scalar.capability(),
            Value::Sequence(sequence) => sequence.capability(),
        }
    }

    fn type_identity(&self) -> TypeIdentity {
        match self {
            Value::Number(number) => number.type_identity(),
            Value::Scalar(scalar) => scalar.type_identity(),
            Value::Sequence(sequence) => sequence.type_identity(),
        }
    }

    fn to_boolean(&self) -> bool {
        match self {
            Value::Number(number) => number.to_boolean(),
            Value::Scalar(scalar) => scalar.to_boolean(),
            Value::Sequence(sequence) => sequence.to_boolean(),
        }
    }

    fn to_number(&self) -> Number {
        match self {
            Value::Number(number) => number.to_number(),
            Value::Scalar(scalar) => scalar.to_number(),
            Value::Sequence(sequence) => sequence.to_number(),
        }
    }

    fn to_text(&self, sink: &mut Sink<'_>) -> fmt::Result {
        match self {
            Value::Number(number) => number.to_text(sink),
            Value::Scalar(scalar) => scalar.to_text(sink),
            Value::Sequence(sequence) => sequence.to_text(sink),
        }
    }
}

impl<'b> PartialEq<Value<'b>> for Value<'_> {
    fn eq(&self, other: &Value<'b>) -> bool {
        self.equal(other)
    }
}

impl<'b> PartialOrd<Value<'b>> for Value<'_> {
    fn partial_cmp(&self, other: &Value<'b>) -> Option<Ordering> {
        if self.equal(other) {
            Some(Ordering::Equal)
        } else if self.less(other) {
            Some(Ordering::Less)
        } else if other.less(self) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl Display for Value<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let options = SinkOptions {
            precision: f.precision(),
            ..SinkOptions::default()
        };
        self.to_text(&mut Sink::with_options(f, options))
    }
}

impl LowerHex for Value<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let options = SinkOptions {
            precision: f.precision(),
            ..SinkOptions::hex()
        };
        self.to_text(&mut Sink::with_options(f, options))
    }
}

impl Debug for Value<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(number) => Debug::fmt(number, f),
            Value::Scalar(scalar) => Debug::fmt(scalar, f),
            Value::Sequence(sequence) => Debug::fmt(sequence, f),
        }
    }
}

impl<'s> IntoIterator for &'s Value<'_> {
    type Item = Value<'s>;
    type IntoIter = Iter<'s>;

    fn into_iter(self) -> Iter<'s> {
        self.iterate()
    }
}
