//! Numeric adapter over any primitive number.

use core::fmt::{self, Debug, Display, Formatter, Write};
use core::mem;

use crate::error::TypeIdentity;
use crate::sink::{Sink, SinkOptions};
use crate::traits::Number;
use crate::value::{Adapter, Capability};

/// Native storage class of an adapted primitive.
///
/// Every integer kind widens losslessly into `Int` or `UInt`; floats keep
/// their own width so they render the way the host type does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Native {
    /// Signed integers.
    Int(i128),
    /// Unsigned integers.
    UInt(u128),
    /// Single-precision float.
    F32(f32),
    /// Double-precision float.
    F64(f64),
}

impl Native {
    /// Canonical numeric coercion.
    #[must_use]
    pub fn to_number(self) -> Number {
        match self {
            Native::Int(i) => i as Number,
            Native::UInt(u) => u as Number,
            Native::F32(f) => Number::from(f),
            Native::F64(f) => f,
        }
    }

    /// Returns `true` for integer kinds.
    #[must_use]
    pub fn is_integral(self) -> bool {
        matches!(self, Native::Int(_) | Native::UInt(_))
    }

    fn is_zero(self) -> bool {
        match self {
            Native::Int(i) => i == 0,
            Native::UInt(u) => u == 0,
            Native::F32(f) => f == 0.0,
            Native::F64(f) => f == 0.0,
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Primitive kinds the numeric adapter accepts.
///
/// Implemented for every built-in integer and float type, and sealed.
pub trait Primitive: Copy + Send + Sync + 'static + sealed::Sealed {
    /// Widens `self` into its storage class.
    fn native(self) -> Native;
}

macro_rules! impl_primitive {
    ($variant:ident => $($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Primitive for $t {
                fn native(self) -> Native {
                    Native::$variant(self as _)
                }
            }
        )*
    };
}

impl_primitive!(Int => i8, i16, i32, i64, i128, isize);
impl_primitive!(UInt => u8, u16, u32, u64, u128, usize);
impl_primitive!(F32 => f32);
impl_primitive!(F64 => f64);

/// A numeric adapter.
///
/// Wraps one primitive number and remembers its exact kind. Two adapters of
/// the same kind compare natively; adapters of different kinds compare
/// through [`Native::to_number`].
#[derive(Clone, Copy)]
pub struct VNumber {
    identity: TypeIdentity,
    bits: u32,
    native: Native,
}

impl VNumber {
    /// Adapts `value`.
    #[must_use]
    pub fn new<T: Primitive>(value: T) -> Self {
        Self {
            identity: TypeIdentity::of::<T>(),
            bits: (mem::size_of::<T>() * 8) as u32,
            native: value.native(),
        }
    }

    /// Native storage of the adapted value.
    #[must_use]
    pub fn native(&self) -> Native {
        self.native
    }

    pub(crate) fn equal_exact(&self, other: &Self) -> bool {
        match (self.native, other.native) {
            (Native::Int(a), Native::Int(b)) => a == b,
            (Native::UInt(a), Native::UInt(b)) => a == b,
            // NaN equals itself so that equality stays reflexive
            (Native::F32(a), Native::F32(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Native::F64(a), Native::F64(b)) => a == b || (a.is_nan() && b.is_nan()),
            _ => self.equal_numeric(other),
        }
    }

    pub(crate) fn less_exact(&self, other: &Self) -> bool {
        match (self.native, other.native) {
            (Native::Int(a), Native::Int(b)) => a < b,
            (Native::UInt(a), Native::UInt(b)) => a < b,
            (Native::F32(a), Native::F32(b)) => a < b,
            (Native::F64(a), Native::F64(b)) => a < b,
            _ => self.less_numeric(other),
        }
    }

    pub(crate) fn equal_numeric(&self, other: &Self) -> bool {
        self.native.to_number() == other.native.to_number()
    }

    pub(crate) fn less_numeric(&self, other: &Self) -> bool {
        self.native.to_number() < other.native.to_number()
    }

    /// Masks a signed value to the adapted kind's width, giving its
    /// two's-complement bit pattern.
    fn unsigned_bits(&self, value: i128) -> u128 {
        let pattern = value as u128;
        if self.bits >= 128 {
            pattern
        } else {
            pattern & ((1u128 << self.bits) - 1)
        }
    }
}

fn write_float<F: Display>(sink: &mut Sink<'_>, value: F, wide: f64) -> fmt::Result {
    if wide.is_finite() && wide.fract() == 0.0 {
        return write!(sink, "{wide:.0}");
    }
    match sink.precision() {
        Some(precision) => write!(sink, "{value:.precision$}"),
        None => write!(sink, "{value}"),
    }
}

impl Adapter for VNumber {
    fn capability(&self) -> Capability {
        Capability::Numeric
    }

    fn type_identity(&self) -> TypeIdentity {
        self.identity
    }

    fn to_boolean(&self) -> bool {
        !self.native.is_zero()
    }

    fn to_number(&self) -> Number {
        self.native.to_number()
    }

    fn to_text(&self, sink: &mut Sink<'_>) -> fmt::Result {
        match self.native {
            Native::Int(i) if sink.is_hex() => write!(sink, "{:x}", self.unsigned_bits(i)),
            Native::Int(i) => write!(sink, "{i}"),
            Native::UInt(u) if sink.is_hex() => write!(sink, "{u:x}"),
            Native::UInt(u) => write!(sink, "{u}"),
            // floats truncate toward zero, then print at their own width
            Native::F32(f) if sink.is_hex() => {
                write!(sink, "{:x}", self.unsigned_bits(i128::from(f as i64)))
            }
            Native::F64(f) if sink.is_hex() => {
                write!(sink, "{:x}", self.unsigned_bits(i128::from(f as i64)))
            }
            Native::F32(f) => write_float(sink, f, Number::from(f)),
            Native::F64(f) => write_float(sink, f, f),
        }
    }
}

impl PartialEq for VNumber {
    fn eq(&self, other: &Self) -> bool {
        if self.identity == other.identity {
            self.equal_exact(other)
        } else {
            self.equal_numeric(other)
        }
    }
}

impl Debug for VNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.native {
            Native::Int(i) => Debug::fmt(&i, f),
            Native::UInt(u) => Debug::fmt(&u, f),
            Native::F32(x) => Debug::fmt(&x, f),
            Native::F64(x) => Debug::fmt(&x, f),
        }
    }
}

impl Display for VNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let options = SinkOptions {
            precision: f.precision(),
            ..SinkOptions::default()
        };
        self.to_text(&mut Sink::with_options(f, options))
    }
}

impl<T: Primitive> From<T> for VNumber {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
