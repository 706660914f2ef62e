//! Turning host data into [`Value`]s.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::array::{Array, FixedArray, SharedArray, VSequence};
use crate::number::VNumber;
use crate::scalar::VScalar;
use crate::value::Value;

/// Host data that can be viewed as a [`Value`].
///
/// Sequence adapters call this on each element while iterating, so nested
/// host collections adapt recursively without being copied.
pub trait Adaptable: Send + Sync {
    /// Builds an adapter that borrows from `self`.
    fn adapt(&self) -> Value<'_>;
}

macro_rules! impl_adaptable_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl Adaptable for $t {
                fn adapt(&self) -> Value<'_> {
                    Value::Number(VNumber::new(*self))
                }
            }

            impl From<$t> for Value<'_> {
                fn from(value: $t) -> Self {
                    Value::Number(VNumber::new(value))
                }
            }
        )*
    };
}

impl_adaptable_number!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl Adaptable for bool {
    fn adapt(&self) -> Value<'_> {
        Value::Scalar(VScalar::Boolean(*self))
    }
}

impl Adaptable for char {
    fn adapt(&self) -> Value<'_> {
        Value::Scalar(VScalar::Character(*self))
    }
}

impl Adaptable for str {
    fn adapt(&self) -> Value<'_> {
        Value::Scalar(VScalar::Text(Cow::Borrowed(self)))
    }
}

impl Adaptable for String {
    fn adapt(&self) -> Value<'_> {
        self.as_str().adapt()
    }
}

impl Adaptable for Cow<'_, str> {
    fn adapt(&self) -> Value<'_> {
        (**self).adapt()
    }
}

impl<T: Adaptable + ?Sized> Adaptable for &T {
    fn adapt(&self) -> Value<'_> {
        (**self).adapt()
    }
}

impl<T: Adaptable> Adaptable for Option<T> {
    fn adapt(&self) -> Value<'_> {
        match self {
            Some(inner) => inner.adapt(),
            None => Value::NONE,
        }
    }
}

impl Adaptable for Value<'_> {
    fn adapt(&self) -> Value<'_> {
        self.clone()
    }
}

impl<T: Adaptable + 'static, const N: usize> Adaptable for [T; N] {
    fn adapt(&self) -> Value<'_> {
        FixedArray::new(self).into_value()
    }
}

impl<T: Adaptable + 'static> Adaptable for [T] {
    fn adapt(&self) -> Value<'_> {
        Array::new(self).into_value()
    }
}

impl<T: Adaptable + 'static> Adaptable for Vec<T> {
    fn adapt(&self) -> Value<'_> {
        Array::new(self.as_slice()).into_value()
    }
}

impl<T: Adaptable + 'static> Adaptable for Arc<[T]> {
    fn adapt(&self) -> Value<'_> {
        SharedArray::new(Arc::clone(self)).into_value()
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Value::Scalar(VScalar::Boolean(value))
    }
}

impl From<char> for Value<'_> {
    fn from(value: char) -> Self {
        Value::Scalar(VScalar::Character(value))
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Scalar(VScalar::from(value))
    }
}

impl From<String> for Value<'_> {
    fn from(value: String) -> Self {
        Value::Scalar(VScalar::from(value))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Value::Scalar(VScalar::Text(value))
    }
}

impl<'a, T: Adaptable + 'static> From<&'a Vec<T>> for Value<'a> {
    fn from(value: &'a Vec<T>) -> Self {
        Array::new(value.as_slice()).into_value()
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::NONE, Into::into)
    }
}

impl From<VNumber> for Value<'_> {
    fn from(value: VNumber) -> Self {
        Value::Number(value)
    }
}

impl<'a> From<VScalar<'a>> for Value<'a> {
    fn from(value: VScalar<'a>) -> Self {
        Value::Scalar(value)
    }
}

impl<'a> From<VSequence<'a>> for Value<'a> {
    fn from(value: VSequence<'a>) -> Self {
        Value::Sequence(value)
    }
}
