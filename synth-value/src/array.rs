//! Sequence adapters.
//!
//! Three construction surfaces share one element-wise protocol:
//!
//! - [`FixedArray`] borrows a caller-owned `[T; N]`.
//! - [`Array`] borrows a caller-owned buffer with a runtime length.
//! - [`SharedArray`] holds a reference-counted buffer; the adapter, its
//!   copies and the creator keep it alive together.
//!
//! Borrowed adapters produce a [`Value<'a>`] tied to the buffer's lifetime,
//! so using one after its buffer is gone does not compile. Shared adapters
//! produce a `Value<'static>`.
//!
//! Elements are adapted lazily: nothing is copied at construction, and each
//! traversal re-adapts elements in storage order.

use alloc::sync::Arc;
use core::fmt::{self, Debug, Formatter, Write};
use core::iter::FusedIterator;

use crate::adapt::Adaptable;
use crate::error::TypeIdentity;
use crate::sink::Sink;
use crate::traits::Number;
use crate::value::{Adapter, Capability, Value};

/// How a sequence adapter holds its buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ownership {
    /// The caller owns the buffer and must keep it alive.
    Borrowed,
    /// The buffer is reference-counted and shared with the adapter.
    Shared,
}

/// Type-erased access to the elements behind a sequence adapter.
trait Elements: Send + Sync {
    fn len(&self) -> usize;
    fn get(&self, index: usize) -> Option<Value<'_>>;
}

struct BorrowedElements<'a, T>(&'a [T]);

impl<T: Adaptable> Elements for BorrowedElements<'_, T> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn get(&self, index: usize) -> Option<Value<'_>> {
        self.0.get(index).map(|element| element.adapt())
    }
}

struct SharedElements<T> {
    buffer: Arc<[T]>,
    len: usize,
}

impl<T: Adaptable> Elements for SharedElements<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Option<Value<'_>> {
        self.buffer[..self.len].get(index).map(|element| element.adapt())
    }
}

/// A sequence adapter.
///
/// Cloning is cheap: clones share the element storage.
#[derive(Clone)]
pub struct VSequence<'a> {
    identity: TypeIdentity,
    ownership: Ownership,
    elements: Arc<dyn Elements + 'a>,
}

impl<'a> VSequence<'a> {
    fn borrowed<K, T>(buffer: &'a [T]) -> Self
    where
        K: ?Sized + 'static,
        T: Adaptable + 'static,
    {
        Self {
            identity: TypeIdentity::of::<K>(),
            ownership: Ownership::Borrowed,
            elements: Arc::new(BorrowedElements(buffer)),
        }
    }

    fn shared<T: Adaptable + 'static>(buffer: Arc<[T]>, len: usize) -> Self {
        Self {
            identity: TypeIdentity::of::<[T]>(),
            ownership: Ownership::Shared,
            elements: Arc::new(SharedElements { buffer, len }),
        }
    }

    /// How this adapter holds its buffer.
    #[must_use]
    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element at `index`, adapted.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Value<'_>> {
        self.elements.get(index)
    }

    /// Iterates over the elements in storage order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            sequence: Some(self),
            front: 0,
            back: self.len(),
        }
    }

    /// Equal lengths and pairwise-equal elements.
    pub(crate) fn equal_elements(&self, other: &VSequence<'_>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a.equal(&b))
    }

    /// Lexicographic: the first unequal pair decides, otherwise the shorter
    /// sequence is less.
    pub(crate) fn less_elements(&self, other: &VSequence<'_>) -> bool {
        for (a, b) in self.iter().zip(other.iter()) {
            if !a.equal(&b) {
                return a.less(&b);
            }
        }
        self.len() < other.len()
    }
}

impl Adapter for VSequence<'_> {
    fn capability(&self) -> Capability {
        Capability::Sequence
    }

    fn type_identity(&self) -> TypeIdentity {
        self.identity
    }

    fn to_boolean(&self) -> bool {
        !self.is_empty()
    }

    /// The length. Fixed-size arrays report `N` here, not anything derived
    /// from their contents.
    fn to_number(&self) -> Number {
        self.len() as Number
    }

    fn to_text(&self, sink: &mut Sink<'_>) -> fmt::Result {
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                sink.write_char(',')?;
            }
            element.to_text(sink)?;
        }
        Ok(())
    }
}

impl Debug for VSequence<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over the elements of a sequence adapter.
///
/// Non-sequence values hand out an empty iterator.
#[derive(Clone)]
pub struct Iter<'s> {
    sequence: Option<&'s VSequence<'s>>,
    front: usize,
    back: usize,
}

impl Iter<'_> {
    /// An iterator that yields nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            sequence: None,
            front: 0,
            back: 0,
        }
    }
}

impl<'s> Iterator for Iter<'s> {
    type Item = Value<'s>;

    fn next(&mut self) -> Option<Value<'s>> {
        let sequence = self.sequence?;
        if self.front >= self.back {
            return None;
        }
        let item = sequence.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let sequence = self.sequence?;
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        sequence.get(self.back)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl Debug for Iter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &(self.back - self.front))
            .finish()
    }
}

// === Construction surfaces ===

/// Adapter over a caller-owned array of statically known length.
#[derive(Debug, Clone, Copy)]
pub struct FixedArray<'a, T, const N: usize> {
    adapted: &'a [T; N],
}

impl<'a, T: Adaptable + 'static, const N: usize> FixedArray<'a, T, N> {
    /// The static length.
    pub const LEN: usize = N;

    /// Borrows `adapted` for the adapter's lifetime.
    #[must_use]
    pub const fn new(adapted: &'a [T; N]) -> Self {
        Self { adapted }
    }

    /// Erases the adapter into a [`Value`].
    #[must_use]
    pub fn into_value(self) -> Value<'a> {
        Value::Sequence(VSequence::borrowed::<[T; N], T>(self.adapted))
    }
}

/// Adapter over a caller-owned buffer with a runtime length.
#[derive(Debug, Clone, Copy)]
pub struct Array<'a, T> {
    adapted: &'a [T],
}

impl<'a, T: Adaptable + 'static> Array<'a, T> {
    /// Borrows the whole of `buffer`.
    #[must_use]
    pub const fn new(buffer: &'a [T]) -> Self {
        Self { adapted: buffer }
    }

    /// Borrows the first `length` elements of `buffer`.
    ///
    /// A length past the end of the buffer is clamped to it.
    #[must_use]
    pub fn with_length(buffer: &'a [T], length: usize) -> Self {
        Self {
            adapted: &buffer[..length.min(buffer.len())],
        }
    }

    /// Erases the adapter into a [`Value`].
    #[must_use]
    pub fn into_value(self) -> Value<'a> {
        Value::Sequence(VSequence::borrowed::<[T], T>(self.adapted))
    }
}

/// Adapter over a reference-counted buffer.
///
/// Behaves like [`Array`] in every respect except ownership.
pub struct SharedArray<T> {
    buffer: Arc<[T]>,
    len: usize,
}

impl<T: Adaptable + 'static> SharedArray<T> {
    /// Shares the whole of `buffer`.
    #[must_use]
    pub fn new(buffer: Arc<[T]>) -> Self {
        let len = buffer.len();
        Self { buffer, len }
    }

    /// Shares the first `length` elements of `buffer`.
    ///
    /// A length past the end of the buffer is clamped to it.
    #[must_use]
    pub fn with_length(buffer: Arc<[T]>, length: usize) -> Self {
        let len = length.min(buffer.len());
        Self { buffer, len }
    }

    /// The shared buffer.
    #[must_use]
    pub fn buffer(&self) -> &Arc<[T]> {
        &self.buffer
    }

    /// Erases the adapter into a [`Value`].
    #[must_use]
    pub fn into_value(self) -> Value<'static> {
        Value::Sequence(VSequence::shared(self.buffer, self.len))
    }
}

impl<T> Clone for SharedArray<T> {
    fn clone(&self) -> Self {
        Self {
            buffer: Arc::clone(&self.buffer),
            len: self.len,
        }
    }
}

impl<T: Debug> Debug for SharedArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.buffer[..self.len]).finish()
    }
}

impl<'a, T: Adaptable + 'static, const N: usize> From<FixedArray<'a, T, N>> for Value<'a> {
    fn from(array: FixedArray<'a, T, N>) -> Self {
        array.into_value()
    }
}

impl<'a, T: Adaptable + 'static> From<Array<'a, T>> for Value<'a> {
    fn from(array: Array<'a, T>) -> Self {
        array.into_value()
    }
}

impl<T: Adaptable + 'static> From<SharedArray<T>> for Value<'_> {
    fn from(array: SharedArray<T>) -> Self {
        array.into_value()
    }
}

impl<'a, T: Adaptable + 'static, const N: usize> From<&'a [T; N]> for Value<'a> {
    fn from(array: &'a [T; N]) -> Self {
        FixedArray::new(array).into_value()
    }
}

impl<'a, T: Adaptable + 'static> From<&'a [T]> for Value<'a> {
    fn from(buffer: &'a [T]) -> Self {
        Array::new(buffer).into_value()
    }
}

impl<T: Adaptable + 'static> From<Arc<[T]>> for Value<'_> {
    fn from(buffer: Arc<[T]>) -> Self {
        SharedArray::new(buffer).into_value()
    }
}
