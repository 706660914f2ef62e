//! Conversion failures and the type identities they carry.

use core::any::{TypeId, type_name};
use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};

/// Opaque token naming one concrete host kind.
///
/// Two identities are equal exactly when they were built from the same Rust
/// type. The type name is kept for diagnostics only and never takes part in
/// comparisons.
#[derive(Clone, Copy)]
pub struct TypeIdentity {
    id: TypeId,
    name: &'static str,
}

impl TypeIdentity {
    /// Returns the identity of `T`.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The underlying [`TypeId`].
    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Human-readable type name, as reported by [`core::any::type_name`].
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if this identity names `T`.
    #[must_use]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeIdentity {}

impl Hash for TypeIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Debug for TypeIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Display for TypeIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A text or number conversion that could not be performed.
///
/// This is the only error that leaves the value layer. Both sides of the
/// failed conversion are kept as structured data so callers can branch on
/// them (for instance to build a localized message) instead of parsing the
/// rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConversionError {
    /// The type that was being converted.
    pub source_type: TypeIdentity,
    /// The type it was being converted into.
    pub destination_type: TypeIdentity,
}

impl ConversionError {
    /// Creates an error for a failed conversion from `Src` to `Dst`.
    #[must_use]
    pub fn new<Src: ?Sized + 'static, Dst: ?Sized + 'static>() -> Self {
        Self::between(TypeIdentity::of::<Src>(), TypeIdentity::of::<Dst>())
    }

    /// Creates an error from two already-known identities.
    #[must_use]
    pub fn between(source_type: TypeIdentity, destination_type: TypeIdentity) -> Self {
        debug!(
            source = source_type.name(),
            destination = destination_type.name(),
            "conversion failed"
        );
        Self {
            source_type,
            destination_type,
        }
    }
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not convert value of type `{}` to `{}`",
            self.source_type, self.destination_type
        )
    }
}

impl core::error::Error for ConversionError {}
