//! Opaque type identities
//!
//! A [`TypeKey`] names the thing an offer provides or requests. Two forms
//! exist: a Rust form derived from [`std::any::TypeId`] for offers declared
//! in code, and a named form backed by an interned string for offers
//! declared in configuration and for capability tags. Matching is pure
//! identity; the resolver performs no other type checking.

use std::any::{self, TypeId};
use std::fmt;
use std::sync::Arc;

/// Opaque identity of a provided or requested type.
///
/// Keys are cheap to clone, hash, and compare. The ordering of keys is
/// never consulted by the resolver; only equality matters for matching.
///
/// ## Example
///
/// ```rust
/// use odr_domain::TypeKey;
///
/// struct Database;
///
/// let rust_key = TypeKey::of::<Database>();
/// let named_key = TypeKey::named("database");
/// assert_ne!(rust_key, named_key);
/// assert!(!rust_key.is_void());
/// assert!(TypeKey::void().is_void());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeKey(Repr);

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Repr {
    /// A concrete Rust type, identified by its `TypeId`.
    Rust { id: TypeId, name: &'static str },
    /// A configuration-declared identity or capability tag.
    Named(Arc<str>),
}

impl TypeKey {
    /// Key of a concrete Rust type.
    pub fn of<T: ?Sized + 'static>() -> Self {
        TypeKey(Repr::Rust {
            id: TypeId::of::<T>(),
            name: any::type_name::<T>(),
        })
    }

    /// Key backed by a name rather than a Rust type.
    ///
    /// Named keys are how scenarios declared in configuration and
    /// capability tags participate in matching.
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        TypeKey(Repr::Named(name.into()))
    }

    /// The void identity: an offer with this key is a pure sink and
    /// provides nothing usable downstream.
    pub fn void() -> Self {
        Self::of::<()>()
    }

    /// Whether this is the void identity.
    pub fn is_void(&self) -> bool {
        *self == Self::void()
    }

    /// Human-readable rendering of the identity.
    pub fn display_name(&self) -> &str {
        match &self.0 {
            Repr::Rust { name, .. } => name,
            Repr::Named(name) => name,
        }
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
