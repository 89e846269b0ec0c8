//! Produced objects
//!
//! The concrete [`Object`] implementations offers hand back from
//! fulfillment: [`InPlaceObject`] owns its value, [`VoidObject`] owns
//! nothing and marks a pure sink.

use std::any::Any;
use std::collections::HashSet;

use odr_domain::{Object, TypeKey};

/// An object owning its value in place.
pub struct InPlaceObject<T: Any> {
    name: String,
    key: TypeKey,
    provides: HashSet<TypeKey>,
    value: T,
}

impl<T: Any> InPlaceObject<T> {
    /// Creates an object over `value`, providing exactly its own type.
    pub fn new(name: impl Into<String>, value: T) -> Self {
        let key = TypeKey::of::<T>();
        let provides = HashSet::from([key.clone()]);
        Self::with_parts(name.into(), key, provides, value)
    }

    /// Creates an object with an explicit identity and provided set, as
    /// inherited from a fulfilled offer.
    pub fn with_parts(name: String, key: TypeKey, provides: HashSet<TypeKey>, value: T) -> Self {
        Self {
            name,
            key,
            provides,
            value,
        }
    }
}

impl<T: Any> Object for InPlaceObject<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_key(&self) -> &TypeKey {
        &self.key
    }

    fn provides(&self) -> &HashSet<TypeKey> {
        &self.provides
    }

    fn value(&self) -> Option<&dyn Any> {
        Some(&self.value)
    }
}

/// An object with no underlying value.
///
/// Produced by sink offers: consumers of other types that provide nothing
/// usable downstream.
pub struct VoidObject {
    name: String,
    key: TypeKey,
    provides: HashSet<TypeKey>,
}

impl VoidObject {
    /// Creates a void object providing nothing.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_provides(name, HashSet::new())
    }

    /// Creates a void object carrying capability tags inherited from its
    /// offer.
    pub fn with_provides(name: impl Into<String>, provides: HashSet<TypeKey>) -> Self {
        Self {
            name: name.into(),
            key: TypeKey::void(),
            provides,
        }
    }
}

impl Object for VoidObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_key(&self) -> &TypeKey {
        &self.key
    }

    fn provides(&self) -> &HashSet<TypeKey> {
        &self.provides
    }

    fn value(&self) -> Option<&dyn Any> {
        None
    }
}
