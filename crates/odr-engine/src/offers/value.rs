//! Already-constructed value offers

use std::any::Any;
use std::collections::HashSet;

use odr_domain::{Error, Inputs, Object, Offer, Request, Result, TypeKey};

use crate::offers::object::InPlaceObject;

/// An offer with no requirements wrapping a value that already exists.
///
/// Fulfillment moves the value into an [`InPlaceObject`]; a second
/// fulfillment fails with [`Error::AlreadyFulfilled`].
///
/// ## Example
///
/// ```rust
/// use odr_engine::ValueOffer;
/// use odr_domain::{Offer, TypeKey};
///
/// let offer = ValueOffer::new("greeting", String::from("hello"))
///     .with_capability(TypeKey::named("text"));
/// assert!(offer.requests().is_empty());
/// assert!(offer.provides().contains(&TypeKey::named("text")));
/// ```
pub struct ValueOffer<T: Any> {
    name: String,
    key: TypeKey,
    provides: HashSet<TypeKey>,
    value: Option<T>,
}

impl<T: Any> ValueOffer<T> {
    /// Creates an offer over an existing value.
    pub fn new(name: impl Into<String>, value: T) -> Self {
        let key = TypeKey::of::<T>();
        Self {
            name: name.into(),
            provides: HashSet::from([key.clone()]),
            key,
            value: Some(value),
        }
    }

    /// Declares an additional provided identity.
    pub fn with_capability(mut self, key: TypeKey) -> Self {
        self.provides.insert(key);
        self
    }

    /// Boxes the offer for submission to a source.
    pub fn boxed(self) -> Box<dyn Offer> {
        Box::new(self)
    }
}

impl<T: Any> Offer for ValueOffer<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_key(&self) -> &TypeKey {
        &self.key
    }

    fn provides(&self) -> &HashSet<TypeKey> {
        &self.provides
    }

    fn requests(&self) -> &[Request] {
        &[]
    }

    fn fulfill(&mut self, _inputs: Inputs<'_>) -> Result<Box<dyn Object>> {
        let value = self.value.take().ok_or_else(|| Error::AlreadyFulfilled {
            offer: self.name.clone(),
        })?;
        Ok(Box::new(InPlaceObject::with_parts(
            self.name.clone(),
            self.key.clone(),
            self.provides.clone(),
            value,
        )))
    }
}
