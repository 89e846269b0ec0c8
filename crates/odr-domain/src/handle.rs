//! Type-erased handles and positional fulfillment inputs
//!
//! When an offer is fulfilled it receives one group of [`Handle`]s per
//! request, in declared request order. A handle carries the producing
//! object's type identity plus a borrow of its value; downcasts are
//! checked, failing with a clear error rather than undefined behavior.

use std::any::{self, Any};

use crate::error::{Error, Result};
use crate::key::TypeKey;

/// Type-erased view of a produced value.
///
/// Void objects yield handles with no payload; attempting to downcast one
/// fails with [`Error::VoidValue`].
#[derive(Clone, Copy)]
pub struct Handle<'a> {
    key: &'a TypeKey,
    value: Option<&'a dyn Any>,
}

impl<'a> Handle<'a> {
    /// Creates a handle over a borrowed value.
    pub fn new(key: &'a TypeKey, value: Option<&'a dyn Any>) -> Self {
        Self { key, value }
    }

    /// The type identity of the producing object.
    pub fn key(&self) -> &'a TypeKey {
        self.key
    }

    /// The raw payload, if any.
    pub fn value(&self) -> Option<&'a dyn Any> {
        self.value
    }

    /// Checked downcast of the payload.
    pub fn downcast_ref<T: Any>(&self) -> Result<&'a T> {
        let value = self.value.ok_or_else(|| Error::VoidValue {
            name: self.key.to_string(),
        })?;
        value.downcast_ref::<T>().ok_or_else(|| Error::TypeMismatch {
            expected: any::type_name::<T>().to_string(),
            actual: self.key.to_string(),
        })
    }
}

/// Resolved inputs delivered to an offer's fulfillment.
///
/// One group per declared request, positional: group `i` holds the objects
/// bound to request `i`, in provider-index order. Group sizes fall within
/// the corresponding request's bounds; the resolver has verified this
/// before any fulfillment runs.
#[derive(Clone, Copy)]
pub struct Inputs<'a> {
    groups: &'a [Vec<Handle<'a>>],
}

impl<'a> Inputs<'a> {
    /// Wraps per-request handle groups.
    pub fn new(groups: &'a [Vec<Handle<'a>>]) -> Self {
        Self { groups }
    }

    /// Number of request groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no request groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The handles bound to request `index`.
    pub fn group(&self, index: usize) -> Result<&'a [Handle<'a>]> {
        self.groups
            .get(index)
            .map(Vec::as_slice)
            .ok_or(Error::RequestIndex {
                index,
                len: self.groups.len(),
            })
    }

    /// The single object bound to request `index`, downcast to `T`.
    ///
    /// Intended for the common exactly-one request shape.
    pub fn one<T: Any>(&self, index: usize) -> Result<&'a T> {
        self.group(index)?
            .first()
            .ok_or(Error::MissingInput { index })?
            .downcast_ref::<T>()
    }

    /// Every object bound to request `index`, downcast to `T`.
    pub fn all<T: Any>(&self, index: usize) -> Result<Vec<&'a T>> {
        self.group(index)?
            .iter()
            .map(Handle::downcast_ref)
            .collect()
    }
}
