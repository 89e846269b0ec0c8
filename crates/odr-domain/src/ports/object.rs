//! The unit of production
//!
//! Objects are produced by offers when they are fulfilled, and are owned
//! exclusively by the resolver's lifecycle manager from creation until
//! teardown.

use std::any::Any;
use std::collections::HashSet;

use crate::handle::Handle;
use crate::key::TypeKey;

/// A created object.
pub trait Object {
    /// Human-readable name, normally inherited from the producing offer.
    fn name(&self) -> &str;

    /// Identity of the underlying value's type. Void objects carry the
    /// void identity.
    fn type_key(&self) -> &TypeKey;

    /// Every type identity this object provides, normally inherited from
    /// the producing offer.
    fn provides(&self) -> &HashSet<TypeKey>;

    /// Type-erased borrow of the underlying value, or `None` for void
    /// objects.
    fn value(&self) -> Option<&dyn Any>;

    /// A downcast-checked handle over this object's value.
    fn handle(&self) -> Handle<'_> {
        Handle::new(self.type_key(), self.value())
    }
}
