//! Concrete offers and the objects they produce
//!
//! [`ValueOffer`] offers an already-constructed value; [`FunctionOffer`]
//! runs a closure over its resolved inputs, producing either a value
//! object or, for a `()` result, a void sink. Provided-type sets are
//! declared explicitly at construction: an offer's own type key plus any
//! capability tags added through the builders.

/// Function-backed offers
pub mod function;
/// Produced objects
pub mod object;
/// Already-constructed value offers
pub mod value;

pub use function::FunctionOffer;
pub use object::{InPlaceObject, VoidObject};
pub use value::ValueOffer;
