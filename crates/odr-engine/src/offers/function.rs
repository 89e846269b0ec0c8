//! Function-backed offers
//!
//! A [`FunctionOffer`] declares its requests explicitly and runs a
//! closure over the resolved inputs when fulfilled. The closure is
//! consumed by the first fulfillment.

use std::any::Any;
use std::collections::HashSet;

use odr_domain::{Error, Inputs, Object, Offer, Request, Result, TypeKey};

use crate::offers::object::{InPlaceObject, VoidObject};

/// An offer producing the result of a closure.
///
/// The closure receives one handle group per declared request, in request
/// order. A closure returning `()` makes the offer a pure sink: its
/// object is void and, unless capability tags are declared, it provides
/// nothing downstream.
///
/// ## Example
///
/// ```rust
/// use odr_domain::Request;
/// use odr_engine::FunctionOffer;
///
/// struct Port(u16);
///
/// let offer = FunctionOffer::new("listener", |inputs| {
///     let port = inputs.one::<Port>(0)?;
///     Ok(format!("0.0.0.0:{}", port.0))
/// })
/// .with_request(Request::of::<Port>());
/// ```
pub struct FunctionOffer<T, F> {
    name: String,
    key: TypeKey,
    provides: HashSet<TypeKey>,
    requests: Vec<Request>,
    func: Option<F>,
    _marker: std::marker::PhantomData<fn() -> T>,
}

impl<T, F> FunctionOffer<T, F>
where
    T: Any,
    F: FnOnce(Inputs<'_>) -> Result<T>,
{
    /// Creates an offer with no requests; add them with
    /// [`FunctionOffer::with_request`].
    pub fn new(name: impl Into<String>, func: F) -> Self {
        let key = TypeKey::of::<T>();
        let provides = if key.is_void() {
            HashSet::new()
        } else {
            HashSet::from([key.clone()])
        };
        Self {
            name: name.into(),
            key,
            provides,
            requests: Vec::new(),
            func: Some(func),
            _marker: std::marker::PhantomData,
        }
    }

    /// Appends a request; position determines delivery order.
    pub fn with_request(mut self, request: Request) -> Self {
        self.requests.push(request);
        self
    }

    /// Declares an additional provided identity.
    pub fn with_capability(mut self, key: TypeKey) -> Self {
        self.provides.insert(key);
        self
    }

    /// Boxes the offer for submission to a source.
    pub fn boxed(self) -> Box<dyn Offer>
    where
        T: 'static,
        F: 'static,
    {
        Box::new(self)
    }
}

impl<T, F> Offer for FunctionOffer<T, F>
where
    T: Any,
    F: FnOnce(Inputs<'_>) -> Result<T>,
{
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
        &self.requests
    }

    fn fulfill(&mut self, inputs: Inputs<'_>) -> Result<Box<dyn Object>> {
        let func = self.func.take().ok_or_else(|| Error::AlreadyFulfilled {
            offer: self.name.clone(),
        })?;
        let value = func(inputs)?;
        if self.key.is_void() {
            Ok(Box::new(VoidObject::with_provides(
                self.name.clone(),
                self.provides.clone(),
            )))
        } else {
            Ok(Box::new(InPlaceObject::with_parts(
                self.name.clone(),
                self.key.clone(),
                self.provides.clone(),
                value,
            )))
        }
    }
}
