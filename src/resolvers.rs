//! Strategies for values that fall outside a kind's range.



//		Modules																											

#[cfg(test)]
#[path = "tests/resolvers.rs"]
mod tests;



//		Packages																										

use crate::{
	bounds::Span,
	errors::BoundedIntError,
};
use core::fmt::Debug;



//		Traits																											

//		Resolver																
/// A strategy invoked whenever a value falls outside a kind's range.
/// 
/// Resolvers are stateless, zero-sized types, chosen once when the kind is
/// declared. Each decides whether to wrap the value into range, replace it
/// with the invalid sentinel, or reject it with an error.
/// 
pub trait Resolver: Copy + Debug + Default + Send + Sync + 'static {
	/// The name of the resolver, used in diagnostics.
	const NAME: &'static str;
	
	//		resolve																
	/// Resolves a value that lies outside the range.
	/// 
	/// # Parameters
	/// 
	/// * `span`  - The range of the kind being constructed.
	/// * `value` - The out-of-range value.
	/// 
	/// # Errors
	/// 
	/// Returns [`BoundedIntError::OutOfRange`] if the resolver rejects the
	/// value outright.
	/// 
	fn resolve(span: &Span, value: i128) -> Result<Resolution, BoundedIntError>;
}

//		Infallible																
/// A [`Resolver`] that never returns an error.
/// 
/// Kinds using such a resolver get the infallible
/// [`BoundedInt::new()`](crate::BoundedInt::new()) constructor in addition to
/// [`try_new()`](crate::BoundedInt::try_new()).
/// 
pub trait Infallible: Resolver {}



//		Structs																											

//		Resolution																
/// The outcome of resolving a value against a range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Resolution {
	/// The resolved value. This is either within the range, or the invalid
	/// sentinel.
	pub value:    i128,
	
	/// Whether the resolved value is a usable, in-range value.
	pub in_range: bool,
}

//		Modulo																	
/// Wraps out-of-range values circularly into the range.
/// 
/// The result is congruent to the input modulo `max - min + 1`, which also
/// holds for negative inputs, e.g. `-1` in `[0, 359]` becomes `359`. This
/// never fails.
/// 
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Modulo;

//󰭅		Resolver																
impl Resolver for Modulo {
	const NAME: &'static str = "Modulo";
	
	//		resolve																
	fn resolve(span: &Span, value: i128) -> Result<Resolution, BoundedIntError> {
		Ok(Resolution { value: span.wrap(value), in_range: true })
	}
}

//󰭅		Infallible																
impl Infallible for Modulo {}

//		SetInvalid																
/// Replaces out-of-range values with the invalid sentinel.
/// 
/// The caller is expected to check
/// [`is_valid()`](crate::BoundedInt::is_valid()) afterwards.
/// 
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct SetInvalid;

//󰭅		Resolver																
impl Resolver for SetInvalid {
	const NAME: &'static str = "SetInvalid";
	
	//		resolve																
	fn resolve(span: &Span, _value: i128) -> Result<Resolution, BoundedIntError> {
		Ok(Resolution { value: span.invalid, in_range: false })
	}
}

//󰭅		Infallible																
impl Infallible for SetInvalid {}

//		Throw																	
/// Rejects out-of-range values with a [`BoundedIntError::OutOfRange`] error,
/// which names the kind, its bounds, and the offending value.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Throw;

//󰭅		Resolver																
impl Resolver for Throw {
	const NAME: &'static str = "Throw";
	
	//		resolve																
	fn resolve(span: &Span, value: i128) -> Result<Resolution, BoundedIntError> {
		Err(span.out_of_range(value))
	}
}


