//! Marker traits that opt a kind into operators.
//!
//! A [`BoundedInt`](crate::BoundedInt) supports construction, conversion,
//! comparison, and iteration out of the box. Everything that changes its value
//! arithmetically is only available when the kind implements the matching
//! marker trait here, so a kind that does not opt in has no such methods or
//! operators at all, rather than ones that fail at runtime.
//!
//! The [`bounded_int!`](crate::bounded_int) macro implements these through its
//! `ops` list.



//		Packages																										

use crate::bounds::Bounds;



//		Traits																											

//		Increment																
/// Enables [`increment()`](crate::BoundedInt::increment()).
pub trait Increment: Bounds {}

//		Decrement																
/// Enables [`decrement()`](crate::BoundedInt::decrement()).
pub trait Decrement: Bounds {}

//		Add																		
/// Enables [`checked_add()`](crate::BoundedInt::checked_add()) and the `+` and
/// `+=` operators.
pub trait Add: Bounds {}

//		Sub																		
/// Enables [`checked_sub()`](crate::BoundedInt::checked_sub()) and the `-` and
/// `-=` operators.
pub trait Sub: Bounds {}

//		Neg																		
/// Enables [`checked_neg()`](crate::BoundedInt::checked_neg()) and unary `-`.
pub trait Neg: Bounds {}

//		Mul																		
/// Enables [`checked_mul()`](crate::BoundedInt::checked_mul()) and the `*` and
/// `*=` operators.
pub trait Mul: Bounds {}

//		Div																		
/// Enables [`checked_div()`](crate::BoundedInt::checked_div()) and the `/` and
/// `/=` operators.
pub trait Div: Bounds {}


