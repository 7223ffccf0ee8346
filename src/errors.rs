//! Contains error types used throughout the library.



//		Packages																										

use core::num::ParseIntError;
use thiserror::Error as ThisError;



//		Enums																											

//		BoundedIntError															
/// Represents all possible errors that can occur when creating, converting, or
/// operating on a [`BoundedInt`](crate::BoundedInt).
/// 
/// Bounds that are themselves invalid (e.g. `min >= max`) are not represented
/// here, as they are rejected at compile time when the kind is first used.
/// 
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum BoundedIntError {
	/// The value falls outside the kind's range, and the kind's resolver
	/// rejects such values rather than wrapping or invalidating them.
	#[error("{kind}<{min},{max}>({value}) out of range")]
	OutOfRange {
		/// The name of the kind that rejected the value.
		kind:  &'static str,
		
		/// The lower bound of the kind.
		min:   i128,
		
		/// The upper bound of the kind.
		max:   i128,
		
		/// The offending value.
		value: i128,
	},
	
	/// Circular conversion was requested for a range that is neither
	/// zero-based nor symmetric around zero.
	#[error("Circular scale conversion needs a range symmetric around 0 or starting at 0, got [{min},{max}]")]
	NotCircular {
		/// The lower bound of the offending range.
		min: i128,
		
		/// The upper bound of the offending range.
		max: i128,
	},
	
	/// Division by zero was attempted.
	#[error("Division by zero")]
	DivisionByZero,
	
	/// The incoming string is not a valid integer.
	#[error("Invalid integer: {0}")]
	ParseIntError(#[from] ParseIntError),
}


