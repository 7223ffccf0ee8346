//! Compile-time configuration of a bounded-integer kind.



//		Modules																											

#[cfg(test)]
#[path = "tests/bounds.rs"]
mod tests;



//		Packages																										

use crate::{
	converters::Converter,
	errors::BoundedIntError,
	integer::Integer,
	resolvers::{Resolution, Resolver},
};
use core::{
	fmt::{Debug, Display, Formatter, self},
	hash::Hash,
};
use tracing::trace;



//		Traits																											

//		Bounds																	
/// The configuration of a bounded-integer kind.
/// 
/// A kind is a zero-sized tag type that fixes, at compile time, everything a
/// [`BoundedInt`](crate::BoundedInt) needs to know about itself:
/// 
///   1. The primitive type the value is stored in.
///   2. The closed range `[MIN, MAX]` the value is confined to.
///   3. The [`Resolver`] applied when a value falls outside that range.
///   4. The [`Converter`] applied when converting from a different kind.
/// 
/// The bounds are given as [`i128`] so that they can be checked against the
/// storage type in `const` context. The checks run the first time the kind is
/// used, and a kind that fails them does not compile:
/// 
///   - `MIN` must be smaller than `MAX`.
///   - Both bounds must be representable in the storage type.
///   - The bounds must not span the storage type's entire range, as one value
///     outside the range is reserved as the invalid sentinel.
/// 
/// Kinds are normally declared with the [`bounded_int!`](crate::bounded_int)
/// macro rather than by implementing this trait by hand.
/// 
pub trait Bounds: Copy + Debug + Default + Eq + Hash + Ord + Send + Sync + 'static {
	/// The primitive type the value is stored in.
	type Int:       Integer;
	
	/// The strategy for values outside the range.
	type Resolver:  Resolver;
	
	/// The strategy for conversions from other kinds.
	type Converter: Converter;
	
	/// The lower bound, inclusive.
	const MIN:  i128;
	
	/// The upper bound, inclusive.
	const MAX:  i128;
	
	/// The name of the kind, used in diagnostics.
	const NAME: &'static str;
}



//		Structs																											

//		Span																	
/// The runtime view of a kind's range.
/// 
/// This carries the bounds and the invalid sentinel of a kind in widened form,
/// and provides the range arithmetic shared by the resolvers, the converters,
/// and the iterator.
/// 
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Span {
	/// The name of the kind.
	pub kind:    &'static str,
	
	/// The lower bound, inclusive.
	pub min:     i128,
	
	/// The upper bound, inclusive.
	pub max:     i128,
	
	/// The sentinel that marks a value as invalid.
	pub invalid: i128,
}

//󰭅		Span																	
impl Span {
	//		Constructors														
	
	//		of																	
	/// Creates the [`Span`] of a kind.
	/// 
	/// # Panics
	/// 
	/// Panics if the kind's bounds are not valid for its storage type. When
	/// evaluated in `const` context, as [`BoundedInt`](crate::BoundedInt)
	/// does, this is a compile-time error instead.
	/// 
	#[must_use]
	pub const fn of<B: Bounds>() -> Self {
		let lowest  = <B::Int as Integer>::LOWEST;
		let highest = <B::Int as Integer>::HIGHEST;
		assert!(B::MIN < B::MAX,                      "Bounded integer min needs to be smaller than max");
		assert!(B::MIN >= lowest && B::MAX <= highest, "Bounded integer bounds need to fit the storage type");
		assert!(B::MIN != lowest || B::MAX != highest, "Bounded integer cannot extend over the whole storage type");
		Self {
			kind:    B::NAME,
			min:     B::MIN,
			max:     B::MAX,
			invalid: if B::MIN == lowest { highest } else { lowest },
		}
	}
	
	//		Public methods														
	
	//		contains															
	/// Determines whether the value lies within the range.
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to check.
	/// 
	#[must_use]
	pub const fn contains(&self, value: i128) -> bool {
		value >= self.min && value <= self.max
	}
	
	//		is_circular															
	/// Determines whether the range can take part in circular conversion.
	/// 
	/// That is the case when it starts at zero, or when it is symmetric around
	/// zero, allowing for the one extra value an even-sized range needs on
	/// either side (e.g. `[-179, 180]` or `[-180, 179]`).
	/// 
	#[must_use]
	pub const fn is_circular(&self) -> bool {
		#[expect(clippy::arithmetic_side_effects, reason = "Bounds are at most 64 bits wide")]
		let sum = self.min + self.max;
		self.min == 0 || matches!(sum, -1..=1)
	}
	
	//		len																	
	/// The number of values in the range, i.e. `max - min + 1`.
	#[expect(clippy::len_without_is_empty, reason = "A range is never empty")]
	#[expect(clippy::arithmetic_side_effects, reason = "Bounds are at most 64 bits wide")]
	#[must_use]
	pub const fn len(&self) -> i128 {
		self.max - self.min + 1
	}
	
	//		out_of_range														
	/// Builds the error reported for a value outside the range.
	/// 
	/// # Parameters
	/// 
	/// * `value` - The offending value.
	/// 
	#[must_use]
	pub const fn out_of_range(&self, value: i128) -> BoundedIntError {
		BoundedIntError::OutOfRange {
			kind:  self.kind,
			min:   self.min,
			max:   self.max,
			value,
		}
	}
	
	//		resolve																
	/// Resolves a value against the range using the given [`Resolver`].
	/// 
	/// Values within the range pass through untouched. Anything else is handed
	/// to the resolver.
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to resolve.
	/// 
	/// # Errors
	/// 
	/// Returns whatever error the resolver raises for an out-of-range value.
	/// 
	pub fn resolve<R: Resolver>(&self, value: i128) -> Result<Resolution, BoundedIntError> {
		if self.contains(value) {
			return Ok(Resolution { value, in_range: true });
		}
		let resolution = R::resolve(self, value);
		match &resolution {
			Ok(resolved) => trace!(
				kind     = self.kind,
				resolver = R::NAME,
				value,
				resolved = resolved.value,
				in_range = resolved.in_range,
				"Resolved out-of-range value"
			),
			Err(err)     => trace!(
				kind     = self.kind,
				resolver = R::NAME,
				value,
				%err,
				"Rejected out-of-range value"
			),
		}
		resolution
	}
	
	//		residue																
	/// The position of a value on the circle formed by the range, counted from
	/// zero. The result is in `[0, len)`.
	/// 
	/// # Parameters
	/// 
	/// * `value` - Any value, in or out of range.
	/// 
	#[must_use]
	pub const fn residue(&self, value: i128) -> i128 {
		value.rem_euclid(self.len())
	}
	
	//		wrap																
	/// Maps any value into the range, such that the result is congruent to the
	/// input modulo [`len()`](Self::len()).
	/// 
	/// This never overflows, whatever the input.
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to wrap.
	/// 
	#[expect(clippy::arithmetic_side_effects, reason = "Both residues are in [0, len)")]
	#[must_use]
	pub const fn wrap(&self, value: i128) -> i128 {
		let offset = (self.residue(value) - self.residue(self.min)).rem_euclid(self.len());
		self.min + offset
	}
	
	//		beyond																
	/// Finds a value above the range that is congruent to the given residue.
	/// 
	/// This stands in for the exact result of an arithmetic operation that
	/// overflowed [`i128`]. Such a result is certainly out of range, and only
	/// its residue matters to a wrapping resolver.
	/// 
	/// # Parameters
	/// 
	/// * `residue` - The residue, in `[0, len)`.
	/// 
	#[expect(clippy::arithmetic_side_effects, reason = "Result is at most max + len")]
	#[must_use]
	pub(crate) const fn beyond(&self, residue: i128) -> i128 {
		let wrapped = self.wrap(residue);
		wrapped + self.len()
	}
}

//󰭅		Display																	
impl Display for Span {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}[{},{}]", self.kind, self.min, self.max)
	}
}


