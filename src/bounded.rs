//! Range-constrained integer type.



//		Modules																											

#[cfg(test)]
#[path = "tests/bounded.rs"]
mod tests;



//		Packages																										

use crate::{
	bounds::{Bounds, Span},
	capability,
	converters::Converter,
	errors::BoundedIntError,
	integer::{Integer, Operand},
	resolvers::Infallible,
};
use core::{
	fmt::{Debug, Display, Formatter, self},
	ops::{Add, AddAssign, Deref, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
	str::FromStr,
};



//		Structs																											

//		BoundedInt																
/// An integer confined to a closed range.
/// 
/// The range, the storage type, and the policies applied at the edges of the
/// range are all fixed by the kind `B`. See [`Bounds`] for what a kind
/// consists of, and [`bounded_int!`](crate::bounded_int) for how to declare
/// one.
/// 
/// # Validity
/// 
/// After construction or any operation, the stored value is either within
/// `[B::MIN, B::MAX]`, or it is the invalid sentinel [`INVALID`](Self::INVALID).
/// Which of the two happens for an out-of-range input depends on the kind's
/// [`Resolver`](crate::Resolver):
/// 
///   - [`Modulo`](crate::Modulo) wraps the input circularly into range, so
///     the result is always valid.
///   - [`SetInvalid`](crate::SetInvalid) stores the sentinel, and the caller
///     has to check [`is_valid()`](Self::is_valid()).
///   - [`Throw`](crate::Throw) fails the operation with
///     [`BoundedIntError::OutOfRange`].
/// 
/// The sentinel is the lowest value of the storage type, or its highest value
/// if the range already starts at the lowest. Invalid values stay invalid
/// through arithmetic and conversion.
/// 
/// # Arithmetic
/// 
/// Arithmetic is only available on kinds that opt into it through the marker
/// traits in [`capability`]. All of it is carried out in [`i128`], so the
/// intermediate result never overflows the storage type, and is then resolved
/// in the same way as a newly-constructed value.
/// 
/// The `checked_*()` methods return a [`Result`], and only fail for the
/// [`Throw`](crate::Throw) resolver or on division by zero. The operators
/// panic in those same cases, in the manner of the standard integer types.
/// 
/// # Conversion
/// 
/// A value of one kind can be converted to another kind with
/// [`convert_from()`](Self::convert_from()), which defers to the destination
/// kind's [`Converter`]. The stored value can be read with
/// [`get()`](Self::get()), or through [`Deref`].
/// 
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BoundedInt<B: Bounds>(B::Int);

//󰭅		BoundedInt																
impl<B: Bounds> BoundedInt<B> {
	//		Public constants													
	/// The range of the kind. Evaluating this checks the kind's bounds, and a
	/// kind with invalid bounds fails to compile once it is used.
	pub const SPAN: Span = Span::of::<B>();
	
	/// The invalid sentinel of the kind.
	pub const INVALID: Self = Self(
		if B::MIN == <B::Int as Integer>::LOWEST {
			<B::Int as Integer>::MAX
		} else {
			<B::Int as Integer>::MIN
		}
	);
	
	//		Constructors														
	
	//		try_new																
	/// Creates a new [`BoundedInt`], resolving out-of-range values with the
	/// kind's [`Resolver`](crate::Resolver).
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to create the [`BoundedInt`] from.
	/// 
	/// # Errors
	/// 
	/// Returns [`BoundedIntError::OutOfRange`] if the value is out of range and
	/// the resolver rejects it.
	/// 
	pub fn try_new(value: B::Int) -> Result<Self, BoundedIntError> {
		Self::from_wide(value.to_wide())
	}
	
	//		convert_from														
	/// Creates a new [`BoundedInt`] from one of a different kind, using this
	/// kind's [`Converter`].
	/// 
	/// The converter is trusted to produce an in-range value, so the resolver
	/// is not applied to its result. An invalid source converts to an invalid
	/// result.
	/// 
	/// # Parameters
	/// 
	/// * `other` - The value to convert.
	/// 
	/// # Errors
	/// 
	/// Returns an error if the converter cannot map between the two ranges,
	/// e.g. [`BoundedIntError::NotCircular`].
	/// 
	pub fn convert_from<S: Bounds>(other: BoundedInt<S>) -> Result<Self, BoundedIntError> {
		if !other.is_valid() {
			return Ok(Self::INVALID);
		}
		let value = B::Converter::convert(&BoundedInt::<S>::SPAN, other.0.to_wide(), &Self::SPAN)?;
		Ok(Self::from_resolved(value))
	}
	
	//		min_value															
	/// The lowest value of the kind.
	#[must_use]
	pub fn min_value() -> Self {
		Self::from_resolved(B::MIN)
	}
	
	//		max_value															
	/// The highest value of the kind.
	#[must_use]
	pub fn max_value() -> Self {
		Self::from_resolved(B::MAX)
	}
	
	//		Public methods														
	
	//		convert_into														
	/// Converts this value into another kind, using that kind's [`Converter`].
	/// 
	/// This is the counterpart of [`convert_from()`](Self::convert_from()).
	/// 
	/// # Errors
	/// 
	/// Returns an error if the converter cannot map between the two ranges.
	/// 
	pub fn convert_into<D: Bounds>(self) -> Result<BoundedInt<D>, BoundedIntError> {
		BoundedInt::<D>::convert_from(self)
	}
	
	//		get																	
	/// The stored value. This is the invalid sentinel if the value is invalid.
	#[must_use]
	pub const fn get(&self) -> B::Int {
		self.0
	}
	
	//		into_inner															
	/// Consumes the [`BoundedInt`] and returns the stored value.
	#[must_use]
	pub const fn into_inner(self) -> B::Int {
		self.0
	}
	
	//		is_valid															
	/// Determines whether the value is usable, i.e. not the invalid sentinel.
	#[must_use]
	pub fn is_valid(&self) -> bool {
		self.0 != Self::INVALID.0
	}
	
	//		set																	
	/// Assigns a new value, resolving it as [`try_new()`](Self::try_new())
	/// does.
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to assign.
	/// 
	/// # Errors
	/// 
	/// Returns [`BoundedIntError::OutOfRange`] if the value is out of range and
	/// the resolver rejects it. The stored value is invalid afterwards.
	/// 
	pub fn set(&mut self, value: B::Int) -> Result<(), BoundedIntError> {
		self.assign(Self::try_new(value))
	}
	
	//		Private methods														
	
	//		assign																
	/// Stores the outcome of an operation, or the invalid sentinel if it
	/// failed.
	fn assign(&mut self, outcome: Result<Self, BoundedIntError>) -> Result<(), BoundedIntError> {
		match outcome {
			Ok(value) => {
				*self = value;
				Ok(())
			},
			Err(err)  => {
				*self = Self::INVALID;
				Err(err)
			},
		}
	}
	
	//		combine																
	/// Applies a binary operation in widened form and resolves the result.
	/// 
	/// If the operation overflows [`i128`], the exact result is certainly out
	/// of range, and a stand-in with the same residue is resolved instead. A
	/// rejection of the stand-in reports the saturated result.
	/// 
	/// # Parameters
	/// 
	/// * `rhs`      - The right-hand operand.
	/// * `op`       - The checked operation.
	/// * `saturate` - The saturating operation.
	/// * `residue`  - Computes the residue of the exact result from the
	///                residues of the operands.
	/// 
	fn combine<R, F, S, G>(self, rhs: R, op: F, saturate: S, residue: G) -> Result<Self, BoundedIntError>
	where
		R: Operand,
		F: FnOnce(i128, i128) -> Option<i128>,
		S: FnOnce(i128, i128) -> i128,
		G: FnOnce(i128, i128) -> i128,
	{
		let (true, Some(operand)) = (self.is_valid(), rhs.to_operand()) else {
			return Ok(Self::INVALID);
		};
		let lhs  = self.0.to_wide();
		let span = Self::SPAN;
		let Some(value) = op(lhs, operand) else {
			let stand_in = span.beyond(residue(span.residue(lhs), span.residue(operand)));
			return Self::from_wide(stand_in).map_err(|_| span.out_of_range(saturate(lhs, operand)));
		};
		Self::from_wide(value)
	}
	
	//		from_resolved														
	/// Stores a value that is already known to be in range, or the invalid
	/// sentinel.
	fn from_resolved(value: i128) -> Self {
		if value == Self::SPAN.invalid {
			return Self::INVALID;
		}
		B::Int::from_wide(value).map_or(Self::INVALID, Self)
	}
	
	//		from_wide															
	/// Creates a new [`BoundedInt`] from a widened value of any size.
	/// 
	/// # Errors
	/// 
	/// Returns [`BoundedIntError::OutOfRange`] if the resolver rejects the
	/// value.
	/// 
	pub(crate) fn from_wide(value: i128) -> Result<Self, BoundedIntError> {
		let resolution = Self::SPAN.resolve::<B::Resolver>(value)?;
		Ok(Self::from_resolved(resolution.value))
	}
	
	//		offset																
	/// Moves the value by the given amount, resolving the result.
	/// 
	/// This is not gated by any capability, as it is what the iterator steps
	/// with.
	/// 
	/// # Errors
	/// 
	/// Returns [`BoundedIntError::OutOfRange`] if the resolver rejects the
	/// result.
	/// 
	#[expect(clippy::arithmetic_side_effects, reason = "Residues are below 2^64")]
	pub(crate) fn offset(self, delta: i128) -> Result<Self, BoundedIntError> {
		self.combine(delta, i128::checked_add, i128::saturating_add, |lhs, rhs| lhs + rhs)
	}
}

//󰭅		BoundedInt: Infallible													
impl<B: Bounds> BoundedInt<B>
where
	B::Resolver: Infallible,
{
	//		Constructors														
	
	//		new																	
	/// Creates a new [`BoundedInt`] for a kind whose resolver cannot fail.
	/// 
	/// Out-of-range values are wrapped or invalidated, according to the
	/// resolver.
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to create the [`BoundedInt`] from.
	/// 
	#[must_use]
	pub fn new(value: B::Int) -> Self {
		Self::try_new(value).unwrap_or(Self::INVALID)
	}
}

//󰭅		BoundedInt: Increment													
impl<B: capability::Increment> BoundedInt<B> {
	//		increment															
	/// Increases the value by one, in place.
	/// 
	/// # Errors
	/// 
	/// Returns [`BoundedIntError::OutOfRange`] if the resolver rejects the
	/// result. The stored value is invalid afterwards.
	/// 
	pub fn increment(&mut self) -> Result<(), BoundedIntError> {
		self.assign(self.offset(1))
	}
}

//󰭅		BoundedInt: Decrement													
impl<B: capability::Decrement> BoundedInt<B> {
	//		decrement															
	/// Decreases the value by one, in place.
	/// 
	/// # Errors
	/// 
	/// Returns [`BoundedIntError::OutOfRange`] if the resolver rejects the
	/// result. The stored value is invalid afterwards.
	/// 
	pub fn decrement(&mut self) -> Result<(), BoundedIntError> {
		self.assign(self.offset(-1))
	}
}

//󰭅		BoundedInt: Add															
impl<B: capability::Add> BoundedInt<B> {
	//		checked_add															
	/// Checked addition.
	/// 
	/// Computes `self + rhs`, and resolves the result.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to add to `self`.
	/// 
	/// # Errors
	/// 
	/// Returns [`BoundedIntError::OutOfRange`] if the resolver rejects the
	/// result.
	/// 
	#[expect(clippy::arithmetic_side_effects, reason = "Residues are below 2^64")]
	pub fn checked_add<R: Operand>(self, rhs: R) -> Result<Self, BoundedIntError> {
		self.combine(rhs, i128::checked_add, i128::saturating_add, |lhs, rhs| lhs + rhs)
	}
}

//󰭅		BoundedInt: Sub															
impl<B: capability::Sub> BoundedInt<B> {
	//		checked_sub															
	/// Checked subtraction.
	/// 
	/// Computes `self - rhs`, and resolves the result.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to subtract from `self`.
	/// 
	/// # Errors
	/// 
	/// Returns [`BoundedIntError::OutOfRange`] if the resolver rejects the
	/// result.
	/// 
	#[expect(clippy::arithmetic_side_effects, reason = "Residues are below 2^64")]
	pub fn checked_sub<R: Operand>(self, rhs: R) -> Result<Self, BoundedIntError> {
		self.combine(rhs, i128::checked_sub, i128::saturating_sub, |lhs, rhs| lhs - rhs)
	}
}

//󰭅		BoundedInt: Neg															
impl<B: capability::Neg> BoundedInt<B> {
	//		checked_neg															
	/// Checked negation.
	/// 
	/// Computes `-self`, and resolves the result.
	/// 
	/// # Errors
	/// 
	/// Returns [`BoundedIntError::OutOfRange`] if the resolver rejects the
	/// result.
	/// 
	pub fn checked_neg(self) -> Result<Self, BoundedIntError> {
		if !self.is_valid() {
			return Ok(Self::INVALID);
		}
		#[expect(clippy::arithmetic_side_effects, reason = "Stored values are at most 64 bits wide")]
		let negated = -self.0.to_wide();
		Self::from_wide(negated)
	}
}

//󰭅		BoundedInt: Mul															
impl<B: capability::Mul> BoundedInt<B> {
	//		checked_mul															
	/// Checked multiplication.
	/// 
	/// Computes `self * rhs`, and resolves the result.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to multiply `self` by.
	/// 
	/// # Errors
	/// 
	/// Returns [`BoundedIntError::OutOfRange`] if the resolver rejects the
	/// result.
	/// 
	#[expect(clippy::arithmetic_side_effects, reason = "Residues are below 2^64, so the product fits")]
	#[expect(clippy::cast_possible_wrap,      reason = "Result is below the range length")]
	pub fn checked_mul<R: Operand>(self, rhs: R) -> Result<Self, BoundedIntError> {
		let len = Self::SPAN.len().unsigned_abs();
		self.combine(rhs, i128::checked_mul, i128::saturating_mul, |lhs, rhs| {
			(lhs.unsigned_abs() * rhs.unsigned_abs() % len) as i128
		})
	}
}

//󰭅		BoundedInt: Div															
impl<B: capability::Div> BoundedInt<B> {
	//		checked_div															
	/// Checked division.
	/// 
	/// Computes `self / rhs`, truncating towards zero, and resolves the result.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to divide `self` by.
	/// 
	/// # Errors
	/// 
	/// Returns [`BoundedIntError::DivisionByZero`] if `rhs` is zero, or
	/// [`BoundedIntError::OutOfRange`] if the resolver rejects the result.
	/// 
	pub fn checked_div<R: Operand>(self, rhs: R) -> Result<Self, BoundedIntError> {
		if rhs.to_operand() == Some(0) {
			return Err(BoundedIntError::DivisionByZero);
		}
		//	Division of a 64-bit value cannot overflow
		self.combine(rhs, i128::checked_div, i128::saturating_div, |_, _| 0)
	}
}

//󰭅		Add																		
impl<B: capability::Add, R: Operand> Add<R> for BoundedInt<B> {
	type Output = Self;
	
	//		add																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn add(self, rhs: R) -> Self::Output {
		self.checked_add(rhs).expect("Attempt to add out of range")
	}
}

//󰭅		AddAssign																
impl<B: capability::Add, R: Operand> AddAssign<R> for BoundedInt<B> {
	//		add_assign															
	fn add_assign(&mut self, rhs: R) {
		*self = *self + rhs;
	}
}

//󰭅		Debug																	
impl<B: Bounds> Debug for BoundedInt<B> {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "BoundedInt::<{}>({})", B::NAME, self)
	}
}

//󰭅		Default																	
impl<B: Bounds> Default for BoundedInt<B> {
	//		default																
	fn default() -> Self {
		Self::min_value()
	}
}

//󰭅		Deref																	
impl<B: Bounds> Deref for BoundedInt<B> {
	type Target = B::Int;
	
	//		deref																
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

//󰭅		Display																	
impl<B: Bounds> Display for BoundedInt<B> {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.is_valid() {
			write!(f, "{}", self.0)?;
		} else {
			write!(f, "<INV>")?;
		}
		
		//	For alternate formatting (#), show the range
		if f.alternate() {
			write!(f, " [{},{}]", B::MIN, B::MAX)?;
		}
		
		Ok(())
	}
}

//󰭅		Div																		
impl<B: capability::Div, R: Operand> Div<R> for BoundedInt<B> {
	type Output = Self;
	
	//		div																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn div(self, rhs: R) -> Self::Output {
		self.checked_div(rhs).expect("Attempt to divide out of range, or by zero")
	}
}

//󰭅		DivAssign																
impl<B: capability::Div, R: Operand> DivAssign<R> for BoundedInt<B> {
	//		div_assign															
	fn div_assign(&mut self, rhs: R) {
		*self = *self / rhs;
	}
}

//󰭅		From: BoundedInt -> i128												
impl<B: Bounds> From<BoundedInt<B>> for i128 {
	//		from																
	fn from(v: BoundedInt<B>) -> Self {
		v.0.to_wide()
	}
}

//󰭅		FromStr																	
impl<B: Bounds> FromStr for BoundedInt<B> {
	type Err = BoundedIntError;
	
	//		from_str															
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_wide(s.trim().parse()?)
	}
}

//󰭅		Mul																		
impl<B: capability::Mul, R: Operand> Mul<R> for BoundedInt<B> {
	type Output = Self;
	
	//		mul																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn mul(self, rhs: R) -> Self::Output {
		self.checked_mul(rhs).expect("Attempt to multiply out of range")
	}
}

//󰭅		MulAssign																
impl<B: capability::Mul, R: Operand> MulAssign<R> for BoundedInt<B> {
	//		mul_assign															
	fn mul_assign(&mut self, rhs: R) {
		*self = *self * rhs;
	}
}

//󰭅		Neg																		
impl<B: capability::Neg> Neg for BoundedInt<B> {
	type Output = Self;
	
	//		neg																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn neg(self) -> Self::Output {
		self.checked_neg().expect("Attempt to negate out of range")
	}
}

//󰭅		Operand																	
impl<B: Bounds> Operand for BoundedInt<B> {
	//		to_operand															
	fn to_operand(self) -> Option<i128> {
		self.is_valid().then(|| self.0.to_wide())
	}
}

//󰭅		Sub																		
impl<B: capability::Sub, R: Operand> Sub<R> for BoundedInt<B> {
	type Output = Self;
	
	//		sub																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn sub(self, rhs: R) -> Self::Output {
		self.checked_sub(rhs).expect("Attempt to subtract out of range")
	}
}

//󰭅		SubAssign																
impl<B: capability::Sub, R: Operand> SubAssign<R> for BoundedInt<B> {
	//		sub_assign															
	fn sub_assign(&mut self, rhs: R) {
		*self = *self - rhs;
	}
}


