//! Strategies for converting values between kinds with different ranges.



//		Modules																											

#[cfg(test)]
#[path = "tests/converters.rs"]
mod tests;



//		Packages																										

use crate::{
	bounds::Span,
	errors::BoundedIntError,
};
use core::fmt::Debug;
use tracing::debug;



//		Traits																											

//		Converter																
/// A strategy mapping a value from one range onto another.
/// 
/// The converter belongs to the destination kind. Its result is trusted to be
/// within the destination range, so the destination's [`Resolver`] is not
/// applied afterwards.
/// 
/// [`Resolver`]: crate::Resolver
/// 
pub trait Converter: Copy + Debug + Default + Send + Sync + 'static {
	//		convert																
	/// Converts a value from the source range to the destination range.
	/// 
	/// # Parameters
	/// 
	/// * `from`  - The source range.
	/// * `value` - The source value, which is within `from`.
	/// * `to`    - The destination range.
	/// 
	/// # Errors
	/// 
	/// Returns an error if the converter cannot work with either range.
	/// 
	fn convert(from: &Span, value: i128, to: &Span) -> Result<i128, BoundedIntError>;
}



//		Structs																											

//		LinearScale																
/// Rescales proportionally from `[src.min, src.max]` to `[dst.min, dst.max]`.
/// 
/// The offset of the value from the source minimum is scaled by the ratio of
/// the two distances `max - min`, truncating towards the destination minimum.
/// Converting a value there and back again therefore returns it to within the
/// rounding error of the coarser range.
/// 
/// For a destination that straddles zero this rounds negative results down
/// rather than towards zero, e.g. -1 µm becomes -1 mm and not 0 mm.
/// 
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct LinearScale;

//󰭅		Converter																
impl Converter for LinearScale {
	//		convert																
	#[expect(clippy::arithmetic_side_effects, reason = "Offset and distances are below 2^64, so the product fits")]
	#[expect(clippy::integer_division,        reason = "Truncation is intended")]
	#[expect(clippy::cast_possible_wrap,      reason = "Scaled offset is at most the destination distance")]
	fn convert(from: &Span, value: i128, to: &Span) -> Result<i128, BoundedIntError> {
		let offset   = (value - from.min).unsigned_abs();
		let src_dist = (from.max - from.min).unsigned_abs();
		let dst_dist = (to.max   - to.min).unsigned_abs();
		let scaled   = offset * dst_dist / src_dist;
		Ok(to.min + scaled as i128)
	}
}

//		CircularScale															
/// Rescales around a circle, e.g. between degrees and radians.
/// 
/// Both ranges are treated as a full turn of `max - min + 1` steps. The value
/// is placed on the source circle, scaled by the ratio of the two circle sizes
/// (truncating), and wrapped into the destination range. So `359` in
/// `[0, 359]` maps to `-1` in `[-179, 180]`, and not to `180`.
/// 
/// This only makes sense when both ranges start at zero or are symmetric
/// around zero, and any other range is rejected with
/// [`BoundedIntError::NotCircular`].
/// 
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct CircularScale;

//󰭅		Converter																
impl Converter for CircularScale {
	//		convert																
	#[expect(clippy::arithmetic_side_effects, reason = "Residue and circle sizes are at most 2^64, so the product fits")]
	#[expect(clippy::integer_division,        reason = "Truncation is intended")]
	#[expect(clippy::cast_possible_wrap,      reason = "Scaled residue is below the destination circle size")]
	fn convert(from: &Span, value: i128, to: &Span) -> Result<i128, BoundedIntError> {
		for span in [from, to] {
			if !span.is_circular() {
				debug!(%span, "Rejected circular scale conversion");
				return Err(BoundedIntError::NotCircular { min: span.min, max: span.max });
			}
		}
		let residue = from.residue(value).unsigned_abs();
		let scaled  = residue * to.len().unsigned_abs() / from.len().unsigned_abs();
		Ok(to.wrap(scaled as i128))
	}
}


