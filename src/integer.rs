//! Primitive integer types usable as bounded-integer storage.



//		Modules																											

#[cfg(test)]
#[path = "tests/integer.rs"]
mod tests;



//		Packages																										

use core::{
	fmt::{Debug, Display},
	hash::Hash,
};



//		Traits																											

//		Integer																	
/// A primitive integer type that can store the value of a
/// [`BoundedInt`](crate::BoundedInt).
/// 
/// All arithmetic on bounded integers is carried out in [`i128`], which is
/// wide enough to hold any sum, difference, or quotient of two values of the
/// supported types without overflow. This trait therefore only needs to widen
/// and narrow values, and to expose the type's limits as [`i128`] constants so
/// that bounds can be checked in `const` context.
/// 
/// It is implemented for:
/// 
///   - [`i8`], [`i16`], [`i32`], [`i64`], [`isize`]
///   - [`u8`], [`u16`], [`u32`], [`u64`], [`usize`]
/// 
/// The 128-bit types are not supported, as there would be no wider type left
/// to compute in.
/// 
pub trait Integer: Copy + Debug + Display + Eq + Hash + Ord + Send + Sync + 'static {
	/// The smallest value of the type.
	const MIN:     Self;
	
	/// The largest value of the type.
	const MAX:     Self;
	
	/// The smallest value of the type, widened.
	const LOWEST:  i128;
	
	/// The largest value of the type, widened.
	const HIGHEST: i128;
	
	/// The name of the type, used in diagnostics.
	const NAME:    &'static str;
	
	//		to_wide																
	/// Widens the value to an [`i128`]. This is always lossless.
	fn to_wide(self) -> i128;
	
	//		from_wide															
	/// Narrows an [`i128`] to this type.
	/// 
	/// Returns [`None`] if the value does not fit.
	/// 
	/// # Parameters
	/// 
	/// * `wide` - The value to narrow.
	/// 
	fn from_wide(wide: i128) -> Option<Self>;
}

//		Operand																	
/// A value that can appear on the right-hand side of bounded-integer
/// arithmetic.
/// 
/// This is implemented for the primitive integer types (including [`i128`]),
/// and for [`BoundedInt`](crate::BoundedInt) of any kind, which contributes its
/// stored value. An invalid bounded integer has no value to contribute, and
/// makes the result invalid.
/// 
pub trait Operand: Copy {
	//		to_operand															
	/// Widens the value for use in arithmetic.
	/// 
	/// Returns [`None`] if there is no usable value.
	/// 
	fn to_operand(self) -> Option<i128>;
}



//		Macros																											

//		impl_integer!															
/// Implements [`Integer`] for each of the listed primitive types.
/// 
/// Types with a [`From`] conversion into [`i128`] are listed under `lossless`,
/// and the pointer-sized types under `sized`, as those can only be cast.
/// 
macro_rules! impl_integer {
	(lossless: $($l:ident),* ; sized: $($s:ident),* $(;)?) => {
		$( impl_integer!(@impl $l, |v| i128::from(v)); )*
		$( impl_integer!(@impl $s, |v| v as i128); )*
	};
	(@impl $t:ident, |$v:ident| $widen:expr) => {
		//󰭅		Integer															
		impl Integer for $t {
			const MIN:     Self         = $t::MIN;
			const MAX:     Self         = $t::MAX;
			const LOWEST:  i128         = $t::MIN as i128;
			const HIGHEST: i128         = $t::MAX as i128;
			const NAME:    &'static str = stringify!($t);
			
			//		to_wide														
			fn to_wide(self) -> i128 {
				let $v = self;
				$widen
			}
			
			//		from_wide													
			fn from_wide(wide: i128) -> Option<Self> {
				Self::try_from(wide).ok()
			}
		}
		
		//󰭅		Operand															
		impl Operand for $t {
			//		to_operand													
			fn to_operand(self) -> Option<i128> {
				Some(self.to_wide())
			}
		}
	};
}

impl_integer! {
	lossless: i8, i16, i32, i64, u8, u16, u32, u64;
	sized:    isize, usize;
}

//󰭅		Operand																	
impl Operand for i128 {
	//		to_operand															
	fn to_operand(self) -> Option<i128> {
		Some(self)
	}
}


