//		Packages																										

use super::*;
use crate::{
	bounded_int,
	resolvers::{Modulo, SetInvalid, Throw},
};
use claims::{assert_none, assert_some_eq};



//		Kinds																											

bounded_int! {
	type Short = i32 [-10, 15] as ShortBounds {
		resolver: SetInvalid;
	}
}

bounded_int! {
	type Dial = u8 [0, 9] as DialBounds {
		resolver: Modulo;
	}
}

bounded_int! {
	type Strict = i16 [-10, 10] as StrictBounds {
		resolver: Throw;
	}
}



//		Helpers																											

//		values																	
fn values<B: Bounds>(iter: BoundedIntIter<B>) -> Vec<B::Int> {
	iter.map(|v| v.get()).collect()
}



//		Tests																											

mod constructors {
	use super::*;
	
	//		new																	
	#[test]
	fn new__valid() {
		let iter = BoundedIntIter::new(Short::new(5), true);
		assert_eq!(iter.current(), Short::new(5));
		assert_eq!(iter.end(),     Short::new(6));
		assert!(iter.is_reverse());
		assert!(!iter.is_exhausted());
	}
	#[test]
	fn new__invalid_start() {
		let mut iter = BoundedIntIter::new(Short::INVALID, false);
		assert!(iter.is_exhausted());
		assert_none!(iter.next());
	}
	#[test]
	fn new__end_outside_range() {
		assert_eq!(BoundedIntIter::new(Short::new(-10), false).end(), Short::INVALID);
		assert_eq!(BoundedIntIter::new(Dial::new(0), false).end(),    Dial::new(9));
	}
	
	//		iter																
	#[test]
	fn iter__set_invalid() {
		assert_eq!(values(Short::iter()), (-10..=15).collect::<Vec<_>>());
	}
	#[test]
	fn iter__modulo() {
		assert_eq!(values(Dial::iter()), (0..=9).collect::<Vec<_>>());
	}
	#[test]
	fn iter__throw() {
		assert_eq!(values(Strict::iter()), (-10..=10).collect::<Vec<_>>());
	}
	
	//		iter_from															
	#[test]
	fn iter_from__set_invalid() {
		assert_eq!(values(Short::iter_from(Short::new(12))), vec![12, 13, 14, 15]);
	}
	#[test]
	fn iter_from__modulo_full_circle() {
		assert_eq!(values(Dial::iter_from(Dial::new(5))), vec![5, 6, 7, 8, 9, 0, 1, 2, 3, 4]);
	}
	
	//		iter_rev															
	#[test]
	fn iter_rev() {
		assert_eq!(values(Short::iter_rev()), (-10..=15).rev().collect::<Vec<_>>());
		assert_eq!(values(Dial::iter_rev()),  (0..=9).rev().collect::<Vec<_>>());
	}
	
	//		iter_rev_from														
	#[test]
	fn iter_rev_from__set_invalid() {
		assert_eq!(values(Short::iter_rev_from(Short::new(5))), (-10..=5).rev().collect::<Vec<_>>());
	}
	#[test]
	fn iter_rev_from__modulo_full_circle() {
		assert_eq!(values(Dial::iter_rev_from(Dial::new(2))), vec![2, 1, 0, 9, 8, 7, 6, 5, 4, 3]);
	}
	#[test]
	fn iter_rev_from__throw() {
		assert_eq!(values(Strict::iter_rev_from(Strict::try_new(-8).unwrap())), vec![-8, -9, -10]);
	}
}

mod public_methods {
	use super::*;
	
	//		current																
	#[test]
	fn current() {
		let mut iter = Short::iter_from(Short::new(14));
		assert_some_eq!(iter.next(), Short::new(14));
		assert_eq!(iter.current(), Short::new(15));
		assert_some_eq!(iter.next(), Short::new(15));
		assert_eq!(iter.current(), Short::INVALID);
	}
	
	//		is_exhausted														
	#[test]
	fn is_exhausted() {
		let mut iter = Short::iter_from(Short::new(15));
		assert!(!iter.is_exhausted());
		assert_some_eq!(iter.next(), Short::new(15));
		assert!(iter.is_exhausted());
		assert_none!(iter.next());
		assert_none!(iter.next());
	}
	
	//		with_stride															
	#[test]
	fn with_stride__set_invalid() {
		let iter = Short::iter().with_stride(NonZeroU64::new(5).unwrap());
		assert_eq!(values(iter), vec![-10, -5, 0, 5, 10, 15]);
	}
	#[test]
	fn with_stride__modulo() {
		let iter = Dial::iter().with_stride(NonZeroU64::new(3).unwrap());
		assert_eq!(iter.end(), Dial::new(7));
		assert_eq!(values(iter), vec![0, 3, 6, 9, 2, 5, 8, 1, 4, 7]);
	}
	#[test]
	fn with_stride__reverse() {
		let iter = Short::iter_rev().with_stride(NonZeroU64::new(4).unwrap());
		assert_eq!(values(iter), vec![15, 11, 7, 3, -1, -5, -9]);
	}
	#[test]
	fn with_stride__from_current() {
		let mut iter = Dial::iter();
		assert_some_eq!(iter.next(), Dial::new(0));
		assert_some_eq!(iter.next(), Dial::new(1));
		let iter     = iter.with_stride(NonZeroU64::new(2).unwrap());
		assert_eq!(values(iter), vec![2, 4, 6, 8, 0]);
	}
}

mod traits {
	use super::*;
	
	//		Clone																
	#[test]
	fn clone() {
		let mut iter = Short::iter_from(Short::new(10));
		assert_some_eq!(iter.next(), Short::new(10));
		let copy     = iter.clone();
		assert_eq!(values(iter), vec![11, 12, 13, 14, 15]);
		assert_eq!(values(copy), vec![11, 12, 13, 14, 15]);
	}
	
	//		Iterator															
	#[test]
	fn iterator__adaptors() {
		assert_eq!(Dial::iter().count(), 10);
		assert_eq!(Short::iter().filter(|v| v.get() % 5 == 0).count(), 6);
		assert_some_eq!(Short::iter_rev().nth(3), Short::new(12));
	}
	
	//		PartialEq															
	#[test]
	fn partial_eq__same_current() {
		assert_eq!(Short::iter_from(Short::new(3)), Short::iter_rev_from(Short::new(3)));
		assert_eq!(
			Dial::iter(),
			Dial::iter().with_stride(NonZeroU64::new(3).unwrap()),
		);
	}
	#[test]
	fn partial_eq__different_current() {
		let mut iter = Short::iter();
		assert_eq!(iter, Short::iter());
		let _        = iter.next();
		assert_ne!(iter, Short::iter());
	}
	#[test]
	fn partial_eq__exhausted() {
		let mut first  = Short::iter_from(Short::new(15));
		let mut second = Short::iter_rev_from(Short::new(-10));
		let _          = first.next();
		let _          = second.next();
		assert_eq!(first, second);
	}
}


