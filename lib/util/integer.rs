use num_traits::{NumCast, PrimInt};
use std::iter::Map;
use std::mem::{size_of, transmute_copy};
use std::ops::RangeInclusive;

/// Fieldless enums that map one-to-one onto a contiguous range of integers.
///
/// # Safety
///
/// Every value in `MIN..=MAX` must be the discriminant of a variant, and the
/// type must have the same layout as [`Integer::Repr`].
pub unsafe trait Integer: Copy {
    /// The discriminant type.
    type Repr: PrimInt;

    /// The smallest discriminant.
    const MIN: Self::Repr;

    /// The largest discriminant.
    const MAX: Self::Repr;

    /// The variant with the given discriminant.
    ///
    /// Out of range discriminants are only caught in debug builds.
    #[inline(always)]
    fn new(i: Self::Repr) -> Self {
        debug_assert!(Self::in_range(i));
        debug_assert_eq!(size_of::<Self>(), size_of::<Self::Repr>());
        unsafe { transmute_copy(&i) }
    }

    /// This variant's discriminant.
    #[inline(always)]
    fn get(self) -> Self::Repr {
        unsafe { transmute_copy(&self) }
    }

    /// Reinterprets this value as another [`Integer`], if within its range.
    #[inline(always)]
    fn convert<I: Integer>(self) -> Option<I> {
        let i = <I::Repr as NumCast>::from(self.get())?;
        I::in_range(i).then(|| I::new(i))
    }

    /// Whether `i` is the discriminant of some variant.
    #[inline(always)]
    fn in_range(i: Self::Repr) -> bool {
        (Self::MIN..=Self::MAX).contains(&i)
    }

    /// Every variant, in order of discriminant.
    #[inline(always)]
    #[allow(clippy::type_complexity)]
    fn iter() -> Map<RangeInclusive<Self::Repr>, fn(Self::Repr) -> Self>
    where
        RangeInclusive<Self::Repr>: Iterator<Item = Self::Repr>,
    {
        (Self::MIN..=Self::MAX).map(Self::new)
    }
}

macro_rules! impl_integer_for_primitive {
    ($($i: ty),*) => {
        $(
            unsafe impl Integer for $i {
                type Repr = $i;
                const MIN: Self::Repr = <$i>::MIN;
                const MAX: Self::Repr = <$i>::MAX;
            }
        )*
    };
}

impl_integer_for_primitive!(i8, u8, usize);
