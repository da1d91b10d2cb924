//! Value arithmetic used by lookups and the dot product.

/// A value type with a zero element and a multiply-accumulate step.
///
/// `zero` is returned for absent keys and seeds every dot product.
/// `multiply_accumulate` performs `self := self + left * right`.
///
/// Integer implementations use wrapping arithmetic, so accumulation never
/// panics on overflow.
///
/// # Examples
///
/// ```rust
/// use seekmap::ValueCombine;
///
/// let mut total = i32::zero();
/// total.multiply_accumulate(&6, &7);
/// total.multiply_accumulate(&1, &2);
/// assert_eq!(total, 44);
/// ```
pub trait ValueCombine: Sized {
    /// The value held by every absent key.
    fn zero() -> Self;

    /// Adds `left * right` into `self`.
    fn multiply_accumulate(&mut self, left: &Self, right: &Self);
}

macro_rules! impl_value_combine_for_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl ValueCombine for $integer {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn multiply_accumulate(&mut self, left: &Self, right: &Self) {
                    *self = self.wrapping_add(left.wrapping_mul(*right));
                }
            }
        )*
    };
}

macro_rules! impl_value_combine_for_float {
    ($($float:ty),* $(,)?) => {
        $(
            impl ValueCombine for $float {
                #[inline]
                fn zero() -> Self {
                    0.0
                }

                #[inline]
                fn multiply_accumulate(&mut self, left: &Self, right: &Self) {
                    *self += left * right;
                }
            }
        )*
    };
}

impl_value_combine_for_integer!(i8, i16, i32, i64, i128, isize);
impl_value_combine_for_integer!(u8, u16, u32, u64, u128, usize);
impl_value_combine_for_float!(f32, f64);
