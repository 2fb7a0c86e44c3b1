use super::Merger;

/// Each node holds the minimum of the range it covers
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Min;

/// Each node holds the maximum of the range it covers
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Max;

macro_rules! min_max_impl {
    ($($type:ty),+) => {
        $(
            impl Merger<$type> for Min {
                #[inline]
                fn combine(&self, a: &$type, b: &$type) -> $type {
                    <$type>::min(*a, *b)
                }
            }

            impl Merger<$type> for Max {
                #[inline]
                fn combine(&self, a: &$type, b: &$type) -> $type {
                    <$type>::max(*a, *b)
                }
            }
        )+
    };
}

min_max_impl!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
