use super::Merger;

/// Each node holds the sum of the range it covers
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sum;

/// Each node holds the product of the range it covers
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Product;

macro_rules! arithmetic_impl {
    ($struct:ty, $op:tt, $($type:ty),+) => {
        $(
            impl Merger<$type> for $struct {
                #[inline]
                fn combine(&self, a: &$type, b: &$type) -> $type {
                    *a $op *b
                }
            }
        )+
    };
}

arithmetic_impl!(Sum, +, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
arithmetic_impl!(Product, *, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RangeMergeTree;

    #[test]
    fn sum_test() {
        let tree = RangeMergeTree::new(vec![1u64, 5, 10], Sum);
        assert_eq!(tree.query(0, 1), Ok(6));
        assert_eq!(tree.query(0, 2), Ok(16));
        assert_eq!(tree.query(2, 2), Ok(10));
    }

    #[test]
    fn product_test() {
        let mut tree = RangeMergeTree::new(vec![2i32, 3, 4, 5], Product);
        assert_eq!(tree.query(0, 3), Ok(120));
        assert_eq!(tree.query(1, 2), Ok(12));
        tree.set(2, 0).unwrap();
        assert_eq!(tree.query(0, 3), Ok(0));
        assert_eq!(tree.query(0, 1), Ok(6));
    }

    #[test]
    fn float_sum_test() {
        let tree = RangeMergeTree::new(vec![0.5f64, 0.25, 0.125], Sum);
        assert_eq!(tree.query(0, 2), Ok(0.875));
    }
}
