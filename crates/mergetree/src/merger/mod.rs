/// Concatenation of strings and vectors
pub mod concat;
/// Incremental MIN and MAX merging
pub mod min_max;
/// Incremental SUM and PRODUCT merging
pub mod sum;

pub use concat::Concat;
pub use min_max::{Max, Min};
pub use sum::{Product, Sum};

/// Merge interface used by [RangeMergeTree](crate::RangeMergeTree) to combine two adjacent ranges
///
/// The operation must be total, deterministic and [associative][1]:
/// `combine(combine(a, b), c) == combine(a, combine(b, c))`. It does not have to be
/// commutative, `a` always covers the positions left of `b`.
///
/// Associativity cannot be checked by the type system and is a contract on the caller.
///
/// Any `Fn(&E, &E) -> E` closure is a merger:
///
/// ```
/// use mergetree::RangeMergeTree;
///
/// let tree = RangeMergeTree::new(vec![3u32, 7, 1], |a: &u32, b: &u32| *a.max(b));
/// assert_eq!(tree.query(0, 2), Ok(7));
/// ```
///
/// [1]: https://en.wikipedia.org/wiki/Associative_property
pub trait Merger<E> {
    /// Combines the merged value of a range with the merged value of the range directly to its right.
    fn combine(&self, a: &E, b: &E) -> E;
}

impl<E, F> Merger<E> for F
where
    F: Fn(&E, &E) -> E,
{
    #[inline]
    fn combine(&self, a: &E, b: &E) -> E {
        self(a, b)
    }
}

/// Folds `items` from left to right using `merger`
///
/// Returns `None` if `items` is empty.
///
/// ```
/// use mergetree::merger::{fold, Concat};
///
/// let words = ["a", "b", "c"].map(String::from);
/// assert_eq!(fold(&Concat, &words), Some("abc".to_string()));
/// ```
pub fn fold<E, M>(merger: &M, items: &[E]) -> Option<E>
where
    E: Clone,
    M: Merger<E> + ?Sized,
{
    let (first, rest) = items.split_first()?;
    Some(
        rest.iter()
            .fold(first.clone(), |acc, item| merger.combine(&acc, item)),
    )
}
