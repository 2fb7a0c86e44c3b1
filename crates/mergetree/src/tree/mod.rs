use core::{
    fmt,
    mem,
    ops::{Bound, RangeBounds},
};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "profiler")]
pub(crate) mod stats;

#[cfg(feature = "profiler")]
use mergetree_stats::profile_scope;
#[cfg(feature = "profiler")]
use stats::Stats;

use crate::{merger::Merger, Error};

/// Number of node slots allocated per position
///
/// `4n` slots hold a balanced tree over `n` leaves for every `n`.
pub const NODES_PER_POSITION: usize = 4;

#[inline]
const fn left_child(tree_index: usize) -> usize {
    2 * tree_index + 1
}

#[inline]
const fn right_child(tree_index: usize) -> usize {
    2 * tree_index + 2
}

#[inline]
const fn midpoint(l: usize, r: usize) -> usize {
    l + (r - l) / 2
}

/// A range-merge tree (segment tree) over a fixed sequence of positions
///
/// The tree is stored in a flat buffer of `4 * len` slots. Slot `0` is the root covering
/// `[0, len - 1]` and a node at slot `i` has its children at `2i + 1` and `2i + 2`. A node
/// covering `[l, r]` splits at `mid = l + (r - l) / 2` into `[l, mid]` and `[mid + 1, r]`,
/// and holds `merger.combine(left, right)`. Slots not used by the tree stay `None`.
///
/// The number of positions is fixed at construction, only their values may change.
///
/// # Example
///
/// ```
/// use mergetree::{merger::Concat, RangeMergeTree};
///
/// let tree: RangeMergeTree<String, Concat> = ["a", "b", "c"].map(String::from).into_iter().collect();
/// assert_eq!(tree.query(0, 2).as_deref(), Ok("abc"));
/// assert!(tree.query(2, 0).unwrap_err().is_invalid_range());
/// assert!(tree.query(0, 3).unwrap_err().is_out_of_range());
/// ```
#[derive(Clone)]
pub struct RangeMergeTree<E, M> {
    elements: Vec<E>,
    nodes: Vec<Option<E>>,
    merger: M,
    #[cfg(feature = "profiler")]
    stats: Stats,
}

impl<E, M> RangeMergeTree<E, M> {
    /// Returns the number of positions in the tree
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the tree has no positions
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns a reference to the element at `position`
    pub fn get(&self, position: usize) -> Result<&E, Error> {
        self.elements
            .get(position)
            .ok_or_else(|| self.out_of_range(position))
    }

    /// View the elements of the tree in position order
    #[inline]
    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    /// Returns a reference to the merger used by the tree
    #[inline]
    pub fn merger(&self) -> &M {
        &self.merger
    }

    /// Returns a reference to the stats of the tree
    #[cfg(feature = "profiler")]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    #[inline]
    fn out_of_range(&self, position: usize) -> Error {
        Error::OutOfRange {
            position,
            len: self.len(),
        }
    }

    #[inline]
    fn check_position(&self, position: usize) -> Result<(), Error> {
        if position < self.len() {
            Ok(())
        } else {
            Err(self.out_of_range(position))
        }
    }
}

impl<E, M> RangeMergeTree<E, M>
where
    E: Clone,
    M: Merger<E>,
{
    /// Builds a tree over `initial` that merges ranges using `merger`
    ///
    /// Never fails. An empty `initial` yields a tree that rejects every query and update.
    /// Uses `O(len)` time.
    pub fn new(initial: impl Into<Vec<E>>, merger: M) -> Self {
        let elements = initial.into();
        let capacity = NODES_PER_POSITION * elements.len();
        let mut tree = Self {
            nodes: core::iter::repeat_with(|| None).take(capacity).collect(),
            elements,
            merger,
            #[cfg(feature = "profiler")]
            stats: Stats::default(),
        };

        if let Some(last) = tree.len().checked_sub(1) {
            #[cfg(feature = "profiler")]
            profile_scope!(&tree.stats.build);

            tree.build(0, 0, last);
        }

        log::debug!(
            "built range-merge tree with {} positions over {} node slots",
            tree.len(),
            tree.nodes.len()
        );
        tree
    }

    /// Merges the elements in `[left, right]` (both inclusive) from left to right
    ///
    /// Fails with [Error::OutOfRange] if either bound is `>= len()`, and with
    /// [Error::InvalidRange] if `left > right`. Uses `O(log(len))` time.
    pub fn query(&self, left: usize, right: usize) -> Result<E, Error> {
        #[cfg(feature = "profiler")]
        profile_scope!(&self.stats.query);

        self.check_position(left)?;
        self.check_position(right)?;
        if left > right {
            return Err(Error::InvalidRange { left, right });
        }

        log::trace!("query [{left}, {right}]");
        self.query_node(0, 0, self.len() - 1, left, right)
            .ok_or_else(|| self.out_of_range(left))
    }

    /// Merges the elements covered by `range`
    ///
    /// Unbounded ends resolve to the first and last position. An empty range fails with
    /// [Error::InvalidRange].
    ///
    /// ```
    /// use mergetree::{merger::Sum, RangeMergeTree};
    ///
    /// let tree = RangeMergeTree::new(vec![1u32, 2, 3, 4], Sum);
    /// assert_eq!(tree.query_range(..), Ok(10));
    /// assert_eq!(tree.query_range(1..3), Ok(5));
    /// assert_eq!(tree.query_range(2..), Ok(7));
    /// assert!(tree.query_range(2..2).unwrap_err().is_invalid_range());
    /// ```
    pub fn query_range(&self, range: impl RangeBounds<usize>) -> Result<E, Error> {
        let left = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let right = match range.end_bound() {
            Bound::Included(&end) => end,
            Bound::Excluded(&end) => match end.checked_sub(1) {
                Some(end) => end,
                None => {
                    self.check_position(left)?;
                    return Err(Error::InvalidRange { left, right: end });
                }
            },
            Bound::Unbounded => match self.len().checked_sub(1) {
                Some(last) => last,
                None => return Err(self.out_of_range(left)),
            },
        };
        self.query(left, right)
    }

    /// Replaces the element at `position` with `value` and returns the previous element
    ///
    /// Only the `O(log(len))` ancestors of the position are recomputed.
    pub fn set(&mut self, position: usize, value: E) -> Result<E, Error> {
        self.check_position(position)?;

        #[cfg(feature = "profiler")]
        profile_scope!(&self.stats.update);

        log::trace!("set position {position}");
        let previous = mem::replace(&mut self.elements[position], value.clone());
        let last = self.len() - 1;
        self.update_node(0, 0, last, position, value);
        Ok(previous)
    }

    fn build(&mut self, tree_index: usize, l: usize, r: usize) {
        if l == r {
            self.nodes[tree_index] = Some(self.elements[l].clone());
            return;
        }

        let mid = midpoint(l, r);
        self.build(left_child(tree_index), l, mid);
        self.build(right_child(tree_index), mid + 1, r);

        self.nodes[tree_index] = self.merge_children(tree_index);
    }

    // The node at `tree_index` covers [l, r] and [query_left, query_right] lies within it.
    fn query_node(
        &self,
        tree_index: usize,
        l: usize,
        r: usize,
        query_left: usize,
        query_right: usize,
    ) -> Option<E> {
        if l == query_left && r == query_right {
            return self.nodes[tree_index].clone();
        }

        let mid = midpoint(l, r);
        let (left_index, right_index) = (left_child(tree_index), right_child(tree_index));

        if query_left > mid {
            return self.query_node(right_index, mid + 1, r, query_left, query_right);
        }
        if query_right <= mid {
            return self.query_node(left_index, l, mid, query_left, query_right);
        }

        let left = self.query_node(left_index, l, mid, query_left, mid)?;
        let right = self.query_node(right_index, mid + 1, r, mid + 1, query_right)?;
        Some(self.merger.combine(&left, &right))
    }

    fn update_node(&mut self, tree_index: usize, l: usize, r: usize, position: usize, value: E) {
        if l == r {
            self.nodes[tree_index] = Some(value);
            return;
        }

        let mid = midpoint(l, r);
        if position <= mid {
            self.update_node(left_child(tree_index), l, mid, position, value);
        } else {
            self.update_node(right_child(tree_index), mid + 1, r, position, value);
        }

        self.nodes[tree_index] = self.merge_children(tree_index);
    }

    #[inline]
    fn merge_children(&self, tree_index: usize) -> Option<E> {
        let left = self.nodes[left_child(tree_index)].as_ref()?;
        let right = self.nodes[right_child(tree_index)].as_ref()?;
        Some(self.merger.combine(left, right))
    }
}

impl<E, M> FromIterator<E> for RangeMergeTree<E, M>
where
    E: Clone,
    M: Merger<E> + Default,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>(), M::default())
    }
}

impl<E: fmt::Debug, M> fmt::Debug for RangeMergeTree<E, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeMergeTree")
            .field("elements", &self.elements)
            .field("nodes", &self.nodes)
            .finish()
    }
}

/// Renders the node buffer, printing unused slots as `null`
impl<E: fmt::Display, M> fmt::Display for RangeMergeTree<E, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match node {
                Some(value) => write!(f, "{value}")?,
                None => f.write_str("null")?,
            }
        }
        f.write_str("]")
    }
}

// Only the elements are persisted, the node buffer is rebuilt when decoding.
#[cfg(feature = "serde")]
impl<E: serde::Serialize, M> serde::Serialize for RangeMergeTree<E, M> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.elements.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, E, M> serde::Deserialize<'de> for RangeMergeTree<E, M>
where
    E: serde::Deserialize<'de> + Clone,
    M: Merger<E> + Default,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<E>::deserialize(deserializer).map(|elements| Self::new(elements, M::default()))
    }
}
