use super::Merger;

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

/// Each node holds the concatenation of the range it covers, in position order
///
/// Concatenation is associative but not commutative, which makes it a useful check that
/// ranges are always merged left to right.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Concat;

impl Merger<String> for Concat {
    fn combine(&self, a: &String, b: &String) -> String {
        let mut out = String::with_capacity(a.len() + b.len());
        out.push_str(a);
        out.push_str(b);
        out
    }
}

impl<T: Clone> Merger<Vec<T>> for Concat {
    fn combine(&self, a: &Vec<T>, b: &Vec<T>) -> Vec<T> {
        let mut out = Vec::with_capacity(a.len() + b.len());
        out.extend_from_slice(a);
        out.extend_from_slice(b);
        out
    }
}
