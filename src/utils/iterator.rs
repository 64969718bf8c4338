//! Iterator utilities for parallel and sequential iterators according to the feature flag `parallel`

use std::ops::Range;

#[cfg(feature = "parallel")]
pub use rayon::iter::{
    IndexedParallelIterator, IntoParallelIterator, IntoParallelRefMutIterator, ParallelIterator,
};

#[cfg(not(feature = "parallel"))]
/// Get a mutable iterator for the slice
pub(crate) fn get_iterator_mut<V>(array: &mut [V]) -> std::slice::IterMut<'_, V> {
    array.iter_mut()
}

#[cfg(feature = "parallel")]
/// Get a parallel mutable iterator for the slice
pub(crate) fn get_iterator_mut<V: Send>(array: &mut [V]) -> rayon::slice::IterMut<'_, V> {
    array.par_iter_mut()
}

#[cfg(not(feature = "parallel"))]
/// Get an iterator over the range
pub(crate) fn get_range_iterator(range: Range<u32>) -> Range<u32> {
    range
}

#[cfg(feature = "parallel")]
/// Get a parallel iterator over the range
pub(crate) fn get_range_iterator(range: Range<u32>) -> rayon::range::Iter<u32> {
    range.into_par_iter()
}
