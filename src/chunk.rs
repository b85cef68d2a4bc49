//! Slice chunking

/// Partition `items` into chunks of `size`, in order.
///
/// Every chunk has exactly `size` elements except possibly the last; no
/// element is lost or duplicated.
///
/// # Panics
///
/// Panics if `size` is zero. A zero chunk size is a caller bug, not a case
/// to paper over.
pub fn chunked<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    items.chunks(size).map(<[T]>::to_vec).collect()
}
