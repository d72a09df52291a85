//! Sorted-vector storage shared by the finite maps.

mod ordered_leaf;

pub use ordered_leaf::{consolidate_slice, OrderedLeaf, UnorderedLeafBuilder};

/// Reports the number of elements satisfying the predicate.
///
/// This method *relies strongly* on the assumption that the predicate
/// stays false once it becomes false, a joint property of the predicate
/// and the slice. This allows `advance` to use exponential search to
/// count the number of elements in time logarithmic in the result.
pub fn advance<T, F>(slice: &[T], function: F) -> usize
where
    F: Fn(&T) -> bool,
{
    let small_limit = 8;

    // Exponential search if the answer isn't within `small_limit`.
    if slice.len() > small_limit && function(&slice[small_limit]) {
        // start with no advance
        let mut index = small_limit + 1;
        if index < slice.len() && function(&slice[index]) {
            // advance in exponentially growing steps
            let mut step = 1;
            while index + step < slice.len() && function(&slice[index + step]) {
                index += step;
                step <<= 1;
            }

            // advance in exponentially shrinking steps
            step >>= 1;
            while step > 0 {
                if index + step < slice.len() && function(&slice[index + step]) {
                    index += step;
                }
                step >>= 1;
            }

            index += 1;
        }

        index
    } else {
        let limit = std::cmp::min(slice.len(), small_limit);
        slice[..limit].iter().filter(|x| function(*x)).count()
    }
}
