/// Join several vectors end to end, in argument order.
pub fn concatenate_arrays<T>(arrays: impl IntoIterator<Item = Vec<T>>) -> Vec<T> {
    itertools::concat(arrays)
}
