//! Eager enumeration of the combinatorial tables.
//!
//! Not used on the hot path: the literal tables in the parent module are
//! this module's output, embedded once. The enumerations stay here to check
//! that data and to regenerate it for a larger arity.

/// All `2^arity` ways to split positions `0..arity` into a (left, right)
/// pair of complementary subsets.
///
/// Built by extending every split of `0..arity-1` with the new position,
/// first on the left and then on the right.
pub fn enumerate_leibniz_pairs(arity: usize) -> Vec<(Vec<u8>, Vec<u8>)> {
    if arity == 0 {
        return vec![(Vec::new(), Vec::new())];
    }
    let last = (arity - 1) as u8;
    let mut out = Vec::with_capacity(1 << arity);
    for (left, right) in enumerate_leibniz_pairs(arity - 1) {
        let mut with_left = left.clone();
        with_left.push(last);
        out.push((with_left, right.clone()));

        let mut with_right = right;
        with_right.push(last);
        out.push((left, with_right));
    }
    out
}

/// All set partitions of positions `0..arity` into non-empty blocks.
///
/// Built by taking every partition of `0..arity-1` and placing the new
/// position into each existing block in turn, then into a block of its own.
pub fn enumerate_set_partitions(arity: usize) -> Vec<Vec<Vec<u8>>> {
    if arity == 0 {
        return vec![Vec::new()];
    }
    let last = (arity - 1) as u8;
    let mut out = Vec::new();
    for partition in enumerate_set_partitions(arity - 1) {
        for block in 0..partition.len() {
            let mut grown = partition.clone();
            grown[block].push(last);
            out.push(grown);
        }
        let mut grown = partition;
        grown.push(vec![last]);
        out.push(grown);
    }
    out
}
