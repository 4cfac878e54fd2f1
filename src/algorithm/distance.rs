/// Steps along the loop from the start to the farthest loop tile
///
/// On a simple cycle of `loop_length` tiles the farthest tile sits halfway
/// round; integer division covers odd lengths.
pub const fn farthest_distance(loop_length: usize) -> usize {
    loop_length / 2
}

