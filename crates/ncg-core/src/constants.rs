/// Largest Euclidean dimension d for which the recursive gamma matrix
/// construction has been checked against the Clifford relations by hand.
/// Larger d still builds; callers should flag the result as unverified.
pub const VERIFIED_MAX_DIMENSION: usize = 6;
