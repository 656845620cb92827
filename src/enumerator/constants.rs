// Bounds on the operator sequences the enumerator will stream
pub const MIN_OPERATOR_COUNT: usize = 1;
pub const MAX_OPERATOR_COUNT: usize = 15;
pub const BITS_PER_OPERATOR: usize = 2;
pub const ENUMERATOR_THREAD_NAME: &str = "candidate-enumerator";
