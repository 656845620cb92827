// Configuration constants for the pipeline module
pub const DEFAULT_BUFFER_CAPACITY: usize = 1024;
pub const STAGE_THREAD_PREFIX: &str = "filter-stage";
