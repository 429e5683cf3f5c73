use std::collections::TryReserveError;

/// Failures reported by the fallible `RawList` entry points.
#[derive(Debug, thiserror::Error)]
pub enum RawListError {
    /// Capacity arithmetic no longer fits in `usize`.
    #[error("required array length {old_capacity} + {min_growth} is too large")]
    CapacityOverflow { old_capacity: usize, min_growth: usize },

    /// An explicitly requested capacity is above the ceiling for the element kind.
    #[error("requested capacity {requested} exceeds the maximum of {max}")]
    CapacityTooLarge { requested: usize, max: usize },

    /// The allocator refused to provide the new buffer.
    #[error("failed to allocate a buffer of {capacity} elements")]
    AllocationFailed {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("window has room for {remaining} elements, but {required} are required")]
    WindowOverflow { required: usize, remaining: usize },

    #[error("invalid replacement pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
