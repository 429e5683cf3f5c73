use crate::RawListError;

/// Largest buffer length handed out for one-byte elements.
///
/// Allocations are limited to `isize::MAX` bytes; a few slots are held back
/// so that length arithmetic near the ceiling stays representable.
pub const MAX_SAFE_LENGTH: usize = isize::MAX as usize - 8;

/// Largest buffer length handed out for elements of type `T`.
pub const fn max_safe_length<T>() -> usize {
    let size = std::mem::size_of::<T>();
    if size <= 1 {
        MAX_SAFE_LENGTH
    } else {
        isize::MAX as usize / size - 8
    }
}

/// Computes the next buffer capacity when a list runs out of room.
///
/// Growth is roughly 1.5x the old capacity, or exactly what the triggering
/// operation needs when that is more. Near `max_length` the policy switches to
/// the huge-growth path, which hands out the ceiling itself or, when even the
/// minimum does not fit under it, the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPolicy {
    max_length: usize,
}

impl GrowthPolicy {
    pub const fn new(max_length: usize) -> GrowthPolicy {
        GrowthPolicy { max_length }
    }

    pub const fn for_element<T>() -> GrowthPolicy {
        GrowthPolicy::new(max_safe_length::<T>())
    }

    #[inline(always)]
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Returns `old_capacity + max(min_growth, pref_growth)` if it lies in `(0, max_length]`,
    /// otherwise falls back to the huge-growth path.
    pub fn next_capacity(&self, old_capacity: usize, min_growth: usize, pref_growth: usize) -> Result<usize, RawListError> {
        match old_capacity.checked_add(min_growth.max(pref_growth)) {
            Some(length) if length > 0 && length <= self.max_length => Ok(length),
            _ => self.huge_capacity(old_capacity, min_growth),
        }
    }

    #[cold]
    fn huge_capacity(&self, old_capacity: usize, min_growth: usize) -> Result<usize, RawListError> {
        let min_length = old_capacity
            .checked_add(min_growth)
            .ok_or(RawListError::CapacityOverflow { old_capacity, min_growth })?;
        debug!("huge growth from {} by at least {}", old_capacity, min_growth);
        Ok(min_length.max(self.max_length))
    }

    /// Capacity for a buffer of `old_capacity` slots that must now hold `required` slots.
    ///
    /// An empty buffer jumps straight to `max(required, default_capacity)`.
    pub fn grown_capacity(&self, old_capacity: usize, required: usize, default_capacity: usize) -> Result<usize, RawListError> {
        if old_capacity == 0 {
            Ok(required.max(default_capacity))
        } else {
            self.next_capacity(old_capacity, required.saturating_sub(old_capacity), old_capacity >> 1)
        }
    }
}

impl Default for GrowthPolicy {
    fn default() -> GrowthPolicy {
        GrowthPolicy::new(MAX_SAFE_LENGTH)
    }
}

#[cfg(test)]
mod growth_tests {
    use super::*;

    #[test]
    fn grows_by_half_of_old_capacity() {
        let policy = GrowthPolicy::default();
        assert_eq!(15, policy.next_capacity(10, 1, 5).unwrap());
        assert_eq!(1, policy.next_capacity(1, 0, 0).unwrap());
    }

    #[test]
    fn min_growth_wins_when_larger() {
        let policy = GrowthPolicy::default();
        assert_eq!(30, policy.next_capacity(10, 20, 5).unwrap());
    }

    #[test]
    fn huge_growth_clamps_to_ceiling() {
        let policy = GrowthPolicy::new(100);
        assert_eq!(100, policy.next_capacity(80, 1, 40).unwrap());
        assert_eq!(100, policy.next_capacity(100, 0, 50).unwrap());
    }

    #[test]
    fn huge_growth_returns_minimum_above_ceiling() {
        let policy = GrowthPolicy::new(100);
        assert_eq!(110, policy.next_capacity(80, 30, 40).unwrap());
    }

    #[test]
    fn zero_preferred_length_takes_huge_path() {
        let policy = GrowthPolicy::new(64);
        assert_eq!(64, policy.next_capacity(0, 0, 0).unwrap());
    }

    #[test]
    fn overflowing_minimum_is_an_error() {
        let policy = GrowthPolicy::default();
        match policy.next_capacity(usize::MAX - 1, 5, 0) {
            Err(RawListError::CapacityOverflow { old_capacity, min_growth }) => {
                assert_eq!(usize::MAX - 1, old_capacity);
                assert_eq!(5, min_growth);
            }
            other => panic!("expected overflow, got {:?}", other),
        }
    }

    #[test]
    fn empty_buffer_uses_default_capacity() {
        let policy = GrowthPolicy::default();
        assert_eq!(10, policy.grown_capacity(0, 1, 10).unwrap());
        assert_eq!(25, policy.grown_capacity(0, 25, 10).unwrap());
        assert_eq!(15, policy.grown_capacity(10, 11, 10).unwrap());
        assert_eq!(30, policy.grown_capacity(10, 30, 10).unwrap());
    }

    #[test]
    fn ceiling_scales_with_element_size() {
        assert_eq!(MAX_SAFE_LENGTH, max_safe_length::<u8>());
        assert_eq!(MAX_SAFE_LENGTH, max_safe_length::<()>());
        assert!(max_safe_length::<u64>() < max_safe_length::<u16>());
        assert_eq!(max_safe_length::<u32>(), GrowthPolicy::for_element::<u32>().max_length());
    }
}
