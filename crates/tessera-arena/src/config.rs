//! Item buffer configuration parameters.

/// Configuration for an [`ItemBuffer`](crate::ItemBuffer).
///
/// Controls the initial allocation and whether (and how far) the buffer
/// may grow. All values are immutable once the buffer is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferConfig {
    /// Bytes allocated up front.
    ///
    /// Default: 65_536 (64KB).
    pub initial_capacity: usize,

    /// Whether a full buffer doubles its capacity on demand.
    ///
    /// When `false`, a reservation that does not fit fails with
    /// `ArenaError::CapacityExceeded`.
    pub auto_grow: bool,

    /// Upper bound on the capacity reached by growth, in bytes.
    ///
    /// Default: `u32::MAX`, the largest offset an `ItemHandle` can address.
    pub max_capacity: usize,
}

impl BufferConfig {
    /// Default initial capacity: 64KB.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 64 * 1024;

    /// Default growth ceiling: everything a `u32` offset can reach.
    pub const DEFAULT_MAX_CAPACITY: usize = u32::MAX as usize;

    /// Create a growable config with the given initial capacity.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            auto_grow: true,
            max_capacity: Self::DEFAULT_MAX_CAPACITY,
        }
    }

    /// Create a config for a buffer that never grows past `capacity`.
    pub fn fixed(capacity: usize) -> Self {
        Self {
            initial_capacity: capacity,
            auto_grow: false,
            max_capacity: capacity,
        }
    }

    /// Override the growth ceiling.
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity.min(Self::DEFAULT_MAX_CAPACITY);
        self
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grows_from_64kb() {
        let config = BufferConfig::default();
        assert_eq!(config.initial_capacity, 64 * 1024);
        assert!(config.auto_grow);
    }

    #[test]
    fn fixed_never_grows() {
        let config = BufferConfig::fixed(128);
        assert!(!config.auto_grow);
        assert_eq!(config.max_capacity, 128);
    }

    #[test]
    fn max_capacity_clamped_to_handle_range() {
        let config = BufferConfig::new(16).with_max_capacity(usize::MAX);
        assert_eq!(config.max_capacity, u32::MAX as usize);
    }
}
