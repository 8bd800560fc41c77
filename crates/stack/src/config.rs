use serde::Deserialize;

/// Construction parameters for a [crate::BoundedStack].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Maximum number of elements. Must be non-zero.
    pub capacity: usize,
}

impl Config {
    pub const DEFAULT_CAPACITY: usize = 16;

    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
        }
    }
}
