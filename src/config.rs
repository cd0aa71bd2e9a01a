/// Construction options for a [`crate::Registry`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Seed for the sampling generator used by `spop` and `srandmember`. `None` seeds from
    /// OS entropy.
    pub seed: Option<u64>,
    /// Number of keys to reserve room for up front.
    pub capacity: usize,
}

impl RegistryConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
