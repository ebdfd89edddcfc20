//! Routing table configuration.

use super::errors::ConfigError;

/// Default k-bucket capacity.
pub const DEFAULT_BUCKET_SIZE: usize = 20;

/// Configuration for bucket-based routing tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingConfig {
    /// Maximum nodes per k-bucket (default: 20)
    pub bucket_size: usize,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RoutingConfig {
    /// Create a config suitable for testing (small buckets fill quickly)
    pub fn for_testing() -> Self {
        Self { bucket_size: 3 }
    }

    /// Override the bucket capacity.
    pub fn with_bucket_size(mut self, bucket_size: usize) -> Self {
        self.bucket_size = bucket_size;
        self
    }

    /// Reject configurations under which no node could ever be stored.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bucket_size == 0 {
            return Err(ConfigError::InvalidBucketSize(self.bucket_size));
        }
        Ok(())
    }
}
