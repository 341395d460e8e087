//! Runtime configuration for building a queue.

use crate::queue::{Capacity, InvalidConfiguration};

/// Settings for [`BoundedBlockingQueue::from_config`].
///
/// `capacity` is kept as a raw signed integer so that values read from a
/// config file are validated at construction, where zero or negative
/// limits are reported as [`InvalidConfiguration`]. `None` means unbounded.
///
/// [`BoundedBlockingQueue::from_config`]: crate::BoundedBlockingQueue::from_config
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct QueueConfig {
    pub capacity: Option<i64>,
    /// Name attached to this queue's trace events.
    pub label: Option<String>,
}

impl QueueConfig {
    pub fn bounded(limit: i64) -> Self {
        Self {
            capacity: Some(limit),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Validates the configured limit.
    pub fn capacity(&self) -> Result<Capacity, InvalidConfiguration> {
        match self.capacity {
            Some(limit) => Capacity::try_from(limit),
            None => Ok(Capacity::Unbounded),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::QueueConfig;
    use crate::{BoundedBlockingQueue, Capacity};

    #[test]
    fn default_is_unbounded() {
        let config = QueueConfig::default();
        assert_eq!(config.capacity(), Ok(Capacity::Unbounded));
    }

    #[test]
    fn zero_and_negative_limits_fail_construction() {
        for limit in [0, -1, i64::MIN] {
            let err = BoundedBlockingQueue::<u8>::from_config(&QueueConfig::bounded(limit))
                .unwrap_err();
            assert_eq!(err.requested(), i128::from(limit));
        }
    }

    #[test]
    fn label_is_carried_to_queue() {
        let config = QueueConfig::bounded(4).with_label("ingest");
        let queue = BoundedBlockingQueue::<u8>::from_config(&config).unwrap();
        assert_eq!(queue.label(), "ingest");
        assert_eq!(queue.capacity().limit(), Some(4));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_from_json() {
        let config: QueueConfig =
            serde_json::from_str(r#"{ "capacity": 16, "label": "jobs" }"#).unwrap();
        assert_eq!(config, QueueConfig::bounded(16).with_label("jobs"));

        let config: QueueConfig = serde_json::from_str(r#"{ "capacity": 0 }"#).unwrap();
        assert!(config.capacity().is_err());

        let config: QueueConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, QueueConfig::default());
    }
}
