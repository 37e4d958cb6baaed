//! Runtime settings for the participants list.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default wait for the parent's delete operation before giving up
pub const DEFAULT_DELETE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ParticipantsConfig {
    /// How long a confirmed delete may take before it is reported as failed
    #[serde(with = "millis")]
    pub delete_timeout: Duration,
}

impl Default for ParticipantsConfig {
    fn default() -> Self {
        Self {
            delete_timeout: DEFAULT_DELETE_TIMEOUT,
        }
    }
}

impl ParticipantsConfig {
    pub fn with_delete_timeout(mut self, timeout: Duration) -> Self {
        self.delete_timeout = timeout;
        self
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeout() {
        assert_eq!(ParticipantsConfig::default().delete_timeout, Duration::from_secs(10));
    }

    #[test]
    fn timeout_in_millis_json() {
        let config = ParticipantsConfig::default().with_delete_timeout(Duration::from_millis(2500));
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"delete_timeout":2500}"#);

        let back: ParticipantsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
