use std::time::Duration;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct SearchConfig {
    #[serde(deserialize_with = "duration_str::deserialize_duration")]
    debounce: Duration,
}

impl SearchConfig {
    pub fn debounce(&self) -> &Duration {
        &self.debounce
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
        }
    }
}
