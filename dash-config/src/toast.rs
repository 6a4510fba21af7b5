use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ToastConfig {
    pub lifetime_ms: u32,
    pub fade_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            lifetime_ms: 5_000,
            fade_ms: 300,
        }
    }
}
