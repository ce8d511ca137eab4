//! Backend process configuration

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration for the intelligence engine process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Executable path (can use $PATH)
    pub executable: String,
    /// Command line arguments
    pub args: Vec<String>,
    /// Environment variables
    pub env: HashMap<String, String>,
    /// Timeout for a single request in milliseconds
    pub timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            executable: "python3".to_string(),
            args: vec!["-m".to_string(), "pyintel_engine".to_string()],
            env: HashMap::new(),
            timeout_ms: 5000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_engine_module() {
        let config = BackendConfig::default();
        assert_eq!(config.executable, "python3");
        assert_eq!(config.args, vec!["-m", "pyintel_engine"]);
        assert_eq!(config.timeout_ms, 5000);
    }
}
