//! Demo configuration from environment variables.

/// Runtime configuration for the demo binary.
pub struct Config {
    /// Whether to seed the stores with sample data at startup.
    pub seed_sample_data: bool,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// `FINSIGHT_SEED_SAMPLE_DATA` - set to "false" or "0" to start
    /// with empty stores (default: seeded).
    pub fn from_env() -> Self {
        let seed_sample_data = std::env::var("FINSIGHT_SEED_SAMPLE_DATA")
            .map(|v| !matches!(v.to_lowercase().as_str(), "false" | "0"))
            .unwrap_or(true);

        Self { seed_sample_data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_seeding() {
        std::env::remove_var("FINSIGHT_SEED_SAMPLE_DATA");
        let config = Config::from_env();
        assert!(config.seed_sample_data);
    }
}
