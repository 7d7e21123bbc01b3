use anyhow::{Context, Result};
use primitive_types::H160;
use serde::Deserialize;
use std::path::Path;

use crate::events::common::parse_address;

fn default_max_pool_size() -> u32 {
    10
}

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// LendingPool contract whose logs are indexed.
    pub contract_address: String,
    pub listen_addr: String,
    #[serde(default = "default_max_pool_size")]
    pub max_pool_size: u32,
}

impl Config {
    /// Loads the TOML file at `path`, then applies `INDEXER_*` environment
    /// overrides (e.g. `INDEXER_DATABASE_URL`).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_env_prefix(path, "INDEXER")
    }

    fn load_with_env_prefix<P: AsRef<Path>>(path: P, env_prefix: &str) -> Result<Self> {
        let config_path = path.as_ref();
        let builder = config::Config::builder()
            .add_source(config::File::from(config_path).required(true))
            .add_source(config::Environment::with_prefix(env_prefix));

        let settings = builder.build()
            .with_context(|| format!("Failed to build configuration from path: {:?}", config_path))?;

        let loaded: Self = settings.try_deserialize()
            .with_context(|| format!("Failed to deserialize configuration from path: {:?}", config_path))?;
        loaded.contract_address()?;
        Ok(loaded)
    }

    pub fn contract_address(&self) -> Result<H160> {
        parse_address(&self.contract_address)
            .with_context(|| format!("Invalid contract_address: {}", self.contract_address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(name: &str, body: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("lending-pool-indexer-{}-{}.toml", name, std::process::id()));
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn loads_toml_with_default_pool_size() {
        let path = write_config(
            "ok",
            r#"
                database_url = "postgres://localhost/test"
                contract_address = "0xA16081F360e3847006dB660bae1c6d1b2e17eC2A"
                listen_addr = "127.0.0.1:3000"
            "#,
        );
        let config = Config::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.max_pool_size, 10);
        assert_eq!(config.listen_addr, "127.0.0.1:3000");
        assert_eq!(
            config.contract_address().unwrap(),
            crate::testing::DEFAULT_MOCK_ADDRESS
        );
    }

    #[test]
    fn rejects_bad_contract_address() {
        let path = write_config(
            "bad-address",
            r#"
                database_url = "postgres://localhost/test"
                contract_address = "0x1234"
                listen_addr = "127.0.0.1:3000"
            "#,
        );
        let result = Config::load(&path);
        fs::remove_file(&path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn environment_overrides_file_values() {
        let path = write_config(
            "env",
            r#"
                database_url = "postgres://localhost/from-file"
                contract_address = "0xA16081F360e3847006dB660bae1c6d1b2e17eC2A"
                listen_addr = "127.0.0.1:3000"
            "#,
        );
        std::env::set_var("LPIDXENVTEST_DATABASE_URL", "postgres://db.internal/from-env");
        std::env::set_var("LPIDXENVTEST_LISTEN_ADDR", "0.0.0.0:8080");

        let result = Config::load_with_env_prefix(&path, "LPIDXENVTEST");
        std::env::remove_var("LPIDXENVTEST_DATABASE_URL");
        std::env::remove_var("LPIDXENVTEST_LISTEN_ADDR");
        fs::remove_file(&path).ok();

        let config = result.unwrap();
        assert_eq!(config.database_url, "postgres://db.internal/from-env");
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.max_pool_size, 10);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Config::load("/nonexistent/lending-pool.toml").is_err());
    }
}
