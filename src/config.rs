//! Daemon configuration sourced from `ACTORD_*` environment variables.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_RUNNER: &str = "actor-runner";
const DEFAULT_ACTOR_TIMEOUT_MS: u64 = 300_000;
const DEFAULT_MAX_OUTPUT_BYTES: usize = 1_048_576;

#[derive(Clone, Debug)]
pub struct DaemonConfig {
    pub server_addr: String,
    /// Program spawned per invocation; receives the actor group name as its
    /// only argument and the encoded input document on stdin.
    pub runner: PathBuf,
    pub actor_timeout: Duration,
    pub max_output_bytes: usize,
    pub verbose: bool,
}

impl DaemonConfig {
    pub fn from_env() -> Result<Self, String> {
        let mut envs = HashMap::new();
        for key in [
            "ACTORD_SERVER_ADDR",
            "ACTORD_RUNNER",
            "ACTORD_ACTOR_TIMEOUT_MS",
            "ACTORD_MAX_OUTPUT_BYTES",
            "ACTORD_VERBOSE",
        ] {
            if let Ok(value) = std::env::var(key) {
                envs.insert(key.to_string(), value);
            }
        }
        Self::from_env_map(&envs)
    }

    fn from_env_map(envs: &HashMap<String, String>) -> Result<Self, String> {
        let server_addr = envs
            .get("ACTORD_SERVER_ADDR")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string());

        let runner = envs
            .get("ACTORD_RUNNER")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_RUNNER.to_string());

        let actor_timeout_ms = match envs.get("ACTORD_ACTOR_TIMEOUT_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                format!(
                    "invalid ACTORD_ACTOR_TIMEOUT_MS='{}'. expected milliseconds as an integer",
                    raw
                )
            })?,
            None => DEFAULT_ACTOR_TIMEOUT_MS,
        };

        let max_output_bytes = match envs.get("ACTORD_MAX_OUTPUT_BYTES") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                format!(
                    "invalid ACTORD_MAX_OUTPUT_BYTES='{}'. expected a byte count",
                    raw
                )
            })?,
            None => DEFAULT_MAX_OUTPUT_BYTES,
        };

        let verbose = envs
            .get("ACTORD_VERBOSE")
            .map(|v| parse_bool(v))
            .unwrap_or(false);

        Ok(Self {
            server_addr,
            runner: PathBuf::from(runner),
            actor_timeout: Duration::from_millis(actor_timeout_ms),
            max_output_bytes,
            verbose,
        })
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = DaemonConfig::from_env_map(&HashMap::new()).unwrap();
        assert_eq!(config.server_addr, DEFAULT_SERVER_ADDR);
        assert_eq!(config.runner, PathBuf::from(DEFAULT_RUNNER));
        assert_eq!(config.actor_timeout, Duration::from_millis(300_000));
        assert_eq!(config.max_output_bytes, 1_048_576);
        assert!(!config.verbose);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let mut envs = HashMap::new();
        envs.insert("ACTORD_SERVER_ADDR".to_string(), "0.0.0.0:9000".to_string());
        envs.insert("ACTORD_RUNNER".to_string(), "/usr/bin/snactor".to_string());
        envs.insert("ACTORD_ACTOR_TIMEOUT_MS".to_string(), "1500".to_string());
        envs.insert("ACTORD_MAX_OUTPUT_BYTES".to_string(), "2048".to_string());
        envs.insert("ACTORD_VERBOSE".to_string(), "yes".to_string());
        let config = DaemonConfig::from_env_map(&envs).unwrap();
        assert_eq!(config.server_addr, "0.0.0.0:9000");
        assert_eq!(config.runner, PathBuf::from("/usr/bin/snactor"));
        assert_eq!(config.actor_timeout, Duration::from_millis(1500));
        assert_eq!(config.max_output_bytes, 2048);
        assert!(config.verbose);
    }

    #[test]
    fn unparsable_timeout_is_rejected() {
        let mut envs = HashMap::new();
        envs.insert("ACTORD_ACTOR_TIMEOUT_MS".to_string(), "soon".to_string());
        let err = DaemonConfig::from_env_map(&envs).unwrap_err();
        assert!(err.contains("ACTORD_ACTOR_TIMEOUT_MS"));
    }
}
