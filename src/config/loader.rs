// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::config::consts::{DEFAULT_HOST_RATE_HZ, SIMULATION_RATE_HZ};
use crate::errors::ConfigError;
use crate::time::WorldTime;

/// Runtime configuration for a motivator engine host.
///
/// Typically loaded from a YAML file at application startup, before the
/// registry is built. Everything is optional; an empty file yields the
/// 60 Hz defaults.
///
/// # Fields
/// * `simulation` - Host timing parameters (optional, defaults to 60 Hz)
///
/// # Example
/// ```yaml
/// simulation:
///   host_rate_hz: 30
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Host timing parameters.
///
/// The simulation itself always runs in fixed 1/60 s ticks; this section
/// only tells the host how many ticks each of its frames is worth.
///
/// # Fields
/// * `host_rate_hz` - Host frame rate in Hz (optional, defaults to 60).
///   Must be nonzero and divide the 60 Hz simulation rate: 60 Hz hosts
///   advance one tick per frame, 30 Hz hosts two, 20 Hz hosts three.
///
/// # Example
/// ```yaml
/// host_rate_hz: 30
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct SimulationConfig {
    pub host_rate_hz: Option<u32>,
}

impl SimulationConfig {
    /// Get the host frame rate, using the built-in default if not
    /// configured.
    pub fn host_rate(&self) -> u32 {
        self.host_rate_hz.unwrap_or(DEFAULT_HOST_RATE_HZ)
    }

    /// Derive the `WorldTime` delta the host should pass to
    /// `advance_frame` each frame.
    ///
    /// # Errors
    /// [`ConfigError::InvalidHostRate`] when the host rate is zero or
    /// does not evenly divide the simulation rate; a fractional tick per
    /// frame would break determinism.
    ///
    /// # Example
    /// ```
    /// use motivator::config::SimulationConfig;
    ///
    /// let config = SimulationConfig {
    ///     host_rate_hz: Some(30),
    /// };
    /// assert_eq!(config.ticks_per_frame().unwrap(), 2);
    /// ```
    pub fn ticks_per_frame(&self) -> Result<WorldTime, ConfigError> {
        let host_rate_hz = self.host_rate();

        if host_rate_hz == 0 || SIMULATION_RATE_HZ % host_rate_hz != 0 {
            return Err(ConfigError::InvalidHostRate {
                host_rate_hz,
                simulation_rate_hz: SIMULATION_RATE_HZ,
            });
        }

        Ok((SIMULATION_RATE_HZ / host_rate_hz) as WorldTime)
    }
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load and validate a config from a YAML file
///
/// This function loads the configuration and validates the host timing
/// parameters so a bad rate fails at startup instead of at the first
/// frame.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    cfg.simulation.ticks_per_frame()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
simulation:
  host_rate_hz: 30
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.simulation.host_rate_hz, Some(30));
        assert_eq!(cfg.simulation.ticks_per_frame().unwrap(), 2);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: Config = serde_yaml::from_str("{}").unwrap();

        assert_eq!(cfg.simulation.host_rate(), DEFAULT_HOST_RATE_HZ);
        assert_eq!(cfg.simulation.ticks_per_frame().unwrap(), 1);
    }

    #[test]
    fn ticks_per_frame_table() {
        struct TestCase {
            host_rate_hz: u32,
            expected_ticks: WorldTime,
        }

        let test_cases = vec![
            TestCase {
                host_rate_hz: 60,
                expected_ticks: 1,
            },
            TestCase {
                host_rate_hz: 30,
                expected_ticks: 2,
            },
            TestCase {
                host_rate_hz: 20,
                expected_ticks: 3,
            },
            TestCase {
                host_rate_hz: 15,
                expected_ticks: 4,
            },
            TestCase {
                host_rate_hz: 12,
                expected_ticks: 5,
            },
        ];

        for test_case in test_cases {
            let config = SimulationConfig {
                host_rate_hz: Some(test_case.host_rate_hz),
            };
            assert_eq!(
                config.ticks_per_frame().unwrap(),
                test_case.expected_ticks,
                "host rate {} Hz",
                test_case.host_rate_hz
            );
        }
    }

    #[test]
    fn non_divisor_host_rate_is_rejected() {
        let config = SimulationConfig {
            host_rate_hz: Some(45),
        };

        let err = config.ticks_per_frame().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidHostRate {
                host_rate_hz: 45,
                simulation_rate_hz: SIMULATION_RATE_HZ,
            }
        ));
    }

    #[test]
    fn zero_host_rate_is_rejected() {
        let config = SimulationConfig {
            host_rate_hz: Some(0),
        };

        assert!(config.ticks_per_frame().is_err());
    }

    #[test]
    fn load_and_validate_valid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("motivator.yaml");
        fs::write(&path, "simulation:\n  host_rate_hz: 20\n").unwrap();

        let cfg = load_and_validate_config(&path).unwrap();
        assert_eq!(cfg.simulation.ticks_per_frame().unwrap(), 3);
    }

    #[test]
    fn load_and_validate_invalid_rate_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("motivator.yaml");
        fs::write(&path, "simulation:\n  host_rate_hz: 45\n").unwrap();

        let err = load_and_validate_config(&path).unwrap_err();
        assert!(err.to_string().contains("45 Hz"));
    }

    #[test]
    fn load_config_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist.yaml");

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn load_config_malformed_yaml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("motivator.yaml");
        fs::write(&path, "simulation: [not, a, mapping\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
