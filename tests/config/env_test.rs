/*!
 * Environment Configuration Tests
 */

use sched_sim::config::{DEFAULT_QUANTUM, ENV_QUANTUM, ENV_TRACE_JSON};
use sched_sim::{ConfigError, SimConfig};
use serial_test::serial;

fn clear_env() {
    std::env::remove_var(ENV_QUANTUM);
    std::env::remove_var(ENV_TRACE_JSON);
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();
    let config = SimConfig::from_env().unwrap();
    assert_eq!(config, SimConfig::default());
    assert_eq!(config.default_quantum, DEFAULT_QUANTUM);
    assert!(!config.trace_json);
}

#[test]
#[serial]
fn test_reads_quantum_and_trace_format() {
    clear_env();
    std::env::set_var(ENV_QUANTUM, " 5 ");
    std::env::set_var(ENV_TRACE_JSON, "TRUE");

    let config = SimConfig::from_env().unwrap();
    assert_eq!(config.default_quantum, 5);
    assert!(config.trace_json);
    clear_env();
}

#[test]
#[serial]
fn test_non_numeric_quantum_rejected() {
    clear_env();
    std::env::set_var(ENV_QUANTUM, "fast");

    match SimConfig::from_env() {
        Err(ConfigError::InvalidEnv { var, value }) => {
            assert_eq!(var, ENV_QUANTUM);
            assert_eq!(value, "fast");
        }
        other => panic!("expected env error, got {:?}", other),
    }
    clear_env();
}

#[test]
#[serial]
fn test_non_positive_quantum_deferred_to_run() {
    clear_env();
    std::env::set_var(ENV_QUANTUM, "0");

    let config = SimConfig::from_env().unwrap();
    assert_eq!(config.default_quantum, 0);
    assert!(sched_sim::run(sched_sim::Policy::RoundRobin, &[], Some(config.default_quantum)).is_err());
    clear_env();
}
