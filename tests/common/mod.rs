#![allow(dead_code)]

pub mod fixtures;

use toyframe::{FrameConfig, FrameError};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Load a config from a `serde_json::Value`.
pub fn config_from_value(value: serde_json::Value) -> Result<FrameConfig, FrameError> {
    FrameConfig::from_json(&value.to_string())
}
