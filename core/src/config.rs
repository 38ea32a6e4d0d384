use camino::{Utf8Path as Path, Utf8PathBuf as PathBuf};
use color_eyre::eyre::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

use crate::gesture::{GestureConfig, TiltConfig};

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
struct TomlGesture {
    preview_threshold: Option<f32>,
    commit_threshold: Option<f32>,
    rotation_per_unit: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
struct TomlTilt {
    commit_threshold_deg: Option<f32>,
    cooldown_ms: Option<u64>,
    sample_interval_ms: Option<u64>,
    baseline_retention: Option<f32>,
    feedback_offset: Option<f32>,
    feedback_rotation_deg: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct TomlStorage {
    path: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct TomlConfig {
    #[serde(rename = "Gesture")]
    gesture: Option<TomlGesture>,
    #[serde(rename = "Tilt")]
    tilt: Option<TomlTilt>,
    #[serde(rename = "Storage")]
    storage: Option<TomlStorage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageDir {
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub gesture: GestureConfig,
    pub storage: Option<StorageDir>,
}

pub async fn read_config(path: &Path) -> Result<Config> {
    let toml_str = tokio::fs::read_to_string(path)
        .await
        .context(format!("Error reading config file {}", path))?;
    parse_config(&toml_str)
}

/// Missing tables and fields fall back to the built-in defaults.
fn parse_config(toml_str: &str) -> Result<Config> {
    let toml_config: TomlConfig = toml::from_str(toml_str).context("Error parsing config file")?;
    let gesture_defaults = GestureConfig::default();
    let tilt_defaults = gesture_defaults.tilt.clone();
    let toml_gesture = toml_config.gesture.unwrap_or_default();
    let toml_tilt = toml_config.tilt.unwrap_or_default();
    let tilt = TiltConfig {
        commit_threshold_deg: toml_tilt
            .commit_threshold_deg
            .unwrap_or(tilt_defaults.commit_threshold_deg),
        cooldown: toml_tilt
            .cooldown_ms
            .map(Duration::from_millis)
            .unwrap_or(tilt_defaults.cooldown),
        sample_interval: toml_tilt
            .sample_interval_ms
            .map(Duration::from_millis)
            .unwrap_or(tilt_defaults.sample_interval),
        baseline_retention: toml_tilt
            .baseline_retention
            .unwrap_or(tilt_defaults.baseline_retention),
        feedback_offset: toml_tilt
            .feedback_offset
            .unwrap_or(tilt_defaults.feedback_offset),
        feedback_rotation_deg: toml_tilt
            .feedback_rotation_deg
            .unwrap_or(tilt_defaults.feedback_rotation_deg),
    };
    let gesture = GestureConfig {
        preview_threshold: toml_gesture
            .preview_threshold
            .unwrap_or(gesture_defaults.preview_threshold),
        commit_threshold: toml_gesture
            .commit_threshold
            .unwrap_or(gesture_defaults.commit_threshold),
        rotation_per_unit: toml_gesture
            .rotation_per_unit
            .unwrap_or(gesture_defaults.rotation_per_unit),
        tilt,
    };
    let storage = toml_config.storage.map(|toml_storage| StorageDir {
        path: PathBuf::from(toml_storage.path),
    });
    Ok(Config { gesture, storage })
}
