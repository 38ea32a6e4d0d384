use std::time::{Duration, Instant};

use tracing::debug;

use super::engine::Decision;

/// Tilt input policy. Tilt is an ambient signal with no natural release
/// event, so commits are gated three ways: divergence is measured
/// against a slowly decaying baseline (a tilted-but-held device does not
/// keep firing), a cooldown follows every commit, and samples are
/// rate-limited independently of the cooldown.
#[derive(Debug, Clone, PartialEq)]
pub struct TiltConfig {
    /// Divergence from the baseline, in degrees, that commits a decision.
    pub commit_threshold_deg: f32,
    /// Window after a commit during which samples are ignored.
    pub cooldown: Duration,
    /// Minimum interval between processed samples.
    pub sample_interval: Duration,
    /// Fraction of the old baseline kept per sample while below the
    /// threshold. The remainder follows the sample, absorbing slow drift.
    pub baseline_retention: f32,
    /// Card offset flashed when a tilt commits.
    pub feedback_offset: f32,
    /// Card rotation flashed when a tilt commits.
    pub feedback_rotation_deg: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        TiltConfig {
            commit_threshold_deg: 20.0,
            cooldown: Duration::from_millis(600),
            sample_interval: Duration::from_millis(100),
            baseline_retention: 0.9,
            feedback_offset: 50.0,
            feedback_rotation_deg: 5.0,
        }
    }
}

/// Per-screen tilt state. Survives photo transitions, reset on
/// selection screen entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TiltTracker {
    config: TiltConfig,
    baseline: Option<f32>,
    last_sample_at: Option<Instant>,
    cooldown_until: Option<Instant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiltOutcome {
    /// Sample discarded by the rate limit or an active cooldown.
    Gated,
    /// Below threshold; the baseline decayed towards the sample.
    Tracking,
    Commit(Decision),
}

impl TiltTracker {
    pub fn new(config: TiltConfig) -> TiltTracker {
        TiltTracker {
            config,
            baseline: None,
            last_sample_at: None,
            cooldown_until: None,
        }
    }

    pub fn reset(&mut self) {
        self.baseline = None;
        self.last_sample_at = None;
        self.cooldown_until = None;
    }

    pub fn observe(&mut self, sample_deg: f32, at: Instant) -> TiltOutcome {
        // rate limit applies to every sample, gated or not
        if let Some(last) = self.last_sample_at {
            if at.duration_since(last) < self.config.sample_interval {
                return TiltOutcome::Gated;
            }
        }
        self.last_sample_at = Some(at);

        let Some(baseline) = self.baseline else {
            self.baseline = Some(sample_deg);
            return TiltOutcome::Tracking;
        };

        if let Some(until) = self.cooldown_until {
            if at < until {
                return TiltOutcome::Gated;
            }
            self.cooldown_until = None;
        }

        let delta = sample_deg - baseline;
        if delta.abs() > self.config.commit_threshold_deg {
            self.cooldown_until = Some(at + self.config.cooldown);
            // resynchronize to the sample that triggered the commit
            self.baseline = Some(sample_deg);
            let decision = Decision::from_signal(delta);
            debug!(delta, ?decision, "tilt commit");
            TiltOutcome::Commit(decision)
        } else {
            let retention = self.config.baseline_retention;
            self.baseline = Some(baseline * retention + sample_deg * (1.0 - retention));
            TiltOutcome::Tracking
        }
    }
}
