//! Runtime configuration read from the environment.

use crate::core::Motion;
use crate::raycast::RayConfig;
use crate::types::{DEFAULT_KEY_RELEASE_MS, DEFAULT_TARGET_FPS, MIN_STEP_SIZE};

/// Everything tunable at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub ray: RayConfig,
    pub motion: Motion,
    /// 0 disables frame pacing.
    pub target_fps: u32,
    pub key_release_ms: u64,
    /// JSONL frame log destination.
    pub log_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ray: RayConfig::default(),
            motion: Motion::default(),
            target_fps: DEFAULT_TARGET_FPS,
            key_release_ms: DEFAULT_KEY_RELEASE_MS,
            log_path: None,
        }
    }
}

impl Config {
    /// Create from `RAYCAST_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup.
    ///
    /// Missing, unparsable or non-positive values keep their defaults. A step
    /// below [`MIN_STEP_SIZE`] is raised to it.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();

        let positive = |key: &str, default: f32| {
            lookup(key)
                .and_then(|s| s.trim().parse::<f32>().ok())
                .filter(|v| v.is_finite() && *v > 0.0)
                .unwrap_or(default)
        };

        let ray = RayConfig {
            fov: lookup("RAYCAST_FOV_DEG")
                .and_then(|s| s.trim().parse::<f32>().ok())
                .filter(|v| *v > 0.0 && *v < 360.0)
                .map(f32::to_radians)
                .unwrap_or(d.ray.fov),
            max_depth: positive("RAYCAST_MAX_DEPTH", d.ray.max_depth),
            step_size: positive("RAYCAST_STEP", d.ray.step_size).max(MIN_STEP_SIZE),
            boundary_angle: d.ray.boundary_angle,
        };

        let motion = Motion {
            move_speed: positive("RAYCAST_MOVE_SPEED", d.motion.move_speed),
            turn_speed: positive("RAYCAST_TURN_SPEED", d.motion.turn_speed),
        };

        let target_fps = lookup("RAYCAST_TARGET_FPS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(d.target_fps);

        let key_release_ms = lookup("RAYCAST_KEY_RELEASE_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|v| *v > 0)
            .unwrap_or(d.key_release_ms);

        let log_path = lookup("RAYCAST_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            ray,
            motion,
            target_fps,
            key_release_ms,
            log_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(Config::from_lookup(|_| None), Config::default());
    }

    #[test]
    fn parses_all_overrides() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("RAYCAST_FOV_DEG", "90"),
            ("RAYCAST_MAX_DEPTH", "24"),
            ("RAYCAST_STEP", "0.05"),
            ("RAYCAST_MOVE_SPEED", "3.5"),
            ("RAYCAST_TURN_SPEED", "1.2"),
            ("RAYCAST_TARGET_FPS", "0"),
            ("RAYCAST_KEY_RELEASE_MS", "200"),
            ("RAYCAST_LOG_PATH", " /tmp/frames.jsonl "),
        ]));
        assert!((cfg.ray.fov - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(cfg.ray.max_depth, 24.0);
        assert_eq!(cfg.ray.step_size, 0.05);
        assert_eq!(cfg.motion.move_speed, 3.5);
        assert_eq!(cfg.motion.turn_speed, 1.2);
        assert_eq!(cfg.target_fps, 0);
        assert_eq!(cfg.key_release_ms, 200);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/frames.jsonl"));
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("RAYCAST_FOV_DEG", "720"),
            ("RAYCAST_MAX_DEPTH", "-3"),
            ("RAYCAST_STEP", "zero"),
            ("RAYCAST_TARGET_FPS", "-1"),
            ("RAYCAST_KEY_RELEASE_MS", "0"),
            ("RAYCAST_LOG_PATH", "   "),
        ]));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn tiny_step_is_raised_to_the_minimum() {
        let cfg = Config::from_lookup(lookup_from(&[("RAYCAST_STEP", "1e-9")]));
        assert_eq!(cfg.ray.step_size, MIN_STEP_SIZE);
        assert!(cfg.ray.max_steps() < 20_000);
    }
}
