//! Game settings and preferences
//!
//! Supplied by the host page as JSON; missing fields take defaults.

use serde::{Deserialize, Serialize};

use crate::consts::BURST_SIZE;
use crate::error::ConfigError;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Maximum particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 100,
            QualityPreset::Medium => 500,
            QualityPreset::High => 2000,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === Controls ===
    /// Radians of look rotation per pixel of mouse movement
    pub mouse_sensitivity: f32,
    /// Mouse up looks down
    pub invert_y: bool,

    // === Visual Effects ===
    /// Explosion particles
    pub particles: bool,

    // === Accessibility ===
    /// Reduced motion (smaller explosions)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            mouse_sensitivity: 0.002,
            invert_y: false,
            particles: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize settings to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Effective particle count cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }

    /// Fragments per explosion (respects reduced_motion)
    pub fn burst_size(&self) -> usize {
        if self.reduced_motion {
            BURST_SIZE / 2
        } else {
            BURST_SIZE
        }
    }

    /// Convert a mouse delta (pixels) into (yaw, pitch) deltas in radians
    pub fn look_delta(&self, dx: f32, dy: f32) -> (f32, f32) {
        let pitch_sign = if self.invert_y { 1.0 } else { -1.0 };
        (
            -dx * self.mouse_sensitivity,
            pitch_sign * dy * self.mouse_sensitivity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.max_particles(), 500);
        assert_eq!(s.burst_size(), BURST_SIZE);
        assert_eq!(s.mouse_sensitivity, 0.002);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = Settings::from_json(r#"{"quality": "high", "invert_y": true}"#).unwrap();
        assert_eq!(s.quality, QualityPreset::High);
        assert!(s.invert_y);
        assert_eq!(s.mouse_sensitivity, 0.002);
        assert_eq!(s.max_particles(), 2000);
    }

    #[test]
    fn test_json_round_trip() {
        let s = Settings {
            reduced_motion: true,
            ..Settings::from_preset(QualityPreset::Low)
        };
        let back = Settings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Settings::from_json("{not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_particles_off() {
        let s = Settings {
            particles: false,
            ..Default::default()
        };
        assert_eq!(s.max_particles(), 0);
    }

    #[test]
    fn test_reduced_motion_halves_bursts() {
        let s = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        assert_eq!(s.burst_size(), 10);
    }

    #[test]
    fn test_look_delta() {
        let s = Settings::default();
        let (yaw, pitch) = s.look_delta(100.0, 50.0);
        assert!((yaw + 0.2).abs() < 1e-6);
        assert!((pitch + 0.1).abs() < 1e-6);

        let inverted = Settings {
            invert_y: true,
            ..Default::default()
        };
        assert!(inverted.look_delta(0.0, 50.0).1 > 0.0);
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(QualityPreset::from_name("MED"), Some(QualityPreset::Medium));
        assert_eq!(QualityPreset::from_name("ultra"), None);
        assert_eq!(QualityPreset::High.as_str(), "High");
    }
}
