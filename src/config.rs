//! Field geometry and speeds
//!
//! Fixed for the lifetime of a session. Any field left out of a JSON document
//! keeps its default, so `{"width": 640}` only narrows the field.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Field configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Field width (pixels)
    pub width: f32,
    /// Field height (pixels)
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between a side wall and the outer face of its paddle
    pub paddle_inset: f32,
    /// Paddle speed while a key is held (pixels per tick)
    pub paddle_speed: f32,
    /// Ball square side (pixels)
    pub ball_size: f32,
    /// Serve velocity (pixels per tick)
    pub ball_speed: (f32, f32),
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_inset: PADDLE_INSET,
            paddle_speed: PADDLE_SPEED,
            ball_size: BALL_SIZE,
            ball_speed: (BALL_SPEED_X, BALL_SPEED_Y),
        }
    }
}

impl FieldConfig {
    /// Default geometry on a field of the given size (e.g. a host canvas)
    pub fn with_field(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!(
            "Loaded field config from {} ({}x{})",
            path.as_ref().display(),
            config.width,
            config.height
        );
        Ok(config)
    }

    /// Check that the geometry is playable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        let all = [
            self.width,
            self.height,
            self.paddle_width,
            self.paddle_height,
            self.paddle_inset,
            self.paddle_speed,
            self.ball_size,
            self.ball_speed.0,
            self.ball_speed.1,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return invalid("all values must be finite".into());
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return invalid(format!("field must be non-empty, got {}x{}", self.width, self.height));
        }
        if self.paddle_width <= 0.0 || self.paddle_height <= 0.0 || self.ball_size <= 0.0 {
            return invalid("paddle and ball sizes must be positive".into());
        }
        if self.paddle_height > self.height {
            return invalid(format!(
                "paddle height {} exceeds field height {}",
                self.paddle_height, self.height
            ));
        }
        if self.ball_size >= self.height {
            return invalid(format!(
                "ball size {} does not fit field height {}",
                self.ball_size, self.height
            ));
        }
        if self.paddle_inset < 0.0 || self.paddle_speed < 0.0 {
            return invalid("paddle inset and speed must not be negative".into());
        }
        // Both paddles plus a serve-sized gap between them
        if 2.0 * (self.paddle_inset + self.paddle_width) + self.ball_size >= self.width {
            return invalid(format!("field width {} leaves no room between paddles", self.width));
        }
        Ok(())
    }

    /// Largest legal paddle top edge
    #[inline]
    pub fn paddle_max_y(&self) -> f32 {
        self.height - self.paddle_height
    }

    /// X of the left paddle's left face
    #[inline]
    pub fn left_paddle_x(&self) -> f32 {
        self.paddle_inset
    }

    /// X of the right paddle's left face
    #[inline]
    pub fn right_paddle_x(&self) -> f32 {
        self.width - self.paddle_inset - self.paddle_width
    }

    /// Top-left corner that centres the ball on the field
    pub fn ball_center(&self) -> Vec2 {
        Vec2::new(
            self.width / 2.0 - self.ball_size / 2.0,
            self.height / 2.0 - self.ball_size / 2.0,
        )
    }

    /// Top edge that centres a paddle vertically
    pub fn paddle_center_y(&self) -> f32 {
        self.height / 2.0 - self.paddle_height / 2.0
    }

    pub fn serve_velocity(&self) -> Vec2 {
        Vec2::new(self.ball_speed.0, self.ball_speed.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FieldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.left_paddle_x() + config.paddle_width, 20.0);
        assert_eq!(config.right_paddle_x(), 780.0);
        assert_eq!(config.ball_center(), Vec2::new(395.0, 195.0));
        assert_eq!(config.paddle_center_y(), 160.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = FieldConfig::from_json(r#"{"width": 640, "paddle_speed": 8}"#).unwrap();
        assert_eq!(config.width, 640.0);
        assert_eq!(config.paddle_speed, 8.0);
        assert_eq!(config.height, FIELD_HEIGHT);
        assert_eq!(config.ball_speed, (BALL_SPEED_X, BALL_SPEED_Y));
    }

    #[test]
    fn test_rejects_oversized_paddle() {
        let err = FieldConfig::from_json(r#"{"height": 50}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_narrow_field() {
        let config = FieldConfig::with_field(40.0, 400.0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = FieldConfig::from_json("{ width: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
