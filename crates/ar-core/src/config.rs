//! Controller profiles.
//!
//! Each page variant of the viewer behaves slightly differently (pitch range,
//! pinch discipline, what happens on hide). Those differences are captured
//! here as data so a single controller serves all of them.

use crate::constants::*;
use crate::transform::{Bounds, TransformState};
use thiserror::Error;

/// Sign applied to vertical drag before it reaches `rotation_x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PitchDirection {
    /// Dragging down decreases pitch.
    Inverted,
    /// Dragging down increases pitch.
    Natural,
}

impl PitchDirection {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            PitchDirection::Inverted => -1.0,
            PitchDirection::Natural => 1.0,
        }
    }
}

/// How a pinch turns finger distance into scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinchMode {
    /// Ratio against the distance and scale captured when the pinch began.
    Cumulative,
    /// Ratio against the previous move; anchor and base re-based every tick.
    Incremental,
}

/// What hiding the model does to the transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HidePolicy {
    /// Restore default rotation and scale.
    Reset,
    /// Keep the last transform until an explicit reset.
    Preserve,
}

/// Effect of the reset-rotation button on idle spin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetAutoRotate {
    Enable,
    Disable,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoRotate {
    /// Degrees added to `rotation_y` per frame.
    pub speed: f32,
    pub on_reset: ResetAutoRotate,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelZoom {
    /// Multiply by `zoom_in` (scroll up) or `zoom_out` (scroll down).
    Factor { zoom_in: f32, zoom_out: f32 },
    /// Add or subtract a fixed step.
    Step(f32),
}

/// What the controller's scale multiplies when written to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleBasis {
    /// Relative to the model's authored size.
    Model,
    /// Written as-is; the scene markup already sizes the model.
    Absolute,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} bounds are invalid: [{min}, {max}]")]
    InvalidBounds { name: &'static str, min: f32, max: f32 },
    #[error("{name} gain must be finite and positive, got {value}")]
    InvalidGain { name: &'static str, value: f32 },
    #[error("default {name} {value} lies outside [{min}, {max}]")]
    DefaultOutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("scale preset list is empty")]
    NoScalePresets,
    #[error("scale preset {0} lies outside the scale bounds")]
    PresetOutOfRange(f32),
    #[error("scale preset {0} repeats an earlier preset")]
    DuplicatePreset(f32),
    #[error("scale bounds must be strictly positive, got min {0}")]
    NonPositiveScale(f32),
    #[error("auto-rotate speed must be finite, got {0}")]
    InvalidAutoRotate(f32),
    #[error("wheel zoom setting is invalid")]
    InvalidWheelZoom,
    #[error("unknown profile {0:?}")]
    UnknownProfile(String),
}

/// Every variant-dependent knob of the gesture controller.
#[derive(Clone, Debug, PartialEq)]
pub struct ControllerConfig {
    pub pitch: Bounds,
    pub scale: Bounds,
    pub yaw_gain: f32,
    pub pitch_gain: f32,
    pub pitch_direction: PitchDirection,
    pub pinch_mode: PinchMode,
    pub hide_policy: HidePolicy,
    pub scale_presets: Vec<f32>,
    pub default_transform: TransformState,
    pub auto_rotate: Option<AutoRotate>,
    pub wheel_zoom: WheelZoom,
    pub scale_basis: ScaleBasis,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::simple()
    }
}

impl ControllerConfig {
    /// Hiro marker page: model lies on the marker, absolute scale.
    pub fn marker() -> Self {
        Self {
            pitch: Bounds::new(MARKER_PITCH_MIN, MARKER_PITCH_MAX),
            scale: Bounds::new(MARKER_SCALE_MIN, MARKER_SCALE_MAX),
            yaw_gain: YAW_GAIN,
            pitch_gain: PITCH_GAIN,
            pitch_direction: PitchDirection::Natural,
            pinch_mode: PinchMode::Cumulative,
            hide_policy: HidePolicy::Preserve,
            scale_presets: MARKER_SCALE_PRESETS.to_vec(),
            default_transform: TransformState::new(
                MARKER_PITCH_DEFAULT,
                0.0,
                MARKER_SCALE_PRESETS[0],
            ),
            auto_rotate: None,
            wheel_zoom: WheelZoom::Step(MARKER_WHEEL_STEP),
            scale_basis: ScaleBasis::Absolute,
        }
    }

    /// Natural-feature tracking page: overlay is rebuilt from defaults
    /// every time the target reappears.
    pub fn nft() -> Self {
        Self {
            pitch: Bounds::new(FREE_PITCH_MIN, FREE_PITCH_MAX),
            scale: Bounds::new(FREE_SCALE_MIN, FREE_SCALE_MAX),
            yaw_gain: YAW_GAIN,
            pitch_gain: PITCH_GAIN,
            pitch_direction: PitchDirection::Inverted,
            pinch_mode: PinchMode::Cumulative,
            hide_policy: HidePolicy::Reset,
            scale_presets: FREE_SCALE_PRESETS.to_vec(),
            default_transform: TransformState::new(0.0, 0.0, FREE_SCALE_PRESETS[0]),
            auto_rotate: None,
            wheel_zoom: WheelZoom::Factor {
                zoom_in: WHEEL_ZOOM_IN_FACTOR,
                zoom_out: WHEEL_ZOOM_OUT_FACTOR,
            },
            scale_basis: ScaleBasis::Model,
        }
    }

    /// Untracked page: model always shown over the camera feed and spins
    /// while idle.
    pub fn simple() -> Self {
        Self {
            pinch_mode: PinchMode::Incremental,
            auto_rotate: Some(AutoRotate {
                speed: AUTO_ROTATE_SPEED,
                on_reset: ResetAutoRotate::Enable,
            }),
            ..Self::nft()
        }
    }

    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "marker" | "hiro" => Ok(Self::marker()),
            "nft" => Ok(Self::nft()),
            "simple" | "" => Ok(Self::simple()),
            _ => Err(ConfigError::UnknownProfile(name.to_string())),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_bounds("pitch", self.pitch)?;
        check_bounds("scale", self.scale)?;
        if self.scale.min <= 0.0 {
            return Err(ConfigError::NonPositiveScale(self.scale.min));
        }
        check_gain("yaw", self.yaw_gain)?;
        check_gain("pitch", self.pitch_gain)?;

        let d = self.default_transform;
        check_default("pitch", d.rotation_x, self.pitch)?;
        check_default("scale", d.scale, self.scale)?;
        if !d.rotation_y.is_finite() {
            return Err(ConfigError::DefaultOutOfRange {
                name: "yaw",
                value: d.rotation_y,
                min: f32::MIN,
                max: f32::MAX,
            });
        }

        if self.scale_presets.is_empty() {
            return Err(ConfigError::NoScalePresets);
        }
        if let Some(&p) = self.scale_presets.iter().find(|p| !self.scale.contains(**p)) {
            return Err(ConfigError::PresetOutOfRange(p));
        }
        for (i, &p) in self.scale_presets.iter().enumerate().skip(1) {
            let earlier = &self.scale_presets[..i];
            if earlier.iter().any(|q| (p - q).abs() < PRESET_MATCH_EPSILON) {
                return Err(ConfigError::DuplicatePreset(p));
            }
        }

        if let Some(ar) = self.auto_rotate {
            if !ar.speed.is_finite() {
                return Err(ConfigError::InvalidAutoRotate(ar.speed));
            }
        }

        let wheel_ok = match self.wheel_zoom {
            WheelZoom::Factor { zoom_in, zoom_out } => {
                zoom_in.is_finite() && zoom_in > 1.0 && zoom_out > 0.0 && zoom_out < 1.0
            }
            WheelZoom::Step(step) => step.is_finite() && step > 0.0,
        };
        if !wheel_ok {
            return Err(ConfigError::InvalidWheelZoom);
        }
        Ok(())
    }
}

fn check_bounds(name: &'static str, b: Bounds) -> Result<(), ConfigError> {
    if b.is_valid() {
        Ok(())
    } else {
        Err(ConfigError::InvalidBounds {
            name,
            min: b.min,
            max: b.max,
        })
    }
}

fn check_gain(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidGain { name, value })
    }
}

fn check_default(name: &'static str, value: f32, b: Bounds) -> Result<(), ConfigError> {
    if value.is_finite() && b.contains(value) {
        Ok(())
    } else {
        Err(ConfigError::DefaultOutOfRange {
            name,
            value,
            min: b.min,
            max: b.max,
        })
    }
}
