// Shared interaction tuning constants used by the controller profiles.

// Drag-to-rotate gains (degrees per pixel)
pub const YAW_GAIN: f32 = 0.5; // horizontal drag -> rotation about Y
pub const PITCH_GAIN: f32 = 0.3; // vertical drag -> rotation about X

// Pitch limits
pub const FREE_PITCH_MIN: f32 = -60.0;
pub const FREE_PITCH_MAX: f32 = 60.0;
pub const MARKER_PITCH_MIN: f32 = -150.0; // keeps a marker-anchored model from flipping
pub const MARKER_PITCH_MAX: f32 = -30.0;
pub const MARKER_PITCH_DEFAULT: f32 = -90.0; // model's resting orientation on the marker

// Scale limits (multiplier applied to the model's base scale)
pub const FREE_SCALE_MIN: f32 = 0.5;
pub const FREE_SCALE_MAX: f32 = 3.0;
pub const MARKER_SCALE_MIN: f32 = 0.1;
pub const MARKER_SCALE_MAX: f32 = 1.0;

// Button-driven scale cycles
pub const FREE_SCALE_PRESETS: [f32; 3] = [1.0, 1.5, 0.7];
pub const MARKER_SCALE_PRESETS: [f32; 3] = [0.3, 0.5, 0.2];

// Wheel zoom
pub const WHEEL_ZOOM_IN_FACTOR: f32 = 1.1;
pub const WHEEL_ZOOM_OUT_FACTOR: f32 = 0.9;
pub const MARKER_WHEEL_STEP: f32 = 0.05;

// Idle spin (degrees per frame)
pub const AUTO_ROTATE_SPEED: f32 = 0.3;

// Two presets closer than this are treated as the same value when cycling
pub const PRESET_MATCH_EPSILON: f32 = 1e-4;

// Pinch distances below this (pixels) cannot anchor a ratio
pub const MIN_PINCH_DISTANCE: f32 = 1e-3;
