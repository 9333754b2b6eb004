//! Transform state owned by the gesture controller.
//!
//! These types avoid any platform API so they can be shared by the web
//! frontend and host-side tests. The web frontend turns a [`RenderTransform`]
//! into A-Frame `rotation` / `scale` attributes.

use glam::Vec3;

/// Closed numeric interval used for clamping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f32,
    pub max: f32,
}

impl Bounds {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Saturate `value` at the interval ends.
    ///
    /// NaN input collapses to `min` so a bad event can never poison the state.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Rotation (degrees) and uniform scale multiplier of the displayed model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub scale: f32,
}

impl TransformState {
    pub const fn new(rotation_x: f32, rotation_y: f32, scale: f32) -> Self {
        Self {
            rotation_x,
            rotation_y,
            scale,
        }
    }

    /// Build the value written to the render sink. `base_scale` is the
    /// model's authored size; the controller only tracks the multiplier.
    pub fn to_render(&self, base_scale: f32) -> RenderTransform {
        let s = base_scale * self.scale;
        RenderTransform {
            rotation: Vec3::new(self.rotation_x, self.rotation_y, 0.0),
            scale: Vec3::splat(s),
        }
    }
}

/// Transform as consumed by the renderer: Euler degrees plus per-axis scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderTransform {
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl RenderTransform {
    /// A-Frame `rotation` attribute value.
    pub fn rotation_attr(&self) -> String {
        format!("{} {} {}", self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// A-Frame `scale` attribute value.
    pub fn scale_attr(&self) -> String {
        format!("{} {} {}", self.scale.x, self.scale.y, self.scale.z)
    }
}
