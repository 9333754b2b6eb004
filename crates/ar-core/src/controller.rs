//! Gesture transform controller.
//!
//! Pure state transitions: every handler reads the current state and an
//! input event and produces the next state plus an [`Outcome`]. Nothing here
//! touches the renderer; see [`crate::driver`] for the side-effecting half.

use crate::config::{
    ConfigError, ControllerConfig, HidePolicy, PinchMode, ResetAutoRotate, WheelZoom,
};
use crate::constants::{MIN_PINCH_DISTANCE, PRESET_MATCH_EPSILON};
use crate::gesture::{
    is_finite_position, pinch_distance, single_position, GestureSession, Pointer, PointerList,
    Presence, SessionKind,
};
use crate::transform::TransformState;

/// Input accepted by [`GestureController::handle`].
#[derive(Clone, Debug, PartialEq)]
pub enum ControllerEvent {
    Presence(bool),
    PointerDown(PointerList),
    PointerMove(PointerList),
    PointerUp(PointerList),
    Wheel(f32),
    CycleScale,
    ResetRotation,
    ToggleAutoRotate,
    Tick(f64),
}

/// Result of feeding one event to the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    /// Event rejected (hidden, malformed, or wrong session kind); no state changed.
    Ignored,
    /// Event accepted but the transform is the same (e.g. a session started).
    Unchanged,
    /// Transform updated; the new value should be published.
    Changed(TransformState),
}

impl Outcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, Outcome::Changed(_))
    }

    pub fn changed(&self) -> Option<TransformState> {
        match self {
            Outcome::Changed(t) => Some(*t),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GestureController {
    config: ControllerConfig,
    transform: TransformState,
    session: GestureSession,
    presence: Presence,
    auto_rotate: bool,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::from_valid(ControllerConfig::default())
    }
}

impl GestureController {
    pub fn new(config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: ControllerConfig) -> Self {
        Self {
            transform: config.default_transform,
            session: GestureSession::None,
            presence: Presence::Hidden,
            auto_rotate: config.auto_rotate.is_some(),
            config,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn transform(&self) -> TransformState {
        self.transform
    }

    pub fn session_kind(&self) -> SessionKind {
        self.session.kind()
    }

    pub fn presence(&self) -> Presence {
        self.presence
    }

    pub fn auto_rotate_enabled(&self) -> bool {
        self.auto_rotate
    }

    pub fn handle(&mut self, event: ControllerEvent) -> Outcome {
        match event {
            ControllerEvent::Presence(visible) => self.on_presence_changed(visible),
            ControllerEvent::PointerDown(p) => self.on_pointer_down(&p),
            ControllerEvent::PointerMove(p) => self.on_pointer_move(&p),
            ControllerEvent::PointerUp(p) => self.on_pointer_up(&p),
            ControllerEvent::Wheel(dy) => self.on_wheel(dy),
            ControllerEvent::CycleScale => self.cycle_scale(),
            ControllerEvent::ResetRotation => self.reset_rotation(),
            ControllerEvent::ToggleAutoRotate => self.toggle_auto_rotate(),
            ControllerEvent::Tick(dt_ms) => self.tick(dt_ms),
        }
    }

    // ---------------- Presence ----------------

    pub fn on_presence_changed(&mut self, visible: bool) -> Outcome {
        let next = Presence::from_visible(visible);
        if !visible {
            // No drag may survive a hide, even a redundant one.
            self.session = GestureSession::None;
        }
        if next == self.presence {
            return Outcome::Unchanged;
        }
        self.presence = next;
        log::debug!("[gesture] presence -> {:?}", next);

        if visible {
            return Outcome::Changed(self.transform);
        }
        match self.config.hide_policy {
            HidePolicy::Reset if self.transform != self.config.default_transform => {
                self.transform = self.config.default_transform;
                Outcome::Changed(self.transform)
            }
            _ => Outcome::Unchanged,
        }
    }

    /// Reveal a freshly loaded model: defaults restored, no gesture pending.
    pub fn show(&mut self) -> Outcome {
        self.presence = Presence::Visible;
        self.session = GestureSession::None;
        self.transform = self.config.default_transform;
        Outcome::Changed(self.transform)
    }

    // ---------------- Pointer input ----------------

    pub fn on_pointer_down(&mut self, pointers: &[Pointer]) -> Outcome {
        if !self.presence.is_visible() || !all_finite(pointers) {
            return Outcome::Ignored;
        }
        if let Some(anchor) = single_position(pointers) {
            self.begin(GestureSession::Rotate { anchor });
            return Outcome::Unchanged;
        }
        match self.pinch_from(pointers) {
            Some(session) => {
                self.begin(session);
                Outcome::Unchanged
            }
            None => Outcome::Ignored,
        }
    }

    pub fn on_pointer_move(&mut self, pointers: &[Pointer]) -> Outcome {
        if !self.presence.is_visible() || !all_finite(pointers) {
            return Outcome::Ignored;
        }
        match self.session {
            GestureSession::None => Outcome::Ignored,
            GestureSession::Rotate { anchor } => {
                let Some(pos) = single_position(pointers) else {
                    return Outcome::Ignored;
                };
                let delta = pos - anchor;
                let cfg = &self.config;
                self.transform.rotation_y += delta.x * cfg.yaw_gain;
                self.transform.rotation_x = cfg.pitch.clamp(
                    self.transform.rotation_x
                        + cfg.pitch_direction.sign() * delta.y * cfg.pitch_gain,
                );
                self.session = GestureSession::Rotate { anchor: pos };
                Outcome::Changed(self.transform)
            }
            GestureSession::Pinch {
                anchor_distance,
                base_scale,
            } => {
                let Some(distance) = pinch_distance(pointers) else {
                    return Outcome::Ignored;
                };
                let factor = distance / anchor_distance;
                if !factor.is_finite() {
                    return Outcome::Ignored;
                }
                self.transform.scale = self.config.scale.clamp(base_scale * factor);
                if self.config.pinch_mode == PinchMode::Incremental
                    && distance >= MIN_PINCH_DISTANCE
                {
                    self.session = GestureSession::Pinch {
                        anchor_distance: distance,
                        base_scale: self.transform.scale,
                    };
                }
                Outcome::Changed(self.transform)
            }
        }
    }

    /// `remaining` lists the contacts still down after the release.
    pub fn on_pointer_up(&mut self, remaining: &[Pointer]) -> Outcome {
        if !self.session.is_active() {
            return Outcome::Ignored;
        }
        if remaining.is_empty() || !all_finite(remaining) {
            self.end();
            return Outcome::Unchanged;
        }
        if let Some(anchor) = single_position(remaining) {
            // Re-anchor on the finger that stayed down so the next move
            // only sees its own motion.
            self.session = GestureSession::Rotate { anchor };
            log::debug!("[gesture] session -> Rotate (re-anchored)");
            return Outcome::Unchanged;
        }
        match self.pinch_from(&remaining[..2]) {
            Some(session) => self.session = session,
            None => self.end(),
        }
        Outcome::Unchanged
    }

    // ---------------- Discrete controls ----------------

    pub fn on_wheel(&mut self, delta_y: f32) -> Outcome {
        if !self.presence.is_visible() || !delta_y.is_finite() || delta_y == 0.0 {
            return Outcome::Ignored;
        }
        let zoom_out = delta_y > 0.0;
        let current = self.transform.scale;
        let requested = match self.config.wheel_zoom {
            WheelZoom::Factor { zoom_in, zoom_out: out } => {
                current * if zoom_out { out } else { zoom_in }
            }
            WheelZoom::Step(step) => current + if zoom_out { -step } else { step },
        };
        self.set_scale_discrete(requested)
    }

    /// Step through the preset scales. A scale that is not a preset (after
    /// a pinch or wheel) restarts the cycle at the first preset.
    pub fn cycle_scale(&mut self) -> Outcome {
        if !self.presence.is_visible() {
            return Outcome::Ignored;
        }
        let presets = &self.config.scale_presets;
        let next = presets
            .iter()
            .position(|p| (p - self.transform.scale).abs() < PRESET_MATCH_EPSILON)
            .map(|i| presets[(i + 1) % presets.len()])
            .or_else(|| presets.first().copied());
        match next {
            Some(scale) => self.set_scale_discrete(scale),
            None => Outcome::Ignored,
        }
    }

    pub fn reset_rotation(&mut self) -> Outcome {
        let d = self.config.default_transform;
        self.transform.rotation_x = d.rotation_x;
        self.transform.rotation_y = d.rotation_y;
        self.auto_rotate = match self.config.auto_rotate {
            Some(ar) => ar.on_reset == ResetAutoRotate::Enable,
            None => false,
        };
        Outcome::Changed(self.transform)
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) -> Outcome {
        if self.config.auto_rotate.is_none() {
            return Outcome::Ignored;
        }
        self.auto_rotate = enabled;
        log::info!("[gesture] auto-rotate {}", if enabled { "on" } else { "off" });
        Outcome::Unchanged
    }

    pub fn toggle_auto_rotate(&mut self) -> Outcome {
        self.set_auto_rotate(!self.auto_rotate)
    }

    /// Frame-loop hook. Advances idle spin by a fixed step per call.
    pub fn tick(&mut self, dt_ms: f64) -> Outcome {
        if !(dt_ms.is_finite() && dt_ms > 0.0) {
            return Outcome::Ignored;
        }
        let Some(ar) = self.config.auto_rotate else {
            return Outcome::Ignored;
        };
        if !self.auto_rotate || self.session.is_active() || !self.presence.is_visible() {
            return Outcome::Ignored;
        }
        self.transform.rotation_y += ar.speed;
        Outcome::Changed(self.transform)
    }

    // ---------------- helpers ----------------

    fn begin(&mut self, session: GestureSession) {
        self.auto_rotate = false;
        log::debug!("[gesture] session -> {:?}", session.kind());
        self.session = session;
    }

    fn end(&mut self) {
        log::debug!("[gesture] session -> None");
        self.session = GestureSession::None;
    }

    fn pinch_from(&self, pointers: &[Pointer]) -> Option<GestureSession> {
        let anchor_distance = pinch_distance(pointers)?;
        (anchor_distance.is_finite() && anchor_distance >= MIN_PINCH_DISTANCE).then_some(
            GestureSession::Pinch {
                anchor_distance,
                base_scale: self.transform.scale,
            },
        )
    }

    fn set_scale_discrete(&mut self, requested: f32) -> Outcome {
        // A pinch in flight would overwrite this from its stale base.
        if self.session.kind() == SessionKind::Pinch {
            self.end();
        }
        self.transform.scale = self.config.scale.clamp(requested);
        Outcome::Changed(self.transform)
    }
}

fn all_finite(pointers: &[Pointer]) -> bool {
    pointers.iter().all(|p| is_finite_position(p.position))
}
