use glam::Vec2;
use smallvec::SmallVec;

/// One active contact (mouse button, finger or pen) in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub id: i32,
    pub position: Vec2,
}

impl Pointer {
    pub fn new(id: i32, x: f32, y: f32) -> Self {
        Self {
            id,
            position: Vec2::new(x, y),
        }
    }
}

/// Per-event contact list; more than two simultaneous contacts is rare.
pub type PointerList = SmallVec<[Pointer; 4]>;

/// Whether the tracked model is currently on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Presence {
    Visible,
    #[default]
    Hidden,
}

impl Presence {
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            Presence::Visible
        } else {
            Presence::Hidden
        }
    }

    pub fn is_visible(self) -> bool {
        self == Presence::Visible
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionKind {
    None,
    Rotate,
    Pinch,
}

/// Transient state of the gesture in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureSession {
    #[default]
    None,
    /// Single-contact drag; `anchor` is the last seen contact position.
    Rotate { anchor: Vec2 },
    /// Two-contact pinch; `base_scale` is the scale the ratio applies to.
    Pinch { anchor_distance: f32, base_scale: f32 },
}

impl GestureSession {
    pub fn kind(&self) -> SessionKind {
        match self {
            GestureSession::None => SessionKind::None,
            GestureSession::Rotate { .. } => SessionKind::Rotate,
            GestureSession::Pinch { .. } => SessionKind::Pinch,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, GestureSession::None)
    }
}

/// Euclidean distance between the first two contacts, if there are exactly two.
#[inline]
pub fn pinch_distance(pointers: &[Pointer]) -> Option<f32> {
    match pointers {
        [a, b] => Some(a.position.distance(b.position)),
        _ => None,
    }
}

/// Position of the only contact, if there is exactly one.
#[inline]
pub fn single_position(pointers: &[Pointer]) -> Option<Vec2> {
    match pointers {
        [p] => Some(p.position),
        _ => None,
    }
}

#[inline]
pub(crate) fn is_finite_position(p: Vec2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
