use ar_core::{Outcome, Pointer, PointerList};
use fnv::FnvHashMap;
use glam::Vec2;
use web_sys as web;

/// Contacts currently down, keyed by `pointerId`.
///
/// Pointer events arrive one contact at a time; the controller wants the full
/// set on every event, ordered so that "the first two" is stable across
/// moves.
#[derive(Default, Debug, Clone)]
pub struct ContactSet {
    contacts: FnvHashMap<i32, Vec2>,
}

impl ContactSet {
    pub fn press(&mut self, id: i32, pos: Vec2) {
        self.contacts.insert(id, pos);
    }

    /// Returns false for contacts we never saw go down (hover moves).
    pub fn update(&mut self, id: i32, pos: Vec2) -> bool {
        match self.contacts.get_mut(&id) {
            Some(p) => {
                *p = pos;
                true
            }
            None => false,
        }
    }

    pub fn release(&mut self, id: i32) -> bool {
        self.contacts.remove(&id).is_some()
    }

    /// Drops every contact; returns how many were down.
    pub fn release_all(&mut self) -> usize {
        self.contacts.drain().count()
    }

    pub fn snapshot(&self) -> PointerList {
        let mut list: PointerList = self
            .contacts
            .iter()
            .map(|(&id, &position)| Pointer { id, position })
            .collect();
        list.sort_unstable_by_key(|p| p.id);
        list
    }
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_client_px(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Wheel direction normalised to -1 (zoom in), 0, or 1 (zoom out).
#[inline]
pub fn wheel_direction(delta_y: f64) -> f32 {
    if delta_y > 0.0 {
        1.0
    } else if delta_y < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// The page keeps its scroll unless the controller took the wheel step.
#[inline]
pub fn consumes_wheel(outcome: &Outcome) -> bool {
    *outcome != Outcome::Ignored
}
