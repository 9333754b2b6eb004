//! Side-effecting half of the controller.
//!
//! [`ControllerDriver`] feeds events to a [`GestureController`] and writes the
//! resulting transform into whatever renderer is attached. The renderer is
//! borrowed behind [`RenderSink`]; the driver never creates or destroys it.

use crate::config::{ConfigError, ControllerConfig, HidePolicy, ScaleBasis};
use crate::controller::{ControllerEvent, GestureController, Outcome};
use crate::plants::{find_by_marker, PlantRecord};
use crate::transform::{RenderTransform, TransformState};

/// Renderer-facing output. Writes arrive at input-event frequency and must be
/// idempotent.
pub trait RenderSink {
    fn apply(&mut self, transform: &RenderTransform);
    fn load_model(&mut self, plant: &PlantRecord);
    fn unload_model(&mut self);
}

pub struct ControllerDriver<S> {
    controller: GestureController,
    sink: Option<S>,
    plant: Option<&'static PlantRecord>,
    panel_open: bool,
    warned_unpublishable: bool,
}

impl<S: RenderSink> ControllerDriver<S> {
    pub fn new(config: ControllerConfig, sink: Option<S>) -> Result<Self, ConfigError> {
        Ok(Self {
            controller: GestureController::new(config)?,
            sink,
            plant: None,
            panel_open: false,
            warned_unpublishable: false,
        })
    }

    pub fn controller(&self) -> &GestureController {
        &self.controller
    }

    pub fn plant(&self) -> Option<&'static PlantRecord> {
        self.plant
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    /// Whether the last publish was dropped for want of a sink or model.
    pub fn last_publish_dropped(&self) -> bool {
        self.warned_unpublishable
    }

    pub fn attach_sink(&mut self, sink: S) {
        self.sink = Some(sink);
        self.warned_unpublishable = false;
    }

    /// Forward one event; publishes when the transform changed.
    pub fn dispatch(&mut self, event: ControllerEvent) -> Outcome {
        let outcome = self.controller.handle(event);
        if let Outcome::Changed(t) = outcome {
            self.publish(t);
        }
        outcome
    }

    /// Current transform as the renderer would receive it.
    pub fn render_transform(&self) -> Option<RenderTransform> {
        let base = self.base_scale()?;
        Some(self.controller.transform().to_render(base))
    }

    // ---------------- Presence ----------------

    pub fn show_plant(&mut self, plant: &'static PlantRecord) {
        let same_plant = self.plant.map(|p| p.id) == Some(plant.id);
        let preserve = self.controller.config().hide_policy == HidePolicy::Preserve;
        if !same_plant {
            if let Some(sink) = self.sink.as_mut() {
                sink.load_model(plant);
            }
        }
        self.plant = Some(plant);
        self.warned_unpublishable = false;

        let outcome = if same_plant && preserve {
            self.controller.on_presence_changed(true)
        } else {
            self.controller.show()
        };
        log::info!("[marker] showing {} ({})", plant.title, plant.english_name);
        if let Outcome::Changed(t) = outcome {
            self.publish(t);
        }
    }

    pub fn hide_plant(&mut self) {
        let outcome = self.controller.on_presence_changed(false);
        self.panel_open = false;
        if let Outcome::Changed(t) = outcome {
            self.publish(t);
        }
        if self.controller.config().hide_policy == HidePolicy::Reset {
            if let Some(sink) = self.sink.as_mut() {
                sink.unload_model();
            }
            self.plant = None;
        }
    }

    /// Returns whether the marker belongs to a catalogued plant.
    pub fn marker_found(&mut self, marker_id: &str) -> bool {
        match find_by_marker(marker_id) {
            Some(plant) => {
                self.show_plant(plant);
                true
            }
            None => {
                log::warn!("[marker] found unknown marker {marker_id}");
                false
            }
        }
    }

    pub fn marker_lost(&mut self, marker_id: &str) {
        let Some(plant) = find_by_marker(marker_id) else {
            log::warn!("[marker] lost unknown marker {marker_id}");
            return;
        };
        if self.plant.map(|p| p.id) != Some(plant.id) {
            log::debug!("[marker] {marker_id} lost but {} is not displayed", plant.id);
            return;
        }
        log::info!("[marker] lost {}", plant.title);
        self.hide_plant();
    }

    // ---------------- Info panel ----------------

    /// Open/close the details panel. Only a displayed plant has details.
    pub fn toggle_panel(&mut self) -> bool {
        if self.plant.is_none() || !self.controller.presence().is_visible() {
            log::info!("[panel] nothing to describe; scan a plant marker first");
            self.panel_open = false;
            return false;
        }
        self.panel_open = !self.panel_open;
        self.panel_open
    }

    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    // ---------------- helpers ----------------

    fn base_scale(&self) -> Option<f32> {
        match self.controller.config().scale_basis {
            ScaleBasis::Absolute => Some(1.0),
            ScaleBasis::Model => self.plant.map(|p| p.model.base_scale),
        }
    }

    fn publish(&mut self, transform: TransformState) {
        let base = self.base_scale();
        match (self.sink.as_mut(), base) {
            (Some(sink), Some(base)) => {
                sink.apply(&transform.to_render(base));
                self.warned_unpublishable = false;
            }
            _ => {
                if !self.warned_unpublishable {
                    log::warn!("[sink] no render sink or model attached; transform not shown");
                    self.warned_unpublishable = true;
                }
            }
        }
    }
}
