use ar_core::{PlantRecord, RenderSink, RenderTransform};
use web_sys as web;

/// Writes transforms into an A-Frame entity as declarative attributes.
///
/// Holds a handle to the page's element; the element's lifetime belongs to
/// the page, not to us.
pub struct AttributeSink {
    entity: web::Element,
    last: Option<RenderTransform>,
}

impl AttributeSink {
    pub fn new(entity: web::Element) -> Self {
        Self { entity, last: None }
    }

    pub fn find(document: &web::Document, element_id: &str) -> Option<Self> {
        document.get_element_by_id(element_id).map(Self::new)
    }
}

impl RenderSink for AttributeSink {
    fn apply(&mut self, transform: &RenderTransform) {
        let last = self.last.replace(*transform);
        if last.map(|t| t.rotation) != Some(transform.rotation) {
            _ = self
                .entity
                .set_attribute("rotation", &transform.rotation_attr());
        }
        if last.map(|t| t.scale) != Some(transform.scale) {
            _ = self.entity.set_attribute("scale", &transform.scale_attr());
        }
    }

    fn load_model(&mut self, plant: &PlantRecord) {
        let model = &plant.model;
        _ = self.entity.set_attribute("gltf-model", model.path);
        _ = self.entity.set_attribute("position", &model.position_attr());
        let r = model.rotation;
        _ = self
            .entity
            .set_attribute("rotation", &format!("{} {} {}", r.x, r.y, r.z));
        self.last = None;
        log::info!("[sink] loaded model {}", model.path);
    }

    fn unload_model(&mut self) {
        _ = self.entity.remove_attribute("gltf-model");
        self.last = None;
    }
}
