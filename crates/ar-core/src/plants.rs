//! Static plant catalogue.
//!
//! Records are process-wide constants; the driver borrows them for as long as
//! a plant is on screen.

use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlantSpecs {
    pub family: &'static str,
    pub origin: &'static str,
    pub feature: &'static str,
}

/// Model resource and its authored placement in the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelSpec {
    pub path: &'static str,
    pub base_scale: f32,
    pub position: Vec3,
    pub rotation: Vec3,
}

impl ModelSpec {
    pub fn position_attr(&self) -> String {
        format!("{} {} {}", self.position.x, self.position.y, self.position.z)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlantRecord {
    pub id: &'static str,
    /// DOM ids of tracking targets that reveal this plant.
    pub marker_ids: &'static [&'static str],
    pub title: &'static str,
    pub english_name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub specs: PlantSpecs,
    pub fun_fact: &'static str,
    pub model: ModelSpec,
}

pub const ELEPHANT_EAR: PlantRecord = PlantRecord {
    id: "elephant_ear",
    marker_ids: &["elephantEarMarker", "plantMarker"],
    title: "滴水观音",
    english_name: "Alocasia macrorrhizos",
    category: "多年生草本",
    description: "滴水观音又称海芋、象耳芋，是天南星科海芋属植物。因其叶片巨大如象耳，且在湿度大时叶尖会滴水而得名。是常见的室内观叶植物，但全株有毒，需小心养护。",
    specs: PlantSpecs {
        family: "天南星科",
        origin: "亚洲热带",
        feature: "叶大如伞",
    },
    fun_fact: "滴水观音在空气湿度高时，叶尖会凝结水珠滴落，这是植物的\"吐水现象\"！",
    model: ModelSpec {
        path: "./models/elephant_ear/scene.gltf",
        base_scale: 0.15,
        position: Vec3::new(0.0, -0.4, 0.0),
        rotation: Vec3::ZERO,
    },
};

pub static PLANTS: &[PlantRecord] = &[ELEPHANT_EAR];

/// Plant shown first on pages without tracking.
pub fn default_plant() -> &'static PlantRecord {
    &PLANTS[0]
}

pub fn find_plant(id: &str) -> Option<&'static PlantRecord> {
    PLANTS.iter().find(|p| p.id == id)
}

pub fn find_by_marker(marker_id: &str) -> Option<&'static PlantRecord> {
    PLANTS.iter().find(|p| p.marker_ids.contains(&marker_id))
}

/// Every marker id the page should listen on.
pub fn marker_ids() -> impl Iterator<Item = &'static str> {
    PLANTS.iter().flat_map(|p| p.marker_ids.iter().copied())
}
