mod animation;
mod camera;
mod emitter;
mod geoset;
mod light;
mod skeleton;
mod texture;

pub use animation::*;
pub use camera::*;
pub use emitter::*;
pub use geoset::*;
pub use light::*;
pub use skeleton::*;
pub use texture::*;

// Re-export material types from the material module
pub use crate::material::{FilterMode, Layer, Material, RenderModeFlags, ShadingFlags};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Model header block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub minimum_extent: [f32; 3],
    pub maximum_extent: [f32; 3],
    pub bounds_radius: f32,
    pub blend_time: u32,
    /// Header scalars with no dedicated field (NumGeosets and friends).
    pub extras: BTreeMap<String, f64>,
}

impl Default for ModelInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            minimum_extent: [0.0; 3],
            maximum_extent: [0.0; 3],
            bounds_radius: 0.0,
            blend_time: 150,
            extras: BTreeMap::new(),
        }
    }
}

/// The full scene graph a parse returns. Every list keeps the order of
/// appearance in the source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    pub version: u32,
    pub info: ModelInfo,
    pub sequences: Vec<Sequence>,
    pub global_sequences: Vec<u32>,
    pub textures: Vec<Texture>,
    pub materials: Vec<Material>,
    pub texture_anims: Vec<TVertexAnim>,
    pub geosets: Vec<Geoset>,
    pub geoset_anims: Vec<GeosetAnim>,
    pub bones: Vec<Node>,
    pub helpers: Vec<Node>,
    pub attachments: Vec<Attachment>,
    pub event_objects: Vec<EventObject>,
    pub collision_shapes: Vec<CollisionShape>,
    pub particle_emitters: Vec<ParticleEmitter>,
    pub particle_emitters2: Vec<ParticleEmitter2>,
    pub cameras: Vec<Camera>,
    pub lights: Vec<Light>,
    pub ribbon_emitters: Vec<RibbonEmitter>,
    /// Positional pivot list; entry i belongs to `nodes[i]`.
    pub pivot_points: Vec<[f32; 3]>,
    /// Flat node index space. Bones, helpers and attachments are not
    /// registered here by the parser; their slots are filled by callers
    /// that assemble a scene by ObjectId.
    pub nodes: Vec<NodeHandle>,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            version: 800,
            info: ModelInfo::default(),
            sequences: Vec::new(),
            global_sequences: Vec::new(),
            textures: Vec::new(),
            materials: Vec::new(),
            texture_anims: Vec::new(),
            geosets: Vec::new(),
            geoset_anims: Vec::new(),
            bones: Vec::new(),
            helpers: Vec::new(),
            attachments: Vec::new(),
            event_objects: Vec::new(),
            collision_shapes: Vec::new(),
            particle_emitters: Vec::new(),
            particle_emitters2: Vec::new(),
            cameras: Vec::new(),
            lights: Vec::new(),
            ribbon_emitters: Vec::new(),
            pivot_points: Vec::new(),
            nodes: Vec::new(),
        }
    }
}

impl Model {
    /// Resolves a flat-list entry to the node record in its typed bucket.
    pub fn node(&self, handle: NodeHandle) -> Option<&Node> {
        let i = handle.index;
        match handle.kind {
            NodeKind::Bone => self.bones.get(i),
            NodeKind::Helper => self.helpers.get(i),
            NodeKind::Attachment => self.attachments.get(i).map(|a| &a.node),
            NodeKind::EventObject => self.event_objects.get(i).map(|e| &e.node),
            NodeKind::CollisionShape => self.collision_shapes.get(i).map(|c| &c.node),
            NodeKind::ParticleEmitter2 => self.particle_emitters2.get(i).map(|e| &e.node),
            NodeKind::Light => self.lights.get(i).map(|l| &l.node),
            NodeKind::RibbonEmitter => self.ribbon_emitters.get(i).map(|r| &r.node),
        }
    }

    pub fn node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        let i = handle.index;
        match handle.kind {
            NodeKind::Bone => self.bones.get_mut(i),
            NodeKind::Helper => self.helpers.get_mut(i),
            NodeKind::Attachment => self.attachments.get_mut(i).map(|a| &mut a.node),
            NodeKind::EventObject => self.event_objects.get_mut(i).map(|e| &mut e.node),
            NodeKind::CollisionShape => self.collision_shapes.get_mut(i).map(|c| &mut c.node),
            NodeKind::ParticleEmitter2 => self.particle_emitters2.get_mut(i).map(|e| &mut e.node),
            NodeKind::Light => self.lights.get_mut(i).map(|l| &mut l.node),
            NodeKind::RibbonEmitter => self.ribbon_emitters.get_mut(i).map(|r| &mut r.node),
        }
    }
}
