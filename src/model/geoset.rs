use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::model::animation::Animatable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geoset {
    pub vertices: Vec<f32>, // n*3
    pub normals: Vec<f32>,  // n*3
    /// One buffer per TVertices block, each m*2 floats.
    pub tvertices: Vec<Vec<f32>>,
    /// Matrix-group index for each vertex.
    pub vertex_group: Vec<u8>,
    /// Triangle list indices.
    pub faces: Vec<u16>,
    /// Bone indices per matrix group.
    pub groups: Vec<Vec<u32>>,
    pub total_groups_count: u32,
    pub minimum_extent: [f32; 3],
    pub maximum_extent: [f32; 3],
    pub bounds_radius: f32,
    pub material_id: u32,
    pub selection_group: u32,
    pub unselectable: bool,
    /// Per-sequence extents and tint.
    pub anims: Vec<GeosetAnimInfo>,
}

impl Default for Geoset {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            normals: Vec::new(),
            tvertices: Vec::new(),
            vertex_group: Vec::new(),
            faces: Vec::new(),
            groups: Vec::new(),
            total_groups_count: 0,
            minimum_extent: [0.0; 3],
            maximum_extent: [0.0; 3],
            bounds_radius: 0.0,
            material_id: 0,
            selection_group: 0,
            unselectable: false,
            anims: Vec::new(),
        }
    }
}

/// One `Anim { .. }` entry of a Geoset block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeosetAnimInfo {
    pub alpha: f32,
    pub color: Option<[f32; 3]>,
    pub minimum_extent: [f32; 3],
    pub maximum_extent: [f32; 3],
    pub bounds_radius: f32,
}

impl Default for GeosetAnimInfo {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            color: None,
            minimum_extent: [0.0; 3],
            maximum_extent: [0.0; 3],
            bounds_radius: 0.0,
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct GeosetAnimFlags: u32 {
        const DROP_SHADOW = 0x1;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeosetAnim {
    pub geoset_id: i32, // -1 means no geoset
    pub alpha: Animatable<f32>,
    /// Stored in RGB order regardless of source order.
    pub color: Option<Animatable<[f32; 3]>>,
    pub flags: GeosetAnimFlags,
}

impl Default for GeosetAnim {
    fn default() -> Self {
        Self {
            geoset_id: -1,
            alpha: Animatable::Static(1.0),
            color: None,
            flags: GeosetAnimFlags::empty(),
        }
    }
}
