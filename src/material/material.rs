use serde::{Deserialize, Serialize};

use super::{FilterMode, RenderModeFlags, ShadingFlags};
use crate::model::Animatable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub render_mode: RenderModeFlags,
    pub priority_plane: Option<i32>,
    pub layers: Vec<Layer>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            render_mode: RenderModeFlags::empty(),
            priority_plane: None,
            layers: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub filter_mode: FilterMode,
    pub shading: ShadingFlags,
    pub texture_id: Animatable<u32, i32>,
    pub alpha: Animatable<f32>,
    pub coord_id: u32,
    pub tvertex_anim_id: i32, // -1 means no texture animation
}

impl Default for Layer {
    fn default() -> Self {
        Self {
            filter_mode: FilterMode::None,
            shading: ShadingFlags::empty(),
            texture_id: Animatable::Static(0),
            alpha: Animatable::Static(1.0),
            coord_id: 0,
            tvertex_anim_id: -1,
        }
    }
}
