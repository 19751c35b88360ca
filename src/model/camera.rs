use serde::{Deserialize, Serialize};

use crate::model::animation::Track;

/// Cameras are not nodes; they live outside the flat node list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub name: String,
    pub position: [f32; 3],
    pub field_of_view: f32,
    pub near_clip: f32,
    pub far_clip: f32,
    pub target_position: [f32; 3],
    pub target_translation: Option<Track>,
    pub translation: Option<Track>,
    /// Roll only; a single-component track, not a quaternion.
    pub rotation: Option<Track>,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            name: String::new(),
            position: [0.0; 3],
            field_of_view: 0.0,
            near_clip: 0.0,
            far_clip: 0.0,
            target_position: [0.0; 3],
            target_translation: None,
            translation: None,
            rotation: None,
        }
    }
}
