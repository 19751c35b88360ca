use serde::{Deserialize, Serialize};

use crate::model::animation::Animatable;
use crate::model::skeleton::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightType {
    Omnidirectional = 0,
    Directional = 1,
    Ambient = 2,
}

impl LightType {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "Omnidirectional" => Some(Self::Omnidirectional),
            "Directional" => Some(Self::Directional),
            "Ambient" => Some(Self::Ambient),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub node: Node,
    pub light_type: LightType,
    /// Stored in RGB order regardless of source order.
    pub color: Option<Animatable<[f32; 3]>>,
    pub amb_color: Option<Animatable<[f32; 3]>>,
    pub intensity: Animatable<f32>,
    pub amb_intensity: Animatable<f32>,
    pub attenuation_start: Animatable<f32>,
    pub attenuation_end: Animatable<f32>,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            node: Node::new("", crate::model::NodeFlags::LIGHT),
            light_type: LightType::Omnidirectional,
            color: None,
            amb_color: None,
            intensity: Animatable::Static(0.0),
            amb_intensity: Animatable::Static(0.0),
            attenuation_start: Animatable::Static(0.0),
            attenuation_end: Animatable::Static(0.0),
        }
    }
}
