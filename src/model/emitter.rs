use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::model::animation::Animatable;
use crate::model::skeleton::Node;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ParticleEmitterFlags: u32 {
        const EMITTER_USES_MDL = 0x8000;
        const EMITTER_USES_TGA = 0x10000;
    }
}

/// Legacy model-spawning emitter. Not part of the flat node list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleEmitter {
    pub node: Node,
    pub flags: ParticleEmitterFlags,
    pub emission_rate: Animatable<f32>,
    pub gravity: Animatable<f32>,
    pub longitude: Animatable<f32>,
    pub latitude: Animatable<f32>,
    pub visibility: Animatable<f32>,
    pub life_span: Animatable<f32>,
    pub init_velocity: Animatable<f32>,
    /// Model or texture spawned per particle.
    pub path: Option<String>,
}

impl Default for ParticleEmitter {
    fn default() -> Self {
        Self {
            node: Node::new("", crate::model::NodeFlags::PARTICLE_EMITTER),
            flags: ParticleEmitterFlags::empty(),
            emission_rate: Animatable::Static(0.0),
            gravity: Animatable::Static(0.0),
            longitude: Animatable::Static(0.0),
            latitude: Animatable::Static(0.0),
            visibility: Animatable::Static(1.0),
            life_span: Animatable::Static(0.0),
            init_velocity: Animatable::Static(0.0),
            path: None,
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ParticleEmitter2Flags: u32 {
        const UNSHADED = 0x8000;
        const SORT_PRIMS_FAR_Z = 0x10000;
        const LINE_EMITTER = 0x20000;
        const UNFOGGED = 0x40000;
        const MODEL_SPACE = 0x80000;
        const XY_QUAD = 0x100000;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct FrameFlags: u32 {
        const HEAD = 0x1;
        const TAIL = 0x2;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleEmitter2FilterMode {
    Transparent = 0,
    Blend = 1,
    Additive = 2,
    AlphaKey = 3,
    Modulate = 4,
    Modulate2x = 5,
}

impl ParticleEmitter2FilterMode {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "Transparent" => Some(Self::Transparent),
            "Blend" => Some(Self::Blend),
            "Additive" => Some(Self::Additive),
            "AlphaKey" => Some(Self::AlphaKey),
            "Modulate" => Some(Self::Modulate),
            "Modulate2x" => Some(Self::Modulate2x),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleEmitter2 {
    pub node: Node,
    pub flags: ParticleEmitter2Flags,
    pub frame_flags: FrameFlags,
    pub filter_mode: ParticleEmitter2FilterMode,
    pub speed: Animatable<f32>,
    pub variation: Animatable<f32>,
    pub latitude: Animatable<f32>,
    pub gravity: Animatable<f32>,
    pub emission_rate: Animatable<f32>,
    pub width: Animatable<f32>,
    pub length: Animatable<f32>,
    /// RGB triples, one per particle segment.
    pub segment_color: Vec<[f32; 3]>,
    /// Per-segment alpha bytes.
    pub alpha: [u8; 3],
    pub particle_scaling: [f32; 3],
    pub life_span_uv_anim: [u32; 3],
    pub decay_uv_anim: [u32; 3],
    pub tail_uv_anim: [u32; 3],
    pub tail_decay_uv_anim: [u32; 3],
    pub squirt: bool,
}

impl Default for ParticleEmitter2 {
    fn default() -> Self {
        Self {
            node: Node::new("", crate::model::NodeFlags::PARTICLE_EMITTER),
            flags: ParticleEmitter2Flags::empty(),
            frame_flags: FrameFlags::empty(),
            filter_mode: ParticleEmitter2FilterMode::Blend,
            speed: Animatable::Static(0.0),
            variation: Animatable::Static(0.0),
            latitude: Animatable::Static(0.0),
            gravity: Animatable::Static(0.0),
            emission_rate: Animatable::Static(0.0),
            width: Animatable::Static(0.0),
            length: Animatable::Static(0.0),
            segment_color: Vec::new(),
            alpha: [0; 3],
            particle_scaling: [0.0; 3],
            life_span_uv_anim: [0; 3],
            decay_uv_anim: [0; 3],
            tail_uv_anim: [0; 3],
            tail_decay_uv_anim: [0; 3],
            squirt: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RibbonEmitter {
    pub node: Node,
    pub height_above: Animatable<f32>,
    pub height_below: Animatable<f32>,
    pub alpha: Animatable<f32>,
    /// Stored in RGB order regardless of source order.
    pub color: Animatable<[f32; 3]>,
    pub texture_slot: Animatable<u32, i32>,
    pub life_span: f32,
    pub emission_rate: f32,
    pub rows: u32,
    pub columns: u32,
    pub material_id: u32,
    pub gravity: f32,
}

impl Default for RibbonEmitter {
    fn default() -> Self {
        Self {
            node: Node::new("", crate::model::NodeFlags::RIBBON_EMITTER),
            height_above: Animatable::Static(0.0),
            height_below: Animatable::Static(0.0),
            alpha: Animatable::Static(1.0),
            color: Animatable::Static([1.0, 1.0, 1.0]),
            texture_slot: Animatable::Static(0),
            life_span: 0.0,
            emission_rate: 0.0,
            rows: 0,
            columns: 0,
            material_id: 0,
            gravity: 0.0,
        }
    }
}
