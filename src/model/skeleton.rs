use std::collections::BTreeMap;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::model::animation::Track;

bitflags! {
    /// Packed node flags. The low byte holds behavioral flags, the high
    /// bits hold the node type tag; every node carries exactly one tag bit.
    ///
    /// The MDX binary twin encodes Helper as 0; here it gets the free
    /// 0x8000 bit so the tag can be tested like any other.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct NodeFlags: u32 {
        const DONT_INHERIT_TRANSLATION = 0x1;
        const DONT_INHERIT_ROTATION = 0x2;
        const DONT_INHERIT_SCALING = 0x4;
        const BILLBOARDED = 0x8;
        const BILLBOARDED_LOCK_X = 0x10;
        const BILLBOARDED_LOCK_Y = 0x20;
        const BILLBOARDED_LOCK_Z = 0x40;
        const CAMERA_ANCHORED = 0x80;

        const BONE = 0x100;
        const LIGHT = 0x200;
        const EVENT_OBJECT = 0x400;
        const ATTACHMENT = 0x800;
        const PARTICLE_EMITTER = 0x1000;
        const COLLISION_SHAPE = 0x2000;
        const RIBBON_EMITTER = 0x4000;
        const HELPER = 0x8000;
    }
}

/// Value of an unrecognized key inside a loose block body. Most are plain
/// numbers; a few are keywords (`GeosetId Multiple`, `GeosetAnimId None`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExtraValue {
    Number(f64),
    Keyword(String),
}

/// Transformable scene entity shared by bones, helpers, attachments, event
/// objects, collision shapes, emitters and lights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub object_id: u32,
    pub parent_id: i32, // -1 means no parent
    /// Assigned from the positional PivotPoints list after all blocks parse.
    pub pivot_point: Option<[f32; 3]>,
    pub flags: NodeFlags,
    pub translation: Option<Track>,
    pub rotation: Option<Track>,
    pub scaling: Option<Track>,
    pub visibility: Option<Track>,
    /// Unrecognized keys of the node body, recorded as read.
    pub extras: BTreeMap<String, ExtraValue>,
}

impl Node {
    pub fn new(name: impl Into<String>, type_tag: NodeFlags) -> Self {
        Self {
            name: name.into(),
            object_id: 0,
            parent_id: -1,
            pivot_point: None,
            flags: type_tag,
            translation: None,
            rotation: None,
            scaling: None,
            visibility: None,
            extras: BTreeMap::new(),
        }
    }
}

/// Typed bucket a flat-list entry points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Bone,
    Helper,
    Attachment,
    EventObject,
    CollisionShape,
    ParticleEmitter2,
    Light,
    RibbonEmitter,
}

/// Entry of the flat node list: the record itself lives in its typed bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeHandle {
    pub kind: NodeKind,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub node: Node,
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventObject {
    pub node: Node,
    /// Frames at which the event fires.
    pub event_track: Vec<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionShapeType {
    Box = 0,
    Sphere = 1,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionShape {
    pub node: Node,
    pub shape: CollisionShapeType,
    /// Corner points (box) or center (sphere), n*3 floats.
    pub vertices: Vec<f32>,
    pub bounds_radius: Option<f32>,
}
