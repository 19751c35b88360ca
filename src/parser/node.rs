use crate::error::Result;
use crate::model::{
    CollisionShape, CollisionShapeType, EventObject, ExtraValue, Model, Node, NodeFlags,
    NodeHandle, NodeKind,
};
use crate::parser::block::parse_vector_list;
use crate::parser::scanner::{Scalar, Scanner};
use crate::parser::track::parse_track;

/// Reads the node body shared by every node-like block: a quoted name
/// prefix, transform tracks, billboard and inheritance flags. `custom` gets
/// first claim on each keyword so specialized blocks can extend the
/// grammar; unclaimed unknown keys are recorded as keyword-or-number
/// extras.
pub fn parse_node_with(
    sc: &mut Scanner,
    type_tag: NodeFlags,
    mut custom: impl FnMut(&mut Scanner, &str, &mut Node) -> Result<bool>,
) -> Result<Node> {
    let name = sc.quoted_string()?.unwrap_or_default().to_string();
    let mut node = Node::new(name, type_tag);
    sc.expect(b'{')?;
    while !sc.accept(b'}') {
        let keyword = sc.keyword().ok_or_else(|| sc.error("expected keyword"))?;
        if custom(sc, keyword, &mut node)? {
            sc.accept(b',');
            continue;
        }
        match keyword {
            "ObjectId" => node.object_id = u32::from_f64(sc.number()?),
            "Parent" => node.parent_id = i32::from_f64(sc.number()?),
            "Translation" => node.translation = Some(parse_track(sc, 3)?),
            "Rotation" => node.rotation = Some(parse_track(sc, 4)?),
            "Scaling" => node.scaling = Some(parse_track(sc, 3)?),
            "Visibility" => node.visibility = Some(parse_track(sc, 1)?),
            "Billboarded" => node.flags |= NodeFlags::BILLBOARDED,
            "BillboardedLockX" => node.flags |= NodeFlags::BILLBOARDED_LOCK_X,
            "BillboardedLockY" => node.flags |= NodeFlags::BILLBOARDED_LOCK_Y,
            "BillboardedLockZ" => node.flags |= NodeFlags::BILLBOARDED_LOCK_Z,
            "CameraAnchored" => node.flags |= NodeFlags::CAMERA_ANCHORED,
            "DontInherit" => parse_dont_inherit(sc, &mut node)?,
            other => {
                // GeosetId Multiple, GeosetAnimId None, plain scalars
                let value = match sc.keyword() {
                    Some(word) => ExtraValue::Keyword(word.to_string()),
                    None => ExtraValue::Number(sc.number()?),
                };
                node.extras.insert(other.to_string(), value);
            }
        }
        sc.accept(b',');
    }
    Ok(node)
}

/// `DontInherit { Translation, Rotation, Scaling }`
fn parse_dont_inherit(sc: &mut Scanner, node: &mut Node) -> Result<()> {
    sc.expect(b'{')?;
    while !sc.accept(b'}') {
        let keyword = sc.keyword().ok_or_else(|| sc.error("expected keyword"))?;
        match keyword {
            "Translation" => node.flags |= NodeFlags::DONT_INHERIT_TRANSLATION,
            "Rotation" => node.flags |= NodeFlags::DONT_INHERIT_ROTATION,
            "Scaling" => node.flags |= NodeFlags::DONT_INHERIT_SCALING,
            other => {
                return Err(sc.error(format!("unexpected keyword '{other}' in DontInherit")));
            }
        }
        sc.accept(b',');
    }
    Ok(())
}

pub fn parse_bone(sc: &mut Scanner, model: &mut Model) -> Result<()> {
    let node = parse_node_with(sc, NodeFlags::BONE, |_, _, _| Ok(false))?;
    model.bones.push(node);
    Ok(())
}

pub fn parse_helper(sc: &mut Scanner, model: &mut Model) -> Result<()> {
    let node = parse_node_with(sc, NodeFlags::HELPER, |_, _, _| Ok(false))?;
    model.helpers.push(node);
    Ok(())
}

pub fn parse_attachment(sc: &mut Scanner, model: &mut Model) -> Result<()> {
    let mut path = None;
    let node = parse_node_with(sc, NodeFlags::ATTACHMENT, |sc, keyword, _| match keyword {
        "Path" => {
            path = sc
                .quoted_string()?
                .map(str::to_string)
                .or(Some(String::new()));
            Ok(true)
        }
        _ => Ok(false),
    })?;
    model.attachments.push(crate::model::Attachment { node, path });
    Ok(())
}

pub fn parse_event_object(sc: &mut Scanner, model: &mut Model) -> Result<()> {
    let mut event_track = Vec::new();
    let node = parse_node_with(sc, NodeFlags::EVENT_OBJECT, |sc, keyword, _| match keyword {
        "EventTrack" => {
            // EventTrack <count> { frame, frame, .. }
            let _count = sc.number()?;
            if !sc.array_into::<u32>(&mut event_track)? {
                return Err(sc.error("expected '{'"));
            }
            Ok(true)
        }
        _ => Ok(false),
    })?;
    let index = model.event_objects.len();
    model.event_objects.push(EventObject { node, event_track });
    model.nodes.push(NodeHandle {
        kind: NodeKind::EventObject,
        index,
    });
    Ok(())
}

pub fn parse_collision_shape(sc: &mut Scanner, model: &mut Model) -> Result<()> {
    let mut shape = CollisionShapeType::Box;
    let mut vertices = Vec::new();
    let mut bounds_radius = None;
    let node = parse_node_with(sc, NodeFlags::COLLISION_SHAPE, |sc, keyword, _| {
        match keyword {
            "Box" => shape = CollisionShapeType::Box,
            "Sphere" => shape = CollisionShapeType::Sphere,
            "Vertices" => vertices = parse_vector_list(sc)?,
            "BoundsRadius" => bounds_radius = Some(sc.number()? as f32),
            _ => return Ok(false),
        }
        Ok(true)
    })?;
    let index = model.collision_shapes.len();
    model.collision_shapes.push(CollisionShape {
        node,
        shape,
        vertices,
        bounds_radius,
    });
    model.nodes.push(NodeHandle {
        kind: NodeKind::CollisionShape,
        index,
    });
    Ok(())
}
