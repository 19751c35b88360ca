use log::debug;

use crate::error::Result;
use crate::model::{Camera, Model};
use crate::parser::scanner::Scanner;
use crate::parser::track::parse_track;

pub fn parse_camera(sc: &mut Scanner, model: &mut Model) -> Result<()> {
    let mut camera = Camera::default();
    if let Some(name) = sc.quoted_string()? {
        camera.name = name.to_string();
    }
    sc.expect(b'{')?;
    while !sc.accept(b'}') {
        let keyword = sc.keyword().ok_or_else(|| sc.error("expected keyword"))?;
        match keyword {
            "Position" => {
                camera.position = sc
                    .array_fixed::<f32, 3>()?
                    .ok_or_else(|| sc.error("expected '{'"))?;
            }
            "FieldOfView" => camera.field_of_view = sc.number()? as f32,
            "NearClip" => camera.near_clip = sc.number()? as f32,
            "FarClip" => camera.far_clip = sc.number()? as f32,
            "Target" => parse_target(sc, &mut camera)?,
            "Translation" => camera.translation = Some(parse_track(sc, 3)?),
            // Roll only; a single component, unlike node rotations.
            "Rotation" => camera.rotation = Some(parse_track(sc, 1)?),
            other => {
                debug!("ignoring camera key '{other}'");
                sc.number()?;
            }
        }
        sc.accept(b',');
    }
    model.cameras.push(camera);
    Ok(())
}

/// `Target { Position { .. }, Translation <track> }`
fn parse_target(sc: &mut Scanner, camera: &mut Camera) -> Result<()> {
    sc.expect(b'{')?;
    while !sc.accept(b'}') {
        let keyword = sc.keyword().ok_or_else(|| sc.error("expected keyword"))?;
        match keyword {
            "Position" => {
                camera.target_position = sc
                    .array_fixed::<f32, 3>()?
                    .ok_or_else(|| sc.error("expected '{'"))?;
            }
            "Translation" => camera.target_translation = Some(parse_track(sc, 3)?),
            other => {
                return Err(sc.error(format!("unexpected keyword '{other}' in Target")));
            }
        }
        sc.accept(b',');
    }
    Ok(())
}
