use log::warn;

use crate::error::Result;
use crate::material::{FilterMode, Layer, Material, RenderModeFlags, ShadingFlags};
use crate::model::{Animatable, Model, Sequence, TVertexAnim, Texture, TextureFlags};
use crate::parser::block::{parse_object, parse_vector_list};
use crate::parser::scanner::{Scalar, Scanner};
use crate::parser::track::parse_track;

/// Consumes the optional element-count header list blocks carry before
/// their opening brace. The count is a hint only and never trusted.
fn accept_count(sc: &mut Scanner) -> Result<()> {
    if matches!(sc.peek(), Some(c) if c == b'-' || c.is_ascii_digit()) {
        sc.number()?;
    }
    Ok(())
}

/// Some exporters put the element count inside the braces instead; skip it
/// wherever it lands.
fn skip_stray_count(sc: &mut Scanner) -> Result<bool> {
    if matches!(sc.peek(), Some(c) if c == b'-' || c.is_ascii_digit()) {
        sc.number()?;
        sc.accept(b',');
        Ok(true)
    } else {
        Ok(false)
    }
}

pub fn parse_version(sc: &mut Scanner, model: &mut Model) -> Result<()> {
    let mut obj = parse_object(sc)?;
    if let Some(version) = obj.take_number("FormatVersion") {
        model.version = u32::from_f64(version);
    }
    Ok(())
}

pub fn parse_model_info(sc: &mut Scanner, model: &mut Model) -> Result<()> {
    let mut obj = parse_object(sc)?;
    let info = &mut model.info;
    if let Some(name) = obj.name.take() {
        info.name = name;
    }
    if let Some(blend_time) = obj.take_number("BlendTime") {
        info.blend_time = u32::from_f64(blend_time);
    }
    if let Some(extent) = obj.take_extent("MinimumExtent") {
        info.minimum_extent = extent;
    }
    if let Some(extent) = obj.take_extent("MaximumExtent") {
        info.maximum_extent = extent;
    }
    if let Some(radius) = obj.take_number("BoundsRadius") {
        info.bounds_radius = radius as f32;
    }
    // Header scalars like NumGeosets are informational; keep them around.
    for (key, value) in obj.props {
        if let crate::parser::block::Value::Number(n) = value {
            info.extras.insert(key, n);
        }
    }
    Ok(())
}

pub fn parse_sequences(sc: &mut Scanner, model: &mut Model) -> Result<()> {
    accept_count(sc)?;
    sc.expect(b'{')?;
    while !sc.accept(b'}') {
        if skip_stray_count(sc)? {
            continue;
        }
        match sc.keyword() {
            Some("Anim") => {}
            Some(other) => {
                return Err(sc.error(format!("unexpected keyword '{other}' in Sequences")));
            }
            None => return Err(sc.error("expected keyword")),
        }
        let mut obj = parse_object(sc)?;
        model.sequences.push(Sequence {
            name: obj.name.take().unwrap_or_default(),
            interval: obj.take_interval("Interval").unwrap_or([0, 0]),
            minimum_extent: obj.take_extent("MinimumExtent").unwrap_or_default(),
            maximum_extent: obj.take_extent("MaximumExtent").unwrap_or_default(),
            bounds_radius: obj.take_number("BoundsRadius").unwrap_or(0.0) as f32,
            move_speed: obj.take_number("MoveSpeed").map(|v| v as f32),
            rarity: obj.take_number("Rarity").map(|v| v as f32),
            non_looping: obj.take_flag("NonLooping"),
        });
        sc.accept(b',');
    }
    Ok(())
}

pub fn parse_global_sequences(sc: &mut Scanner, model: &mut Model) -> Result<()> {
    accept_count(sc)?;
    sc.expect(b'{')?;
    while !sc.accept(b'}') {
        if skip_stray_count(sc)? {
            continue;
        }
        match sc.keyword() {
            Some("Duration") => {
                model.global_sequences.push(u32::from_f64(sc.number()?));
            }
            Some(other) => {
                return Err(sc.error(format!("unexpected keyword '{other}' in GlobalSequences")));
            }
            None => return Err(sc.error("expected keyword")),
        }
        sc.accept(b',');
    }
    Ok(())
}

pub fn parse_textures(sc: &mut Scanner, model: &mut Model) -> Result<()> {
    accept_count(sc)?;
    sc.expect(b'{')?;
    while !sc.accept(b'}') {
        if skip_stray_count(sc)? {
            continue;
        }
        match sc.keyword() {
            Some("Bitmap") => {}
            Some(other) => {
                return Err(sc.error(format!("unexpected keyword '{other}' in Textures")));
            }
            None => return Err(sc.error("expected keyword")),
        }
        let mut obj = parse_object(sc)?;
        let mut texture = Texture {
            image: obj.take_string("Image").unwrap_or_default(),
            replaceable_id: obj
                .take_number("ReplaceableId")
                .map(u32::from_f64)
                .unwrap_or(0),
            flags: TextureFlags::empty(),
        };
        if obj.take_flag("WrapWidth") {
            texture.flags |= TextureFlags::WRAP_WIDTH;
        }
        if obj.take_flag("WrapHeight") {
            texture.flags |= TextureFlags::WRAP_HEIGHT;
        }
        model.textures.push(texture);
        sc.accept(b',');
    }
    Ok(())
}

pub fn parse_materials(sc: &mut Scanner, model: &mut Model) -> Result<()> {
    accept_count(sc)?;
    sc.expect(b'{')?;
    while !sc.accept(b'}') {
        if skip_stray_count(sc)? {
            continue;
        }
        match sc.keyword() {
            Some("Material") => {}
            Some(other) => {
                return Err(sc.error(format!("unexpected keyword '{other}' in Materials")));
            }
            None => return Err(sc.error("expected keyword")),
        }
        sc.expect(b'{')?;
        let mut material = Material::default();
        while !sc.accept(b'}') {
            let keyword = sc.keyword().ok_or_else(|| sc.error("expected keyword"))?;
            match keyword {
                "Layer" => material.layers.push(parse_layer(sc)?),
                "PriorityPlane" => {
                    material.priority_plane = Some(i32::from_f64(sc.number()?));
                }
                other => match RenderModeFlags::from_keyword(other) {
                    Some(flag) => material.render_mode |= flag,
                    None => {
                        return Err(sc.error(format!("unexpected keyword '{other}' in Material")));
                    }
                },
            }
            sc.accept(b',');
        }
        model.materials.push(material);
        sc.accept(b',');
    }
    Ok(())
}

fn parse_layer(sc: &mut Scanner) -> Result<Layer> {
    sc.expect(b'{')?;
    let mut layer = Layer::default();
    while !sc.accept(b'}') {
        let keyword = sc.keyword().ok_or_else(|| sc.error("expected keyword"))?;
        match keyword {
            "FilterMode" => {
                let word = sc.keyword().ok_or_else(|| sc.error("expected keyword"))?;
                match FilterMode::from_keyword(word) {
                    Some(mode) => layer.filter_mode = mode,
                    None => warn!("unknown filter mode '{word}', assuming None"),
                }
            }
            "static" => {
                let property = sc.keyword().ok_or_else(|| sc.error("expected keyword"))?;
                match property {
                    "TextureID" => {
                        layer.texture_id = Animatable::Static(u32::from_f64(sc.number()?));
                    }
                    "Alpha" => {
                        layer.alpha = Animatable::Static(sc.number()? as f32);
                    }
                    other => {
                        return Err(sc.error(format!("unexpected static property '{other}'")));
                    }
                }
            }
            "TextureID" => {
                layer.texture_id = Animatable::Animated(parse_track::<i32>(sc, 1)?);
            }
            "Alpha" => {
                layer.alpha = Animatable::Animated(parse_track(sc, 1)?);
            }
            "CoordId" => layer.coord_id = u32::from_f64(sc.number()?),
            "TVertexAnimId" => layer.tvertex_anim_id = i32::from_f64(sc.number()?),
            other => match ShadingFlags::from_keyword(other) {
                Some(flag) => layer.shading |= flag,
                None => {
                    return Err(sc.error(format!("unexpected keyword '{other}' in Layer")));
                }
            },
        }
        sc.accept(b',');
    }
    Ok(layer)
}

pub fn parse_texture_anims(sc: &mut Scanner, model: &mut Model) -> Result<()> {
    accept_count(sc)?;
    sc.expect(b'{')?;
    while !sc.accept(b'}') {
        if skip_stray_count(sc)? {
            continue;
        }
        match sc.keyword() {
            Some("TVertexAnim") => {}
            Some(other) => {
                return Err(sc.error(format!("unexpected keyword '{other}' in TextureAnims")));
            }
            None => return Err(sc.error("expected keyword")),
        }
        sc.expect(b'{')?;
        let mut anim = TVertexAnim::default();
        while !sc.accept(b'}') {
            let keyword = sc.keyword().ok_or_else(|| sc.error("expected keyword"))?;
            match keyword {
                "Translation" => anim.translation = Some(parse_track(sc, 3)?),
                "Rotation" => anim.rotation = Some(parse_track(sc, 4)?),
                "Scaling" => anim.scaling = Some(parse_track(sc, 3)?),
                other => {
                    return Err(sc.error(format!("unexpected keyword '{other}' in TVertexAnim")));
                }
            }
            sc.accept(b',');
        }
        model.texture_anims.push(anim);
        sc.accept(b',');
    }
    Ok(())
}

pub fn parse_pivot_points(sc: &mut Scanner, model: &mut Model) -> Result<()> {
    let flat: Vec<f32> = parse_vector_list(sc)?;
    model.pivot_points = flat
        .chunks(3)
        .map(|chunk| {
            let mut point = [0.0; 3];
            point[..chunk.len()].copy_from_slice(chunk);
            point
        })
        .collect();
    Ok(())
}
