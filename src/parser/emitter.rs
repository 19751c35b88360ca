use crate::error::Result;
use crate::model::{
    Animatable, FrameFlags, Model, NodeFlags, NodeHandle, NodeKind, ParticleEmitter,
    ParticleEmitter2, ParticleEmitter2FilterMode, ParticleEmitter2Flags, ParticleEmitterFlags,
    RibbonEmitter,
};
use crate::parser::node::parse_node_with;
use crate::parser::scanner::{Scalar, Scanner};
use crate::parser::track::{parse_track, reverse_color, reverse_track_colors};

/// Legacy model-spawning emitter. LifeSpan and InitVelocity may appear both
/// at top level and inside the nested Particle block; the last write wins.
pub fn parse_particle_emitter(sc: &mut Scanner, model: &mut Model) -> Result<()> {
    let mut emitter = ParticleEmitter::default();
    let node = parse_node_with(sc, NodeFlags::PARTICLE_EMITTER, |sc, keyword, _| {
        match keyword {
            "static" => {
                let property = sc.keyword().ok_or_else(|| sc.error("expected keyword"))?;
                let value = Animatable::Static(sc.number()? as f32);
                match property {
                    "EmissionRate" => emitter.emission_rate = value,
                    "Gravity" => emitter.gravity = value,
                    "Longitude" => emitter.longitude = value,
                    "Latitude" => emitter.latitude = value,
                    "Visibility" => emitter.visibility = value,
                    "LifeSpan" => emitter.life_span = value,
                    "InitVelocity" => emitter.init_velocity = value,
                    other => {
                        return Err(sc.error(format!("unexpected static property '{other}'")));
                    }
                }
            }
            "EmissionRate" => emitter.emission_rate = Animatable::Animated(parse_track(sc, 1)?),
            "Gravity" => emitter.gravity = Animatable::Animated(parse_track(sc, 1)?),
            "Longitude" => emitter.longitude = Animatable::Animated(parse_track(sc, 1)?),
            "Latitude" => emitter.latitude = Animatable::Animated(parse_track(sc, 1)?),
            "Visibility" => emitter.visibility = Animatable::Animated(parse_track(sc, 1)?),
            "EmitterUsesMDL" => emitter.flags |= ParticleEmitterFlags::EMITTER_USES_MDL,
            "EmitterUsesTGA" => emitter.flags |= ParticleEmitterFlags::EMITTER_USES_TGA,
            "Particle" => parse_particle_body(sc, &mut emitter)?,
            _ => return Ok(false),
        }
        Ok(true)
    })?;
    emitter.node = node;
    model.particle_emitters.push(emitter);
    Ok(())
}

/// `Particle { static LifeSpan .., static InitVelocity .., Path ".." }`
fn parse_particle_body(sc: &mut Scanner, emitter: &mut ParticleEmitter) -> Result<()> {
    sc.expect(b'{')?;
    while !sc.accept(b'}') {
        let keyword = sc.keyword().ok_or_else(|| sc.error("expected keyword"))?;
        match keyword {
            "static" => {
                let property = sc.keyword().ok_or_else(|| sc.error("expected keyword"))?;
                let value = Animatable::Static(sc.number()? as f32);
                match property {
                    "LifeSpan" => emitter.life_span = value,
                    "InitVelocity" => emitter.init_velocity = value,
                    other => {
                        return Err(sc.error(format!("unexpected static property '{other}'")));
                    }
                }
            }
            "LifeSpan" => emitter.life_span = Animatable::Animated(parse_track(sc, 1)?),
            "InitVelocity" => emitter.init_velocity = Animatable::Animated(parse_track(sc, 1)?),
            "Path" => {
                emitter.path = sc
                    .quoted_string()?
                    .map(str::to_string)
                    .or(Some(String::new()));
            }
            other => {
                return Err(sc.error(format!("unexpected keyword '{other}' in Particle")));
            }
        }
        sc.accept(b',');
    }
    Ok(())
}

pub fn parse_particle_emitter2(sc: &mut Scanner, model: &mut Model) -> Result<()> {
    let mut emitter = ParticleEmitter2::default();
    let node = parse_node_with(sc, NodeFlags::PARTICLE_EMITTER, |sc, keyword, _| {
        match keyword {
            "static" => {
                let property = sc.keyword().ok_or_else(|| sc.error("expected keyword"))?;
                let value = Animatable::Static(sc.number()? as f32);
                match property {
                    "Speed" => emitter.speed = value,
                    "Variation" => emitter.variation = value,
                    "Latitude" => emitter.latitude = value,
                    "Gravity" => emitter.gravity = value,
                    "EmissionRate" => emitter.emission_rate = value,
                    "Width" => emitter.width = value,
                    "Length" => emitter.length = value,
                    other => {
                        return Err(sc.error(format!("unexpected static property '{other}'")));
                    }
                }
            }
            "Speed" => emitter.speed = Animatable::Animated(parse_track(sc, 1)?),
            "Variation" => emitter.variation = Animatable::Animated(parse_track(sc, 1)?),
            "Latitude" => emitter.latitude = Animatable::Animated(parse_track(sc, 1)?),
            "Gravity" => emitter.gravity = Animatable::Animated(parse_track(sc, 1)?),
            "EmissionRate" => emitter.emission_rate = Animatable::Animated(parse_track(sc, 1)?),
            "Width" => emitter.width = Animatable::Animated(parse_track(sc, 1)?),
            "Length" => emitter.length = Animatable::Animated(parse_track(sc, 1)?),
            "SortPrimsFarZ" => emitter.flags |= ParticleEmitter2Flags::SORT_PRIMS_FAR_Z,
            "Unshaded" => emitter.flags |= ParticleEmitter2Flags::UNSHADED,
            "LineEmitter" => emitter.flags |= ParticleEmitter2Flags::LINE_EMITTER,
            "Unfogged" => emitter.flags |= ParticleEmitter2Flags::UNFOGGED,
            "ModelSpace" => emitter.flags |= ParticleEmitter2Flags::MODEL_SPACE,
            "XYQuad" => emitter.flags |= ParticleEmitter2Flags::XY_QUAD,
            "Head" => emitter.frame_flags |= FrameFlags::HEAD,
            "Tail" => emitter.frame_flags |= FrameFlags::TAIL,
            "Both" => emitter.frame_flags |= FrameFlags::HEAD | FrameFlags::TAIL,
            "Squirt" => emitter.squirt = true,
            "SegmentColor" => parse_segment_color(sc, &mut emitter)?,
            "Alpha" => {
                emitter.alpha = sc
                    .array_fixed::<u8, 3>()?
                    .ok_or_else(|| sc.error("expected '{'"))?;
            }
            "ParticleScaling" => {
                emitter.particle_scaling = sc
                    .array_fixed::<f32, 3>()?
                    .ok_or_else(|| sc.error("expected '{'"))?;
            }
            "LifeSpanUVAnim" => {
                emitter.life_span_uv_anim = sc
                    .array_fixed::<u32, 3>()?
                    .ok_or_else(|| sc.error("expected '{'"))?;
            }
            "DecayUVAnim" => {
                emitter.decay_uv_anim = sc
                    .array_fixed::<u32, 3>()?
                    .ok_or_else(|| sc.error("expected '{'"))?;
            }
            "TailUVAnim" => {
                emitter.tail_uv_anim = sc
                    .array_fixed::<u32, 3>()?
                    .ok_or_else(|| sc.error("expected '{'"))?;
            }
            "TailDecayUVAnim" => {
                emitter.tail_decay_uv_anim = sc
                    .array_fixed::<u32, 3>()?
                    .ok_or_else(|| sc.error("expected '{'"))?;
            }
            other => match ParticleEmitter2FilterMode::from_keyword(other) {
                Some(mode) => emitter.filter_mode = mode,
                // Rows, Columns, Time, LifeSpan and friends stay loose.
                None => return Ok(false),
            },
        }
        Ok(true)
    })?;
    emitter.node = node;
    let index = model.particle_emitters2.len();
    model.particle_emitters2.push(emitter);
    model.nodes.push(NodeHandle {
        kind: NodeKind::ParticleEmitter2,
        index,
    });
    Ok(())
}

/// `SegmentColor { Color { b, g, r }, .. }` — triples land in RGB order.
fn parse_segment_color(sc: &mut Scanner, emitter: &mut ParticleEmitter2) -> Result<()> {
    sc.expect(b'{')?;
    while !sc.accept(b'}') {
        match sc.keyword() {
            Some("Color") => {
                let mut color = sc
                    .array_fixed::<f32, 3>()?
                    .ok_or_else(|| sc.error("expected '{'"))?;
                reverse_color(&mut color);
                emitter.segment_color.push(color);
            }
            Some(other) => {
                return Err(sc.error(format!("unexpected keyword '{other}' in SegmentColor")));
            }
            None => return Err(sc.error("expected keyword")),
        }
        sc.accept(b',');
    }
    Ok(())
}

pub fn parse_ribbon_emitter(sc: &mut Scanner, model: &mut Model) -> Result<()> {
    let mut emitter = RibbonEmitter::default();
    let node = parse_node_with(sc, NodeFlags::RIBBON_EMITTER, |sc, keyword, _| {
        match keyword {
            "static" => {
                let property = sc.keyword().ok_or_else(|| sc.error("expected keyword"))?;
                match property {
                    "HeightAbove" => {
                        emitter.height_above = Animatable::Static(sc.number()? as f32);
                    }
                    "HeightBelow" => {
                        emitter.height_below = Animatable::Static(sc.number()? as f32);
                    }
                    "Alpha" => emitter.alpha = Animatable::Static(sc.number()? as f32),
                    "TextureSlot" => {
                        emitter.texture_slot = Animatable::Static(u32::from_f64(sc.number()?));
                    }
                    "Color" => {
                        let mut color = sc
                            .array_fixed::<f32, 3>()?
                            .ok_or_else(|| sc.error("expected '{'"))?;
                        reverse_color(&mut color);
                        emitter.color = Animatable::Static(color);
                    }
                    other => {
                        return Err(sc.error(format!("unexpected static property '{other}'")));
                    }
                }
            }
            "HeightAbove" => emitter.height_above = Animatable::Animated(parse_track(sc, 1)?),
            "HeightBelow" => emitter.height_below = Animatable::Animated(parse_track(sc, 1)?),
            "Alpha" => emitter.alpha = Animatable::Animated(parse_track(sc, 1)?),
            "TextureSlot" => {
                emitter.texture_slot = Animatable::Animated(parse_track::<i32>(sc, 1)?);
            }
            "Color" => {
                let mut track = parse_track(sc, 3)?;
                reverse_track_colors(&mut track);
                emitter.color = Animatable::Animated(track);
            }
            "LifeSpan" => emitter.life_span = sc.number()? as f32,
            "EmissionRate" => emitter.emission_rate = sc.number()? as f32,
            "Rows" => emitter.rows = u32::from_f64(sc.number()?),
            "Columns" => emitter.columns = u32::from_f64(sc.number()?),
            "MaterialID" => emitter.material_id = u32::from_f64(sc.number()?),
            "Gravity" => emitter.gravity = sc.number()? as f32,
            _ => return Ok(false),
        }
        Ok(true)
    })?;
    emitter.node = node;
    let index = model.ribbon_emitters.len();
    model.ribbon_emitters.push(emitter);
    model.nodes.push(NodeHandle {
        kind: NodeKind::RibbonEmitter,
        index,
    });
    Ok(())
}
