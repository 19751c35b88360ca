use crate::error::Result;
use crate::model::{Animatable, Light, LightType, Model, NodeFlags, NodeHandle, NodeKind};
use crate::parser::node::parse_node_with;
use crate::parser::scanner::Scanner;
use crate::parser::track::{parse_track, reverse_color, reverse_track_colors};

pub fn parse_light(sc: &mut Scanner, model: &mut Model) -> Result<()> {
    let mut light = Light::default();
    let node = parse_node_with(sc, NodeFlags::LIGHT, |sc, keyword, _| {
        match keyword {
            "static" => {
                let property = sc.keyword().ok_or_else(|| sc.error("expected keyword"))?;
                match property {
                    "Color" => light.color = Some(Animatable::Static(static_color(sc)?)),
                    "AmbColor" => light.amb_color = Some(Animatable::Static(static_color(sc)?)),
                    "Intensity" => {
                        light.intensity = Animatable::Static(sc.number()? as f32);
                    }
                    "AmbIntensity" => {
                        light.amb_intensity = Animatable::Static(sc.number()? as f32);
                    }
                    "AttenuationStart" => {
                        light.attenuation_start = Animatable::Static(sc.number()? as f32);
                    }
                    "AttenuationEnd" => {
                        light.attenuation_end = Animatable::Static(sc.number()? as f32);
                    }
                    other => {
                        return Err(sc.error(format!("unexpected static property '{other}'")));
                    }
                }
            }
            "Color" => light.color = Some(Animatable::Animated(color_track(sc)?)),
            "AmbColor" => light.amb_color = Some(Animatable::Animated(color_track(sc)?)),
            "Intensity" => light.intensity = Animatable::Animated(parse_track(sc, 1)?),
            "AmbIntensity" => light.amb_intensity = Animatable::Animated(parse_track(sc, 1)?),
            "AttenuationStart" => {
                light.attenuation_start = Animatable::Animated(parse_track(sc, 1)?);
            }
            "AttenuationEnd" => {
                light.attenuation_end = Animatable::Animated(parse_track(sc, 1)?);
            }
            other => match LightType::from_keyword(other) {
                Some(light_type) => light.light_type = light_type,
                None => return Ok(false),
            },
        }
        Ok(true)
    })?;
    light.node = node;
    let index = model.lights.len();
    model.lights.push(light);
    model.nodes.push(NodeHandle {
        kind: NodeKind::Light,
        index,
    });
    Ok(())
}

fn static_color(sc: &mut Scanner) -> Result<[f32; 3]> {
    let mut color = sc
        .array_fixed::<f32, 3>()?
        .ok_or_else(|| sc.error("expected '{'"))?;
    reverse_color(&mut color);
    Ok(color)
}

fn color_track(sc: &mut Scanner) -> Result<crate::model::Track> {
    let mut track = parse_track(sc, 3)?;
    reverse_track_colors(&mut track);
    Ok(track)
}
