use log::{debug, warn};

use crate::error::Result;
use crate::model::Model;
use crate::parser::scanner::Scanner;

/// Parses MDL source text into a scene graph.
///
/// Unknown top-level blocks are skipped; any syntax error inside a
/// recognized block aborts the parse.
pub fn parse(source: &str) -> Result<Model> {
    let mut sc = Scanner::new(source);
    let mut model = Model::default();

    loop {
        let offset = sc.offset();
        let keyword = match sc.keyword() {
            Some(keyword) => keyword,
            None => break,
        };
        debug!("block '{keyword}' at byte {offset}");
        match keyword {
            "Version" => crate::parser::parser::parse_version(&mut sc, &mut model)?,
            "Model" => crate::parser::parser::parse_model_info(&mut sc, &mut model)?,
            "Sequences" => crate::parser::parser::parse_sequences(&mut sc, &mut model)?,
            "GlobalSequences" => {
                crate::parser::parser::parse_global_sequences(&mut sc, &mut model)?;
            }
            "Textures" => crate::parser::parser::parse_textures(&mut sc, &mut model)?,
            "Materials" => crate::parser::parser::parse_materials(&mut sc, &mut model)?,
            "TextureAnims" => crate::parser::parser::parse_texture_anims(&mut sc, &mut model)?,
            "Geoset" => crate::parser::geoset::parse_geoset(&mut sc, &mut model)?,
            "GeosetAnim" => crate::parser::geoset::parse_geoset_anim(&mut sc, &mut model)?,
            "Bone" => crate::parser::node::parse_bone(&mut sc, &mut model)?,
            "Helper" => crate::parser::node::parse_helper(&mut sc, &mut model)?,
            "Attachment" => crate::parser::node::parse_attachment(&mut sc, &mut model)?,
            "PivotPoints" => crate::parser::parser::parse_pivot_points(&mut sc, &mut model)?,
            "EventObject" => crate::parser::node::parse_event_object(&mut sc, &mut model)?,
            "CollisionShape" => {
                crate::parser::node::parse_collision_shape(&mut sc, &mut model)?;
            }
            "ParticleEmitter" => {
                crate::parser::emitter::parse_particle_emitter(&mut sc, &mut model)?;
            }
            "ParticleEmitter2" => {
                crate::parser::emitter::parse_particle_emitter2(&mut sc, &mut model)?;
            }
            "Camera" => crate::parser::camera::parse_camera(&mut sc, &mut model)?,
            "Light" => crate::parser::light::parse_light(&mut sc, &mut model)?,
            "RibbonEmitter" => {
                crate::parser::emitter::parse_ribbon_emitter(&mut sc, &mut model)?;
            }
            other => {
                warn!("skipping unknown block '{other}'");
                skip_block(&mut sc)?;
            }
        }
    }

    assign_pivots(&mut model);
    Ok(model)
}

/// Skips a balanced `{ .. }` region, tracking nested braces with a depth
/// counter. Prefix tokens before the opening brace are discarded; quoted
/// strings and comments inside the region cannot unbalance it.
fn skip_block(sc: &mut Scanner) -> Result<()> {
    // Discard prefix tokens up to the opening brace.
    loop {
        match sc.peek() {
            Some(b'{') => break,
            Some(b'"') => {
                sc.quoted_string()?;
            }
            Some(_) => sc.bump(),
            None => return Err(sc.error("expected '{'")),
        }
    }
    let mut depth = 0usize;
    loop {
        match sc.peek() {
            Some(b'{') => {
                sc.accept(b'{');
                depth += 1;
            }
            Some(b'}') => {
                sc.accept(b'}');
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            Some(b'"') => {
                sc.quoted_string()?;
            }
            Some(_) => sc.bump(),
            None => return Err(sc.error("expected '}'")),
        }
    }
}

/// Hands each flat-list node its positional pivot point. Nodes beyond the
/// pivot list simply keep none.
fn assign_pivots(model: &mut Model) {
    for i in 0..model.nodes.len() {
        let handle = model.nodes[i];
        if let Some(pivot) = model.pivot_points.get(i).copied() {
            if let Some(node) = model.node_mut(handle) {
                node.pivot_point = Some(pivot);
            }
        }
    }
}
