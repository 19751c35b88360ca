use log::debug;

use crate::error::Result;
use crate::model::{Animatable, Geoset, GeosetAnim, GeosetAnimFlags, GeosetAnimInfo, Model};
use crate::parser::block::{parse_object, parse_vector_list};
use crate::parser::scanner::{Scalar, Scanner};
use crate::parser::track::{parse_track, reverse_color, reverse_track_colors};

pub fn parse_geoset(sc: &mut Scanner, model: &mut Model) -> Result<()> {
    sc.expect(b'{')?;
    let mut geoset = Geoset::default();
    while !sc.accept(b'}') {
        let keyword = sc.keyword().ok_or_else(|| sc.error("expected keyword"))?;
        match keyword {
            "Vertices" => geoset.vertices = parse_vector_list(sc)?,
            "Normals" => geoset.normals = parse_vector_list(sc)?,
            "TVertices" => geoset.tvertices.push(parse_vector_list(sc)?),
            "VertexGroup" => {
                if !sc.array_into::<u8>(&mut geoset.vertex_group)? {
                    return Err(sc.error("expected '{'"));
                }
            }
            "Faces" => parse_faces(sc, &mut geoset)?,
            "Groups" => parse_groups(sc, &mut geoset)?,
            "Anim" => {
                let mut obj = parse_object(sc)?;
                geoset.anims.push(GeosetAnimInfo {
                    alpha: obj.take_number("Alpha").unwrap_or(1.0) as f32,
                    color: obj.take_array("Color").map(|c| {
                        let mut triple = [0.0; 3];
                        triple[..c.len().min(3)].copy_from_slice(&c[..c.len().min(3)]);
                        triple
                    }),
                    minimum_extent: obj.take_extent("MinimumExtent").unwrap_or_default(),
                    maximum_extent: obj.take_extent("MaximumExtent").unwrap_or_default(),
                    bounds_radius: obj.take_number("BoundsRadius").unwrap_or(0.0) as f32,
                });
            }
            "MinimumExtent" => {
                geoset.minimum_extent = sc
                    .array_fixed::<f32, 3>()?
                    .ok_or_else(|| sc.error("expected '{'"))?;
            }
            "MaximumExtent" => {
                geoset.maximum_extent = sc
                    .array_fixed::<f32, 3>()?
                    .ok_or_else(|| sc.error("expected '{'"))?;
            }
            "BoundsRadius" => geoset.bounds_radius = sc.number()? as f32,
            "MaterialID" => geoset.material_id = u32::from_f64(sc.number()?),
            "SelectionGroup" => geoset.selection_group = u32::from_f64(sc.number()?),
            "Unselectable" => geoset.unselectable = true,
            other => {
                // Unknown geoset scalars carry no geometry; read past them.
                debug!("ignoring geoset key '{other}'");
                sc.number()?;
            }
        }
        sc.accept(b',');
    }
    model.geosets.push(geoset);
    Ok(())
}

/// `Faces <groupCount> <indexCount> { Triangles { {..}, .. }, }`
fn parse_faces(sc: &mut Scanner, geoset: &mut Geoset) -> Result<()> {
    let _group_count = sc.number()?;
    let _index_count = sc.number()?;
    sc.expect(b'{')?;
    while !sc.accept(b'}') {
        match sc.keyword() {
            Some("Triangles") => {}
            Some(other) => {
                return Err(sc.error(format!("unexpected keyword '{other}' in Faces")));
            }
            None => return Err(sc.error("expected keyword")),
        }
        sc.expect(b'{')?;
        while !sc.accept(b'}') {
            if !sc.array_into::<u16>(&mut geoset.faces)? {
                return Err(sc.error("expected array"));
            }
            sc.accept(b',');
        }
        sc.accept(b',');
    }
    Ok(())
}

/// `Groups <groupCount> <total> { Matrices { .. }, .. }`
fn parse_groups(sc: &mut Scanner, geoset: &mut Geoset) -> Result<()> {
    let _group_count = sc.number()?;
    geoset.total_groups_count = u32::from_f64(sc.number()?);
    sc.expect(b'{')?;
    while !sc.accept(b'}') {
        match sc.keyword() {
            Some("Matrices") => {}
            Some(other) => {
                return Err(sc.error(format!("unexpected keyword '{other}' in Groups")));
            }
            None => return Err(sc.error("expected keyword")),
        }
        let matrices = sc
            .array::<u32>()?
            .ok_or_else(|| sc.error("expected '{'"))?;
        geoset.groups.push(matrices);
        sc.accept(b',');
    }
    Ok(())
}

pub fn parse_geoset_anim(sc: &mut Scanner, model: &mut Model) -> Result<()> {
    sc.expect(b'{')?;
    let mut anim = GeosetAnim::default();
    while !sc.accept(b'}') {
        let keyword = sc.keyword().ok_or_else(|| sc.error("expected keyword"))?;
        match keyword {
            "GeosetId" => anim.geoset_id = i32::from_f64(sc.number()?),
            "DropShadow" => anim.flags |= GeosetAnimFlags::DROP_SHADOW,
            "static" => {
                let property = sc.keyword().ok_or_else(|| sc.error("expected keyword"))?;
                match property {
                    "Alpha" => anim.alpha = Animatable::Static(sc.number()? as f32),
                    "Color" => {
                        let mut color = sc
                            .array_fixed::<f32, 3>()?
                            .ok_or_else(|| sc.error("expected '{'"))?;
                        reverse_color(&mut color);
                        anim.color = Some(Animatable::Static(color));
                    }
                    other => {
                        return Err(sc.error(format!("unexpected static property '{other}'")));
                    }
                }
            }
            "Alpha" => anim.alpha = Animatable::Animated(parse_track(sc, 1)?),
            "Color" => {
                let mut track = parse_track(sc, 3)?;
                reverse_track_colors(&mut track);
                anim.color = Some(Animatable::Animated(track));
            }
            other => {
                debug!("ignoring geoset anim key '{other}'");
                sc.number()?;
            }
        }
        sc.accept(b',');
    }
    model.geoset_anims.push(anim);
    Ok(())
}
