use log::warn;

use crate::error::Result;
use crate::model::{Keyframe, LineType, Track};
use crate::parser::scanner::{Scalar, Scanner};

/// Reads one animated-track sub-block:
///
/// ```text
/// <count> {
///     Linear,
///     GlobalSeqId 2,
///     0: { 1, 2, 3 },
///     1000: { 4, 5, 6 },
/// }
/// ```
///
/// The leading key count is a hint only. Keys keep source order. Every key
/// vector is brought to `arity` components; Hermite and Bezier keys carry
/// InTan/OutTan vectors of the same arity.
pub fn parse_track<T: Scalar>(sc: &mut Scanner, arity: usize) -> Result<Track<T>> {
    if !sc.accept(b'{') {
        let _count = sc.number()?;
        sc.expect(b'{')?;
    }

    let mut track = Track::default();
    let mut seen_interp = false;
    while !sc.accept(b'}') {
        if let Some(keyword) = sc.keyword() {
            match keyword {
                "GlobalSeqId" => {
                    track.global_seq_id = Some(u32::from_f64(sc.number()?));
                }
                other => match LineType::from_keyword(other) {
                    Some(line_type) if !seen_interp => {
                        track.line_type = line_type;
                        seen_interp = true;
                    }
                    None if !seen_interp => {
                        warn!("unknown interpolation '{other}', assuming DontInterp");
                        seen_interp = true;
                    }
                    _ => {
                        return Err(sc.error(format!("unexpected keyword '{other}' in track")));
                    }
                },
            }
        } else {
            let number = sc.number()?;
            if sc.accept(b':') {
                seen_interp = true;
                let frame = i32::from_f64(number);
                let value = key_vector(sc, arity)?;
                let (in_tan, out_tan) = if track.line_type.has_tangents() {
                    sc.accept(b',');
                    expect_keyword(sc, "InTan")?;
                    let in_tan = key_vector(sc, arity)?;
                    sc.accept(b',');
                    expect_keyword(sc, "OutTan")?;
                    let out_tan = key_vector(sc, arity)?;
                    (in_tan, out_tan)
                } else {
                    (Vec::new(), Vec::new())
                };
                track.keyframes.push(Keyframe {
                    frame,
                    value,
                    in_tan,
                    out_tan,
                });
            } else if !seen_interp && track.keyframes.is_empty() {
                // Some exporters place the key count inside the braces.
            } else {
                return Err(sc.error("expected ':'"));
            }
        }
        sc.accept(b',');
    }
    Ok(track)
}

fn key_vector<T: Scalar>(sc: &mut Scanner, arity: usize) -> Result<Vec<T>> {
    let mut v = sc.vector()?;
    v.resize(arity, T::default());
    Ok(v)
}

fn expect_keyword(sc: &mut Scanner, expected: &str) -> Result<()> {
    match sc.keyword() {
        Some(k) if k == expected => Ok(()),
        _ => Err(sc.error(format!("expected '{expected}'"))),
    }
}

/// Source colors arrive blue-first; the scene graph stores them red-first.
pub fn reverse_color(color: &mut [f32; 3]) {
    color.swap(0, 2);
}

/// Reverses the value and tangent triples of every key of a color track.
pub fn reverse_track_colors(track: &mut Track) {
    for key in &mut track.keyframes {
        key.value.reverse();
        key.in_tan.reverse();
        key.out_tan.reverse();
    }
}
