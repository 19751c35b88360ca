use serde::{Deserialize, Serialize};

/// Interpolation mode of an animated track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineType {
    DontInterp = 0,
    Linear = 1,
    Hermite = 2,
    Bezier = 3,
}

impl LineType {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "DontInterp" => Some(Self::DontInterp),
            "Linear" => Some(Self::Linear),
            "Hermite" => Some(Self::Hermite),
            "Bezier" => Some(Self::Bezier),
            _ => None,
        }
    }

    /// Hermite and Bezier keys carry InTan/OutTan vectors.
    pub fn has_tangents(&self) -> bool {
        matches!(self, Self::Hermite | Self::Bezier)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::DontInterp => "DontInterp",
            Self::Linear => "Linear",
            Self::Hermite => "Hermite",
            Self::Bezier => "Bezier",
        }
    }
}

/// One key of an animated track. `value` has the arity of the channel
/// (1 scalar, 3 vector, 4 quaternion). `in_tan`/`out_tan` are empty unless
/// the track interpolates with Hermite or Bezier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframe<T = f32> {
    pub frame: i32,
    pub value: Vec<T>,
    pub in_tan: Vec<T>,
    pub out_tan: Vec<T>,
}

/// An animated track on one channel. Keys are stored in source order; no
/// sorting is performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track<T = f32> {
    pub line_type: LineType,
    pub global_seq_id: Option<u32>,
    pub keyframes: Vec<Keyframe<T>>,
}

impl<T> Default for Track<T> {
    fn default() -> Self {
        Self {
            line_type: LineType::DontInterp,
            global_seq_id: None,
            keyframes: Vec::new(),
        }
    }
}

/// A property that is either a fixed value or an animated track.
///
/// `T` is the static value, `K` the key scalar of the animated form.
/// Integer channels (TextureID, TextureSlot) use `Animatable<u32, i32>`;
/// everything else animates over `f32`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Animatable<T, K = f32> {
    Static(T),
    Animated(Track<K>),
}

impl<T, K> Animatable<T, K> {
    pub fn is_animated(&self) -> bool {
        matches!(self, Self::Animated(_))
    }

    pub fn as_static(&self) -> Option<&T> {
        match self {
            Self::Static(v) => Some(v),
            Self::Animated(_) => None,
        }
    }

    pub fn as_track(&self) -> Option<&Track<K>> {
        match self {
            Self::Static(_) => None,
            Self::Animated(t) => Some(t),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    pub name: String,
    /// Start and end frame on the global timeline.
    pub interval: [u32; 2],
    pub minimum_extent: [f32; 3],
    pub maximum_extent: [f32; 3],
    pub bounds_radius: f32,
    pub move_speed: Option<f32>,
    pub rarity: Option<f32>,
    pub non_looping: bool,
}

impl Default for Sequence {
    fn default() -> Self {
        Self {
            name: String::new(),
            interval: [0, 0],
            minimum_extent: [0.0; 3],
            maximum_extent: [0.0; 3],
            bounds_radius: 0.0,
            move_speed: None,
            rarity: None,
            non_looping: false,
        }
    }
}

/// Texture-coordinate animation (TVertexAnim block).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TVertexAnim {
    pub translation: Option<Track>,
    pub rotation: Option<Track>,
    pub scaling: Option<Track>,
}
