use serde::{Deserialize, Serialize};

/// Filter mode for material layers
/// Mapping shared with the MDX binary format:
/// 0 = None
/// 1 = Transparent
/// 2 = Blend
/// 3 = Additive
/// 4 = AddAlpha
/// 5 = Modulate
/// 6 = Modulate2x
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterMode {
    None = 0,
    Transparent = 1,
    Blend = 2,
    Additive = 3,
    AddAlpha = 4,
    Modulate = 5,
    Modulate2x = 6,
}

impl FilterMode {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "None" => Some(Self::None),
            "Transparent" => Some(Self::Transparent),
            "Blend" => Some(Self::Blend),
            "Additive" => Some(Self::Additive),
            "AddAlpha" => Some(Self::AddAlpha),
            "Modulate" => Some(Self::Modulate),
            "Modulate2x" => Some(Self::Modulate2x),
            _ => None,
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Transparent => "Transparent",
            Self::Blend => "Blend",
            Self::Additive => "Additive",
            Self::AddAlpha => "AddAlpha",
            Self::Modulate => "Modulate",
            Self::Modulate2x => "Modulate2x",
        }
    }
}
