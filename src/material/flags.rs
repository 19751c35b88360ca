use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Layer shading flags. Bit values are shared with the MDX binary
    /// format; 0x4 and 0x8 are reserved.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ShadingFlags: u32 {
        const UNSHADED = 0x1;
        const SPHERE_ENV_MAP = 0x2;
        const TWO_SIDED = 0x10;
        const UNFOGGED = 0x20;
        const NO_DEPTH_TEST = 0x40;
        const NO_DEPTH_SET = 0x80;
    }
}

impl ShadingFlags {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "Unshaded" => Some(Self::UNSHADED),
            "SphereEnvMap" => Some(Self::SPHERE_ENV_MAP),
            "TwoSided" => Some(Self::TWO_SIDED),
            "Unfogged" => Some(Self::UNFOGGED),
            "NoDepthTest" => Some(Self::NO_DEPTH_TEST),
            "NoDepthSet" => Some(Self::NO_DEPTH_SET),
            _ => None,
        }
    }
}

bitflags! {
    /// Material-wide render mode flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct RenderModeFlags: u32 {
        const CONSTANT_COLOR = 0x1;
        const SORT_PRIMS_FAR_Z = 0x10;
        const FULL_RESOLUTION = 0x20;
    }
}

impl RenderModeFlags {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "ConstantColor" => Some(Self::CONSTANT_COLOR),
            "SortPrimsFarZ" => Some(Self::SORT_PRIMS_FAR_Z),
            "FullResolution" => Some(Self::FULL_RESOLUTION),
            _ => None,
        }
    }
}
