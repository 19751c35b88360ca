use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct TextureFlags: u32 {
        const WRAP_WIDTH = 0x1;
        const WRAP_HEIGHT = 0x2;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Texture {
    pub image: String,
    pub replaceable_id: u32, // 0 = normal texture, 1 = team color, 2 = team glow, etc.
    pub flags: TextureFlags,
}

impl Default for Texture {
    fn default() -> Self {
        Self {
            image: String::new(),
            replaceable_id: 0,
            flags: TextureFlags::empty(),
        }
    }
}
