use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
#[repr(u32)]
pub enum Clipping {
    #[default]
    NoClip = 0,
    Clip = 1,
}

/// Whether a frame's box hides what lies behind it.
///
/// `Hollow` frames are transparent to input as well as to paint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
#[repr(u32)]
pub enum Opacity {
    Opaque = 0,
    #[default]
    Clear = 1,
    Hollow = 2,
}

impl Clipping {
    pub fn as_str(self) -> &'static str {
        match self {
            Clipping::NoClip => "no-clip",
            Clipping::Clip => "clip",
        }
    }
}

impl Opacity {
    pub fn as_str(self) -> &'static str {
        match self {
            Opacity::Opaque => "opaque",
            Opacity::Clear => "clear",
            Opacity::Hollow => "hollow",
        }
    }
}

impl fmt::Display for Clipping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Opacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
