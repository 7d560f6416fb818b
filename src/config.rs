use std::io::Read;

use image::DynamicImage;

use crate::{
    foundation::error::{BlurError, BlurResult},
    ops::{BlurMode, Blurred, gaussian},
};

/// Serializable blur settings.
///
/// ```json
/// { "radius": 5, "mode": "reuse-source" }
/// ```
///
/// Missing fields take their [`Default`] values; unknown fields are rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlurOpts {
    /// Gaussian standard deviation in pixels.
    pub radius: u32,
    pub mode: BlurMode,
}

impl BlurOpts {
    pub fn from_json_str(s: &str) -> BlurResult<Self> {
        serde_json::from_str(s).map_err(|e| BlurError::config(format!("parse blur opts: {e}")))
    }

    pub fn from_json_reader<R: Read>(r: R) -> BlurResult<Self> {
        serde_json::from_reader(r).map_err(|e| BlurError::config(format!("parse blur opts: {e}")))
    }

    pub fn apply<'a>(&self, image: &'a mut DynamicImage) -> Blurred<'a> {
        gaussian(image, self.radius, self.mode)
    }
}
