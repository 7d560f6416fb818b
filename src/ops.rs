//! Caller-facing blur entry point and the buffer acquisition policy.

use std::ops::Deref;

use image::{DynamicImage, RgbaImage};

use crate::{blur::gaussian_blur, raster::RgbaRaster};

/// Whether a blur may write into the caller's image.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    clap::ValueEnum,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum BlurMode {
    /// Always blur a fresh copy; the caller's image is left byte-for-byte unchanged.
    #[default]
    PreserveSource,
    /// Blur the caller's image in place when it is already RGBA8, otherwise fall back to a copy.
    ReuseSource,
}

/// Result of [`gaussian`]: either the caller's own buffer or a newly allocated one.
#[derive(Debug)]
pub enum Blurred<'a> {
    Reused(&'a mut RgbaImage),
    Fresh(RgbaImage),
}

impl Blurred<'_> {
    /// `true` when the caller's image was mutated.
    pub fn is_reused(&self) -> bool {
        matches!(self, Blurred::Reused(_))
    }

    pub fn into_owned(self) -> RgbaImage {
        match self {
            Blurred::Reused(img) => img.clone(),
            Blurred::Fresh(img) => img,
        }
    }
}

impl Deref for Blurred<'_> {
    type Target = RgbaImage;

    fn deref(&self) -> &RgbaImage {
        match self {
            Blurred::Reused(img) => &**img,
            Blurred::Fresh(img) => img,
        }
    }
}

/// Approximate Gaussian blur of `image` with standard deviation `radius` pixels.
///
/// The computational cost is independent of `radius`. See [`BlurMode`] for whether `image` is
/// modified.
#[tracing::instrument(skip(image), fields(color = ?image.color()))]
pub fn gaussian(image: &mut DynamicImage, radius: u32, mode: BlurMode) -> Blurred<'_> {
    if mode == BlurMode::ReuseSource && matches!(image, DynamicImage::ImageRgba8(_)) {
        let DynamicImage::ImageRgba8(rgba) = image else {
            unreachable!()
        };
        tracing::debug!("blurring caller buffer in place");
        blur_rgba_image(rgba, radius);
        return Blurred::Reused(rgba);
    }

    tracing::debug!("blurring into a fresh rgba8 buffer");
    let mut out = image.to_rgba8();
    blur_rgba_image(&mut out, radius);
    Blurred::Fresh(out)
}

/// Blur an [`RgbaImage`] in place.
pub fn blur_rgba_image(img: &mut RgbaImage, radius: u32) {
    let mut view = RgbaRaster::from_rgba_image_mut(img);
    gaussian_blur(&mut view, radius);
}
