//! Fast approximate Gaussian blur for RGBA8 rasters.
//!
//! A Gaussian of standard deviation σ is approximated by three box blurs whose widths are
//! solved from σ. Each box blur is separable and uses a running window sum, so the cost per
//! pixel is constant regardless of σ.
//!
//! - [`gaussian`] blurs an [`image::DynamicImage`] under a [`BlurMode`]
//! - [`gaussian_blur`] / [`gaussian_blur_into`] work on strided [`RgbaRaster`] views
#![forbid(unsafe_code)]

mod foundation;

pub mod blur;
pub mod config;
pub mod ops;
pub mod raster;

pub use crate::blur::{gaussian_blur, gaussian_blur_into};
pub use crate::config::BlurOpts;
pub use crate::foundation::error::{BlurError, BlurResult};
pub use crate::ops::{BlurMode, Blurred, blur_rgba_image, gaussian};
pub use crate::raster::{CHANNELS, RgbaRaster};
