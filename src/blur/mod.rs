//! Three-pass box approximation of a Gaussian blur over RGBA8 rasters.

pub mod boxes;
pub mod gaussian;
pub mod pass;

pub use boxes::{GAUSS_PASSES, box_radii, box_sizes_for_gauss};
pub use gaussian::{gaussian_blur, gaussian_blur_into};
pub use pass::{box_blur_h, box_blur_separable, box_blur_separable_in_place, box_blur_v};
