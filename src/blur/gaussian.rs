use std::ops::{Deref, DerefMut};

use crate::{
    blur::{
        boxes::box_radii,
        pass::{box_blur_separable, box_blur_separable_in_place},
    },
    foundation::error::{BlurError, BlurResult},
    raster::RgbaRaster,
};

/// Blur `buf` in place with an approximate Gaussian of standard deviation `sigma` pixels.
///
/// Three separable box passes share one scratch raster owned by this call. Cost is linear in
/// the pixel count whatever `sigma` is.
#[tracing::instrument(skip(buf), fields(width = buf.width(), height = buf.height()))]
pub fn gaussian_blur<C: DerefMut<Target = [u8]>>(buf: &mut RgbaRaster<C>, sigma: u32) {
    if buf.is_empty() {
        return;
    }
    let radii = box_radii(sigma);
    tracing::debug!(?radii, "solved box radii");

    let mut scratch = RgbaRaster::new(buf.width(), buf.height());
    for r in radii {
        box_blur_separable_in_place(buf, &mut scratch, r);
    }
}

/// Blur `src` into `dst`, leaving `src` untouched.
///
/// Only the first box pass reads `src`; the remaining two chain in place on `dst`.
#[tracing::instrument(skip(dst, src), fields(width = src.width(), height = src.height()))]
pub fn gaussian_blur_into<D, S>(
    dst: &mut RgbaRaster<D>,
    src: &RgbaRaster<S>,
    sigma: u32,
) -> BlurResult<()>
where
    D: DerefMut<Target = [u8]>,
    S: Deref<Target = [u8]>,
{
    if dst.dimensions() != src.dimensions() {
        return Err(BlurError::geometry(format!(
            "destination is {}x{} but source is {}x{}",
            dst.width(),
            dst.height(),
            src.width(),
            src.height()
        )));
    }
    if src.is_empty() {
        return Ok(());
    }
    let [r0, r1, r2] = box_radii(sigma);
    tracing::debug!(radii = ?[r0, r1, r2], "solved box radii");

    let mut scratch = RgbaRaster::new(src.width(), src.height());
    box_blur_separable(dst, &mut scratch, src, r0);
    box_blur_separable_in_place(dst, &mut scratch, r1);
    box_blur_separable_in_place(dst, &mut scratch, r2);
    Ok(())
}
