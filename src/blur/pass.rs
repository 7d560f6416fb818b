use std::ops::{Deref, DerefMut};

use crate::raster::{CHANNELS, RgbaRaster};

/// A strided run of pixels inside a byte container: one row or one column.
#[derive(Clone, Copy, Debug)]
struct Lane {
    start: usize,
    step: usize,
}

impl Lane {
    #[inline]
    fn at(self, i: usize) -> usize {
        self.start + i * self.step
    }
}

#[inline]
fn texel(buf: &[u8], at: usize) -> [u64; CHANNELS] {
    [
        u64::from(buf[at]),
        u64::from(buf[at + 1]),
        u64::from(buf[at + 2]),
        u64::from(buf[at + 3]),
    ]
}

/// Box-average `len` pixels of `src` along `s` into `dst` along `d`.
///
/// The window is `2 * radius + 1` pixels wide and edge-clamped: positions before the lane repeat
/// its first pixel, positions past the end repeat its last one. The running sum is updated by one
/// incoming and one outgoing pixel per output, so the cost does not depend on `radius`.
fn blur_lane(dst: &mut [u8], d: Lane, src: &[u8], s: Lane, len: usize, radius: usize) {
    let last = len - 1;
    let r = radius as u64;
    let div = 2 * r + 1;
    let first_px = texel(src, s.at(0));
    let last_px = texel(src, s.at(last));

    // Seed with the window centred on x = -1: r + 1 copies of the first pixel, then the
    // first r real pixels (any of those past the end are the last pixel).
    let mut val = first_px.map(|v| (r + 1) * v);
    let seeded = radius.min(len);
    for i in 0..seeded {
        let px = texel(src, s.at(i));
        for c in 0..CHANNELS {
            val[c] += px[c];
        }
    }
    let overhang = (radius - seeded) as u64;
    for c in 0..CHANNELS {
        val[c] += overhang * last_px[c];
    }

    // Left margin (x <= r) drops the clamped first pixel, the right margin (x >= len - r)
    // adds the clamped last pixel; the interior slides over real pixels on both ends.
    for x in 0..len {
        let incoming = texel(src, s.at((x + radius).min(last)));
        let outgoing = if x > radius {
            texel(src, s.at(x - radius - 1))
        } else {
            first_px
        };
        let out = d.at(x);
        for c in 0..CHANNELS {
            val[c] = val[c] + incoming[c] - outgoing[c];
            // Truncating division, not rounding: output must stay bit-compatible.
            dst[out + c] = (val[c] / div) as u8;
        }
    }
}

/// Horizontal box pass: every row of `src` is averaged with radius `radius` into `dst`.
///
/// # Panics
///
/// If `dst` and `src` have different dimensions.
pub fn box_blur_h<D, S>(dst: &mut RgbaRaster<D>, src: &RgbaRaster<S>, radius: usize)
where
    D: DerefMut<Target = [u8]>,
    S: Deref<Target = [u8]>,
{
    assert_eq!(
        dst.dimensions(),
        src.dimensions(),
        "box_blur_h needs equally sized rasters"
    );
    if src.is_empty() {
        return;
    }
    let w = src.width() as usize;
    for y in 0..src.height() {
        let d = Lane {
            start: dst.pix_offset(0, y),
            step: CHANNELS,
        };
        let s = Lane {
            start: src.pix_offset(0, y),
            step: CHANNELS,
        };
        blur_lane(dst.bytes_mut(), d, src.as_bytes(), s, w, radius);
    }
}

/// Vertical box pass: every column of `src` is averaged with radius `radius` into `dst`,
/// stepping by each raster's row stride.
///
/// # Panics
///
/// If `dst` and `src` have different dimensions.
pub fn box_blur_v<D, S>(dst: &mut RgbaRaster<D>, src: &RgbaRaster<S>, radius: usize)
where
    D: DerefMut<Target = [u8]>,
    S: Deref<Target = [u8]>,
{
    assert_eq!(
        dst.dimensions(),
        src.dimensions(),
        "box_blur_v needs equally sized rasters"
    );
    if src.is_empty() {
        return;
    }
    let h = src.height() as usize;
    for x in 0..src.width() {
        let d = Lane {
            start: dst.pix_offset(x, 0),
            step: dst.stride(),
        };
        let s = Lane {
            start: src.pix_offset(x, 0),
            step: src.stride(),
        };
        blur_lane(dst.bytes_mut(), d, src.as_bytes(), s, h, radius);
    }
}

/// One separable box pass: `src` → `scratch` horizontally, then `scratch` → `dst` vertically.
///
/// The horizontal result is complete before the first vertical read.
pub fn box_blur_separable<D, T, S>(
    dst: &mut RgbaRaster<D>,
    scratch: &mut RgbaRaster<T>,
    src: &RgbaRaster<S>,
    radius: usize,
) where
    D: DerefMut<Target = [u8]>,
    T: DerefMut<Target = [u8]>,
    S: Deref<Target = [u8]>,
{
    box_blur_h(scratch, src, radius);
    box_blur_v(dst, scratch, radius);
}

/// [`box_blur_separable`] with `buf` as both source and destination.
///
/// Sound because `buf` is only read by the horizontal half and only written by the vertical
/// half, with `scratch` in between.
pub fn box_blur_separable_in_place<C, T>(
    buf: &mut RgbaRaster<C>,
    scratch: &mut RgbaRaster<T>,
    radius: usize,
) where
    C: DerefMut<Target = [u8]>,
    T: DerefMut<Target = [u8]>,
{
    box_blur_h(scratch, buf, radius);
    box_blur_v(buf, scratch, radius);
}
