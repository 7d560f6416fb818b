use std::ops::{Deref, DerefMut};

use image::RgbaImage;

use crate::foundation::error::{BlurError, BlurResult};

/// Interleaved channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// A 2-D grid of interleaved RGBA8 pixels laid over a flat byte container.
///
/// Pixel `(x, y)` channel `c` lives at `offset + y * stride + x * 4 + c`. Geometry is validated
/// once at construction and never changes afterwards, so the blur passes can index the
/// container without further checks.
///
/// `C` is usually `Vec<u8>` (an owned raster) or `&mut [u8]` (a view over someone else's pixels,
/// e.g. an [`RgbaImage`] blurred in place).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaRaster<C = Vec<u8>> {
    width: u32,
    height: u32,
    stride: usize,
    offset: usize,
    data: C,
}

fn packed_len(width: u32, height: u32) -> usize {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(CHANNELS))
        .unwrap_or_else(|| panic!("raster {width}x{height} size overflows usize"))
}

impl RgbaRaster<Vec<u8>> {
    /// Allocate a tightly packed, zero-filled raster.
    ///
    /// # Panics
    ///
    /// If `width * height * 4` overflows `usize`.
    pub fn new(width: u32, height: u32) -> Self {
        let stride = width as usize * CHANNELS;
        Self {
            width,
            height,
            stride,
            offset: 0,
            data: vec![0u8; packed_len(width, height)],
        }
    }

    /// Allocate a tightly packed raster filled with one colour.
    ///
    /// # Panics
    ///
    /// If `width * height * 4` overflows `usize`.
    pub fn from_pixel(width: u32, height: u32, px: [u8; CHANNELS]) -> Self {
        let count = packed_len(width, height) / CHANNELS;
        Self {
            width,
            height,
            stride: width as usize * CHANNELS,
            offset: 0,
            data: px.repeat(count),
        }
    }

    pub fn from_rgba_image(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            stride: width as usize * CHANNELS,
            offset: 0,
            data: img.into_raw(),
        }
    }

    /// Convert back into an [`RgbaImage`], repacking rows if the raster is a strided view.
    pub fn into_rgba_image(self) -> BlurResult<RgbaImage> {
        let packed = if self.is_packed() {
            let mut data = self.data;
            data.truncate(self.stride * self.height as usize);
            data
        } else {
            self.to_packed().data
        };
        RgbaImage::from_raw(self.width, self.height, packed)
            .ok_or_else(|| BlurError::geometry("raster does not fit an RgbaImage"))
    }
}

impl<'a> RgbaRaster<&'a mut [u8]> {
    /// Borrow the pixels of an [`RgbaImage`] so they can be blurred in place.
    pub fn from_rgba_image_mut(img: &'a mut RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let data: &'a mut [u8] = img;
        Self {
            width,
            height,
            stride: width as usize * CHANNELS,
            offset: 0,
            data,
        }
    }
}

impl<C: Deref<Target = [u8]>> RgbaRaster<C> {
    /// Wrap an existing container with explicit row stride and origin offset.
    pub fn from_parts(
        width: u32,
        height: u32,
        stride: usize,
        offset: usize,
        data: C,
    ) -> BlurResult<Self> {
        let row_bytes = (width as usize)
            .checked_mul(CHANNELS)
            .ok_or_else(|| BlurError::geometry("raster row size overflow"))?;
        if stride < row_bytes {
            return Err(BlurError::geometry(format!(
                "stride {stride} is smaller than width*4 ({row_bytes})"
            )));
        }
        let end = if width == 0 || height == 0 {
            Some(offset)
        } else {
            stride
                .checked_mul(height as usize - 1)
                .and_then(|v| v.checked_add(row_bytes))
                .and_then(|v| v.checked_add(offset))
        }
        .ok_or_else(|| BlurError::geometry("raster size overflow"))?;
        if end > data.len() {
            return Err(BlurError::geometry(format!(
                "raster needs {end} bytes but container holds {}",
                data.len()
            )));
        }

        Ok(Self {
            width,
            height,
            stride,
            offset,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Bytes between the starts of two consecutive rows.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Byte offset of pixel `(0, 0)` inside the container.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    fn is_packed(&self) -> bool {
        self.offset == 0 && self.stride == self.width as usize * CHANNELS
    }

    /// Byte offset of pixel `(x, y)` inside the container.
    #[inline]
    pub fn pix_offset(&self, x: u32, y: u32) -> usize {
        self.offset + y as usize * self.stride + x as usize * CHANNELS
    }

    /// The whole underlying container, including bytes outside the view.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; CHANNELS] {
        let at = self.pix_offset(x, y);
        let px = &self.data[at..at + CHANNELS];
        [px[0], px[1], px[2], px[3]]
    }

    /// The `width * 4` bytes of row `y`.
    pub fn row(&self, y: u32) -> &[u8] {
        let at = self.pix_offset(0, y);
        &self.data[at..at + self.width as usize * CHANNELS]
    }

    /// Copy the view into a freshly allocated, tightly packed raster.
    pub fn to_packed(&self) -> RgbaRaster<Vec<u8>> {
        let mut data = Vec::with_capacity(self.width as usize * CHANNELS * self.height as usize);
        for y in 0..self.height {
            data.extend_from_slice(self.row(y));
        }
        RgbaRaster {
            width: self.width,
            height: self.height,
            stride: self.width as usize * CHANNELS,
            offset: 0,
            data,
        }
    }

    /// Narrow the raster to the `width x height` region whose top-left corner is `(x, y)`.
    ///
    /// The container and stride are kept, only the origin moves.
    pub fn sub_view(self, x: u32, y: u32, width: u32, height: u32) -> BlurResult<Self> {
        let fits_x = x.checked_add(width).is_some_and(|r| r <= self.width);
        let fits_y = y.checked_add(height).is_some_and(|b| b <= self.height);
        if !fits_x || !fits_y {
            return Err(BlurError::geometry(format!(
                "sub view {width}x{height}+{x}+{y} exceeds {}x{}",
                self.width, self.height
            )));
        }
        let offset = self.pix_offset(x, y);
        Ok(Self {
            width,
            height,
            stride: self.stride,
            offset,
            data: self.data,
        })
    }

    pub fn into_inner(self) -> C {
        self.data
    }
}

impl<C: DerefMut<Target = [u8]>> RgbaRaster<C> {
    pub fn put_pixel(&mut self, x: u32, y: u32, px: [u8; CHANNELS]) {
        let at = self.pix_offset(x, y);
        self.data[at..at + CHANNELS].copy_from_slice(&px);
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
