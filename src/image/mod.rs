//! Owned RGB image buffers and disk I/O.

pub mod io;

pub use self::io::{load_rgb_image, save_rgb_image, write_json_file};

/// One pixel: three independent 8-bit channels, no alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Owned 8-bit RGB buffer in row-major (scanline) order, origin top-left,
/// three bytes per pixel, tightly packed (stride == 3 * width).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRgb8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl ImageRgb8 {
    /// Construct a zero-filled buffer of size `width × height`.
    ///
    /// Dimensions must both be positive; the wrap-around convolution is
    /// undefined on an empty axis.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "image dimensions must be positive"
        );
        Self {
            width,
            height,
            data: vec![0u8; width * height * 3],
        }
    }

    /// Wrap raw interleaved RGB bytes, validating shape.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, String> {
        if width == 0 || height == 0 {
            return Err(format!("Invalid image dimensions {width}x{height}"));
        }
        let expected = width * height * 3;
        if data.len() != expected {
            return Err(format!(
                "Pixel buffer holds {} bytes, expected {expected} for {width}x{height}",
                data.len()
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    /// Convert (x, y) to the byte offset of the pixel's red channel.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * 3
    }

    #[inline]
    /// Get the pixel at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        let i = self.idx(x, y);
        Rgb {
            r: self.data[i],
            g: self.data[i + 1],
            b: self.data[i + 2],
        }
    }

    #[inline]
    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: usize, y: usize, px: Rgb) {
        let i = self.idx(x, y);
        self.data[i] = px.r;
        self.data[i + 1] = px.g;
        self.data[i + 2] = px.b;
    }

    #[inline]
    /// Borrow the bytes of row `y` (3 * width of them).
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width * 3;
        &self.data[start..start + self.width * 3]
    }

    /// Borrow the whole backing buffer.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Mutably borrow the whole backing buffer.
    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume into the backing buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}
