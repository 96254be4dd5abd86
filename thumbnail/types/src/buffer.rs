/*!
    Output bitmap buffer and bounding box types.
*/

use crate::{Error, Result};

/**
    A bounding box or image size in pixels.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dims {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dims {
    /**
        Create a new size.
    */
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/**
    An owned RGBA8 bitmap.

    Pixel data is contiguous and row-major, 4 bytes per pixel in R,G,B,A
    order. The byte length is always `width * height * 4`; transform stages
    either mutate pixels in place or replace the whole buffer when the
    dimensions change.
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Buffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Buffer {
    /**
        Allocate a zeroed buffer for the given dimensions.

        Allocation failure is reported as [`Error::Allocation`] instead of
        aborting, so callers can surface resource exhaustion.
    */
    pub fn alloc(width: u32, height: u32) -> Result<Self> {
        let len = width as usize * height as usize * 4;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::allocation(len))?;
        data.resize(len, 0);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /**
        Buffer width in pixels.
    */
    pub fn width(&self) -> u32 {
        self.width
    }

    /**
        Buffer height in pixels.
    */
    pub fn height(&self) -> u32 {
        self.height
    }

    /**
        Buffer dimensions.
    */
    pub fn dims(&self) -> Dims {
        Dims::new(self.width, self.height)
    }

    /**
        Byte length of the pixel data (`width * height * 4`).
    */
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /**
        Returns true if the buffer holds no pixels.
    */
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /**
        The raw RGBA8 bytes.
    */
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /**
        The raw RGBA8 bytes, mutable.
    */
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /**
        Read the RGBA quartet at the given coordinates.
    */
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.index(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /**
        Write the RGBA quartet at the given coordinates.
    */
    pub fn set_pixel(&mut self, x: u32, y: u32, px: [u8; 4]) {
        let i = self.index(x, y);
        self.data[i..i + 4].copy_from_slice(&px);
    }

    /**
        Swap the RGBA quartets at two coordinates.
    */
    pub fn swap_pixels(&mut self, a: (u32, u32), b: (u32, u32)) {
        let pa = self.pixel(a.0, a.1);
        let pb = self.pixel(b.0, b.1);
        self.set_pixel(a.0, a.1, pb);
        self.set_pixel(b.0, b.1, pa);
    }

    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y as usize * self.width as usize + x as usize) * 4
    }
}

// Ensure buffers are Send + Sync
static_assertions::assert_impl_all!(Buffer: Send, Sync);
static_assertions::assert_impl_all!(Dims: Send, Sync);
