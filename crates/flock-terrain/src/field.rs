//! Row-major grid of normalized heights.
//!
//! Sampling follows GPU texture conventions so results line up with the
//! renderer's view of the same data:
//!
//! - texel `(i, j)` has its center at `((i + 0.5) / width, (j + 0.5) / height)`,
//! - bilinear filtering between the four nearest centers, no mip bias,
//! - clamp-to-edge addressing outside `[0, 1]`.

use glam::Vec2;

use crate::{HeightSource, TerrainError, TerrainResult};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeightField {
    width:  usize,
    height: usize,
    /// `texels[row * width + col]`, row 0 at `v = 0`.
    texels: Vec<f32>,
}

impl HeightField {
    /// Wrap a single-channel grid.
    pub fn new(width: usize, height: usize, texels: Vec<f32>) -> TerrainResult<Self> {
        check_dims(width, height, texels.len())?;
        Ok(Self { width, height, texels })
    }

    /// Build from a four-channel grid; only the red channel carries height.
    pub fn from_rgba(width: usize, height: usize, texels: &[[f32; 4]]) -> TerrainResult<Self> {
        check_dims(width, height, texels.len())?;
        Ok(Self {
            width,
            height,
            texels: texels.iter().map(|t| t[0]).collect(),
        })
    }

    /// Fill a grid from a function of texel-center UV.
    pub fn from_fn(
        width:  usize,
        height: usize,
        mut f:  impl FnMut(Vec2) -> f32,
    ) -> TerrainResult<Self> {
        check_dims(width, height, width * height)?;
        let mut texels = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                let uv = Vec2::new(
                    (col as f32 + 0.5) / width as f32,
                    (row as f32 + 0.5) / height as f32,
                );
                texels.push(f(uv));
            }
        }
        Ok(Self { width, height, texels })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn texels(&self) -> &[f32] {
        &self.texels
    }

    /// Texel value with clamp-to-edge addressing.
    #[inline]
    pub fn texel(&self, col: isize, row: isize) -> f32 {
        let c = col.clamp(0, self.width as isize - 1) as usize;
        let r = row.clamp(0, self.height as isize - 1) as usize;
        self.texels[r * self.width + c]
    }

    /// Bilinear sample at `uv`.
    pub fn sample_bilinear(&self, uv: Vec2) -> f32 {
        let x = uv.x * self.width as f32 - 0.5;
        let y = uv.y * self.height as f32 - 0.5;
        let x0 = x.floor();
        let y0 = y.floor();
        let fx = x - x0;
        let fy = y - y0;
        let (c0, r0) = (x0 as isize, y0 as isize);

        let h00 = self.texel(c0, r0);
        let h10 = self.texel(c0 + 1, r0);
        let h01 = self.texel(c0, r0 + 1);
        let h11 = self.texel(c0 + 1, r0 + 1);

        let bottom = h00 + (h10 - h00) * fx;
        let top = h01 + (h11 - h01) * fx;
        bottom + (top - bottom) * fy
    }
}

impl HeightSource for HeightField {
    #[inline]
    fn sample(&self, uv: Vec2) -> f32 {
        self.sample_bilinear(uv)
    }
}

fn check_dims(width: usize, height: usize, got: usize) -> TerrainResult<()> {
    if width == 0 || height == 0 {
        return Err(TerrainError::EmptyField { width, height });
    }
    let expected = width * height;
    if got != expected {
        return Err(TerrainError::TexelCountMismatch { width, height, expected, got });
    }
    Ok(())
}
