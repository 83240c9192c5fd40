use crate::core::data::colour::Colour;
use crate::core::data::frame_size::FrameSize;
use std::error::Error;
use std::fmt;
use std::slice::ChunksExactMut;

pub const BYTES_PER_PIXEL: usize = 3;

fn frame_size_to_buffer_size(size: FrameSize) -> usize {
    size.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelGridError {
    PixelOutsideBounds {
        x: u32,
        y: u32,
        size: FrameSize,
    },
    BoundsMismatch {
        frame_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                frame_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "frame size {} does not match buffer size {}",
                    frame_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { x, y, size } => {
                write!(f, "pixel at x:{}, y:{} outside of {} grid", x, y, size)
            }
        }
    }
}

impl Error for PixelGridError {}

pub type PixelGridData = Vec<u8>;

/// Row-major RGB colours for one rendered frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    size: FrameSize,
    buffer: PixelGridData,
}

impl PixelGrid {
    #[must_use]
    pub fn new(size: FrameSize) -> Self {
        Self {
            size,
            buffer: vec![0; frame_size_to_buffer_size(size)],
        }
    }

    pub fn from_data(size: FrameSize, buffer: PixelGridData) -> Result<Self, PixelGridError> {
        let expected = frame_size_to_buffer_size(size);

        if expected != buffer.len() {
            return Err(PixelGridError::BoundsMismatch {
                frame_size: expected,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> FrameSize {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.size.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.size.height()
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelGridData {
        &self.buffer
    }

    #[must_use]
    pub fn into_buffer(self) -> PixelGridData {
        self.buffer
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if !self.size.contains(x, y) {
            return None;
        }

        let index = self.index(x, y);

        Some(Colour::new(
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
        ))
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), PixelGridError> {
        if !self.size.contains(x, y) {
            return Err(PixelGridError::PixelOutsideBounds {
                x,
                y,
                size: self.size,
            });
        }

        let index = self.index(x, y);
        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_rgb());

        Ok(())
    }

    /// Disjoint mutable views of each pixel row, top to bottom.
    pub fn rows_mut(&mut self) -> ChunksExactMut<'_, u8> {
        let row_bytes = self.row_bytes();
        self.buffer.chunks_exact_mut(row_bytes)
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    pub(crate) fn row_bytes(&self) -> usize {
        self.size.width() as usize * BYTES_PER_PIXEL
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.size.width() as usize + x as usize) * BYTES_PER_PIXEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_size(width: u32, height: u32) -> FrameSize {
        FrameSize::new(width, height).unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let size = create_size(10, 10);
        let grid = PixelGrid::new(size);

        assert_eq!(grid.size(), size);
        assert_eq!(grid.buffer().len(), 300); // 10 * 10 * 3
        assert!(grid.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_data_valid() {
        let size = create_size(2, 2);
        let data: Vec<u8> = vec![
            255, 0, 0, // pixel (0,0) - red
            0, 255, 0, // pixel (1,0) - green
            0, 0, 255, // pixel (0,1) - blue
            255, 255, 0, // pixel (1,1) - yellow
        ];

        let grid = PixelGrid::from_data(size, data.clone()).unwrap();

        assert_eq!(grid.buffer(), &data);
        assert_eq!(grid.pixel(0, 1), Some(Colour::new(0, 0, 255)));
        assert_eq!(grid.pixel(1, 1), Some(Colour::new(255, 255, 0)));
    }

    #[test]
    fn test_from_data_buffer_size_mismatch() {
        let size = create_size(2, 2);

        assert_eq!(
            PixelGrid::from_data(size, vec![255, 0, 0]).unwrap_err(),
            PixelGridError::BoundsMismatch {
                frame_size: 12,
                buffer_size: 3
            }
        );
        assert_eq!(
            PixelGrid::from_data(size, vec![0; 24]).unwrap_err(),
            PixelGridError::BoundsMismatch {
                frame_size: 12,
                buffer_size: 24
            }
        );
    }

    #[test]
    fn test_set_pixel_bottom_right_corner() {
        let mut grid = PixelGrid::new(create_size(3, 3));

        grid.set_pixel(2, 2, Colour::new(0, 0, 255)).unwrap();

        assert_eq!(&grid.buffer()[24..27], &[0, 0, 255]);
        assert_eq!(grid.pixel(2, 2), Some(Colour::new(0, 0, 255)));
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let size = create_size(3, 3);
        let mut grid = PixelGrid::new(size);

        assert_eq!(
            grid.set_pixel(5, 1, Colour::BLACK),
            Err(PixelGridError::PixelOutsideBounds { x: 5, y: 1, size })
        );
        assert_eq!(grid.pixel(1, 3), None);
    }

    #[test]
    fn test_rows_mut_yields_one_slice_per_row() {
        let mut grid = PixelGrid::new(create_size(4, 3));

        for (y, row) in grid.rows_mut().enumerate() {
            assert_eq!(row.len(), 12);
            row.fill(y as u8);
        }

        assert_eq!(grid.pixel(3, 0), Some(Colour::new(0, 0, 0)));
        assert_eq!(grid.pixel(0, 2), Some(Colour::new(2, 2, 2)));
    }

    #[test]
    fn test_into_buffer_returns_data() {
        let size = create_size(1, 1);
        let grid = PixelGrid::from_data(size, vec![1, 2, 3]).unwrap();

        assert_eq!(grid.into_buffer(), vec![1, 2, 3]);
    }
}
