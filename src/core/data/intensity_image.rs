use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntensityImageError {
    SizeMismatch {
        expected: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for IntensityImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch {
                expected,
                buffer_size,
            } => {
                write!(
                    f,
                    "image dimensions need {} bytes, buffer holds {}",
                    expected, buffer_size
                )
            }
        }
    }
}

impl Error for IntensityImageError {}

/// Single-channel 8-bit image, row-major, same dimensions as the grid it
/// was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl IntensityImage {
    pub fn from_data(
        width: usize,
        height: usize,
        data: Vec<u8>,
    ) -> Result<Self, IntensityImageError> {
        let expected = width * height;

        if expected != data.len() {
            return Err(IntensityImageError::SizeMismatch {
                expected,
                buffer_size: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn get(&self, column: usize, row: usize) -> Option<u8> {
        if column >= self.width || row >= self.height {
            return None;
        }

        Some(self.data[row * self.width + column])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data_valid() {
        let data = vec![0, 64, 128, 192, 255, 32];
        let image = IntensityImage::from_data(2, 3, data.clone()).unwrap();

        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 3);
        assert_eq!(image.data(), &data);
    }

    #[test]
    fn test_from_data_rejects_wrong_buffer_size() {
        let result = IntensityImage::from_data(2, 3, vec![0; 4]);

        assert_eq!(
            result,
            Err(IntensityImageError::SizeMismatch {
                expected: 6,
                buffer_size: 4
            })
        );
    }

    #[test]
    fn test_get_is_row_major() {
        let image = IntensityImage::from_data(2, 2, vec![1, 2, 3, 4]).unwrap();

        assert_eq!(image.get(0, 0), Some(1));
        assert_eq!(image.get(1, 0), Some(2));
        assert_eq!(image.get(0, 1), Some(3));
        assert_eq!(image.get(1, 1), Some(4));
    }

    #[test]
    fn test_get_outside_bounds() {
        let image = IntensityImage::from_data(2, 2, vec![0; 4]).unwrap();

        assert_eq!(image.get(2, 0), None);
        assert_eq!(image.get(0, 2), None);
    }
}
