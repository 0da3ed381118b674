//! Raster encoding for thumbnails

use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;

use super::error::PdfError;

/// Default JPEG quality, matching the common library default
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Encode a rendered page as baseline JPEG
pub fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>, PdfError> {
    let mut output = Vec::new();
    {
        let mut encoder = JpegEncoder::new_with_quality(&mut output, quality.clamp(1, 100));
        encoder.encode_image(image)?;
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_jpeg_produces_jpeg_magic() {
        let image = RgbImage::from_pixel(4, 4, image::Rgb([200, 10, 10]));
        let bytes = encode_jpeg(&image, DEFAULT_JPEG_QUALITY).unwrap();
        assert_eq!(&bytes[..3], &[0xFF, 0xD8, 0xFF]);
    }

    #[test]
    fn test_encode_jpeg_is_deterministic() {
        let image = RgbImage::from_pixel(8, 8, image::Rgb([1, 2, 3]));
        assert_eq!(encode_jpeg(&image, 90).unwrap(), encode_jpeg(&image, 90).unwrap());
    }
}
