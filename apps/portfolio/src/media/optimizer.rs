use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, Rgb, RgbImage};
use thiserror::Error;

use super::{basename, split_name};

pub const MAX_WIDTH: u32 = 1920;
pub const MAX_HEIGHT: u32 = 1080;
pub const JPEG_QUALITY: u8 = 85;
/// Profile photos are never rendered larger than this.
pub const PROFILE_MAX: u32 = 500;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("could not decode image: {0}")]
    Decode(image::ImageError),

    #[error("could not encode image: {0}")]
    Encode(image::ImageError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    WebP,
}

impl OutputFormat {
    /// `.png` and `.webp` keep their format; everything else becomes JPEG.
    pub fn from_filename(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".png") {
            OutputFormat::Png
        } else if lower.ends_with(".webp") {
            OutputFormat::WebP
        } else {
            OutputFormat::Jpeg
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
            OutputFormat::WebP => "image/webp",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailSize {
    Small,
    Medium,
    Large,
}

impl ThumbnailSize {
    pub const ALL: [ThumbnailSize; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub fn bounds(self) -> (u32, u32) {
        match self {
            Self::Small => (480, 480),
            Self::Medium => (768, 768),
            Self::Large => (1200, 1200),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OptimizedImage {
    pub name: String,
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub content_type: &'static str,
}

/// Re-encodes an uploaded image within `max_width` x `max_height`.
///
/// Transparency is flattened onto white, oversized images are downscaled
/// with Lanczos3 keeping their aspect ratio, and the output format follows
/// the filename extension. The result keeps the input's basename.
pub fn optimize_image(
    data: &[u8],
    filename: &str,
    max_width: Option<u32>,
    max_height: Option<u32>,
) -> Result<OptimizedImage, ImageError> {
    let max_width = max_width.unwrap_or(MAX_WIDTH);
    let max_height = max_height.unwrap_or(MAX_HEIGHT);

    let img = image::load_from_memory(data).map_err(ImageError::Decode)?;
    let img = flatten_alpha(img);
    let img = fit_within(img, max_width, max_height);

    let format = OutputFormat::from_filename(filename);
    let bytes = encode(&img, format)?;
    let (width, height) = img.dimensions();

    Ok(OptimizedImage {
        name: basename(filename).to_string(),
        bytes,
        width,
        height,
        content_type: format.content_type(),
    })
}

/// Produces a JPEG thumbnail bounded by `size`, named `{stem}_{size}{ext}`.
pub fn create_thumbnail(
    data: &[u8],
    filename: &str,
    size: ThumbnailSize,
) -> Result<OptimizedImage, ImageError> {
    let img = image::load_from_memory(data).map_err(ImageError::Decode)?;
    let img = flatten_alpha(img);
    let (bw, bh) = size.bounds();
    let img = fit_within(img, bw, bh);
    let bytes = encode(&img, OutputFormat::Jpeg)?;
    let (width, height) = img.dimensions();

    let name = match split_name(basename(filename)) {
        (stem, Some(ext)) => format!("{stem}_{}.{ext}", size.as_str()),
        (stem, None) => format!("{stem}_{}", size.as_str()),
    };

    Ok(OptimizedImage {
        name,
        bytes,
        width,
        height,
        content_type: OutputFormat::Jpeg.content_type(),
    })
}

fn flatten_alpha(img: DynamicImage) -> DynamicImage {
    if !img.color().has_alpha() {
        return img;
    }
    let rgba = img.to_rgba8();
    let mut out = RgbImage::new(rgba.width(), rgba.height());
    for (x, y, px) in rgba.enumerate_pixels() {
        let [r, g, b, a] = px.0;
        let a = a as u16;
        let blend = |c: u8| ((c as u16 * a + 255 * (255 - a)) / 255) as u8;
        out.put_pixel(x, y, Rgb([blend(r), blend(g), blend(b)]));
    }
    DynamicImage::ImageRgb8(out)
}

fn fit_within(img: DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
    if img.width() > max_width || img.height() > max_height {
        img.resize(max_width, max_height, FilterType::Lanczos3)
    } else {
        img
    }
}

fn encode(img: &DynamicImage, format: OutputFormat) -> Result<Vec<u8>, ImageError> {
    let mut buf = Vec::new();
    let result = match format {
        OutputFormat::Jpeg => {
            let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
            rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY))
        }
        OutputFormat::Png => img.write_with_encoder(PngEncoder::new_with_quality(
            &mut buf,
            CompressionType::Best,
            PngFilter::Adaptive,
        )),
        // The only WebP encoder in `image` is lossless; there is no quality knob.
        OutputFormat::WebP => {
            let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
            rgb.write_with_encoder(WebPEncoder::new_lossless(&mut buf))
        }
    };
    result.map_err(ImageError::Encode)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(img: DynamicImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    fn solid_rgb(w: u32, h: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(w, h, Rgb([10, 120, 200])))
    }

    #[test]
    fn test_downscales_to_default_bounds_keeping_ratio() {
        let data = png_bytes(solid_rgb(3000, 1000));
        let out = optimize_image(&data, "banner.png", None, None).unwrap();
        assert_eq!((out.width, out.height), (1920, 640));
        assert_eq!(out.content_type, "image/png");
        assert_eq!(image::guess_format(&out.bytes).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_small_image_is_not_upscaled() {
        let data = png_bytes(solid_rgb(100, 50));
        let out = optimize_image(&data, "avatar.jpg", Some(500), Some(500)).unwrap();
        assert_eq!((out.width, out.height), (100, 50));
        assert_eq!(out.name, "avatar.jpg");
        assert_eq!(image::guess_format(&out.bytes).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_profile_bounds() {
        let data = png_bytes(solid_rgb(1000, 2000));
        let out = optimize_image(&data, "me.jpeg", Some(500), Some(500)).unwrap();
        assert_eq!((out.width, out.height), (250, 500));
    }

    #[test]
    fn test_transparency_flattened_onto_white() {
        let transparent =
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(40, 40, Rgba([255, 0, 0, 0])));
        let out = optimize_image(&png_bytes(transparent), "logo.png", None, None).unwrap();
        let decoded = image::load_from_memory(&out.bytes).unwrap();
        assert!(!decoded.color().has_alpha());
        let px = decoded.to_rgb8().get_pixel(20, 20).0;
        assert_eq!(px, [255, 255, 255]);
    }

    #[test]
    fn test_unknown_extension_encodes_jpeg_and_keeps_name() {
        let data = png_bytes(solid_rgb(20, 20));
        let out = optimize_image(&data, "uploads/photo.gif", None, None).unwrap();
        assert_eq!(out.name, "photo.gif");
        assert_eq!(out.content_type, "image/jpeg");
    }

    #[test]
    fn test_webp_output() {
        let data = png_bytes(solid_rgb(20, 20));
        let out = optimize_image(&data, "cover.webp", None, None).unwrap();
        assert_eq!(image::guess_format(&out.bytes).unwrap(), ImageFormat::WebP);
    }

    #[test]
    fn test_thumbnail_is_jpeg_with_size_suffix() {
        let data = png_bytes(solid_rgb(2000, 1000));
        let out = create_thumbnail(&data, "pic.png", ThumbnailSize::Small).unwrap();
        assert_eq!(out.name, "pic_small.png");
        assert_eq!((out.width, out.height), (480, 240));
        assert_eq!(image::guess_format(&out.bytes).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_thumbnail_size_parse() {
        assert_eq!(ThumbnailSize::parse("medium"), Some(ThumbnailSize::Medium));
        assert_eq!(ThumbnailSize::parse("huge"), None);
        assert_eq!(ThumbnailSize::Large.bounds(), (1200, 1200));
    }

    #[test]
    fn test_garbage_input_is_decode_error() {
        assert!(matches!(
            optimize_image(b"not an image", "x.png", None, None),
            Err(ImageError::Decode(_))
        ));
    }
}
