//! Per-image normalization pipeline.
//!
//! Each stage derives a new representation from the previous one:
//!
//! 1. resize to 256x256 (bilinear) unless already that size
//! 2. split RGBA into RGB and alpha
//! 3. remap RGB through the gamma table
//! 4. multiply RGB by the tint
//! 5. black out every texel whose alpha is zero
//! 6. merge RGB with the alpha from step 2

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage, RgbaImage};

use crate::color::Tint;
use crate::gamma::GammaLut;

/// Edge length every skin is normalized to.
pub const TARGET_SIZE: u32 = 256;

/// Applies the fixed normalization sequence to decoded images.
#[derive(Debug, Clone)]
pub struct Homogenizer {
    lut: Option<GammaLut>,
    tint: Tint,
}

impl Homogenizer {
    /// A gamma of exactly `1.0` skips the remap stage.
    pub fn new(gamma: f64, tint: Tint) -> Self {
        let lut = (gamma != 1.0).then(|| GammaLut::new(gamma));
        Self { lut, tint }
    }

    pub fn gamma_lut(&self) -> Option<&GammaLut> {
        self.lut.as_ref()
    }

    pub fn tint(&self) -> Tint {
        self.tint
    }

    /// Run the whole pipeline on one image.
    pub fn apply(&self, image: DynamicImage) -> RgbaImage {
        let mut rgba = image.into_rgba8();
        if rgba.dimensions() != (TARGET_SIZE, TARGET_SIZE) {
            rgba = resize_bilinear(&rgba, TARGET_SIZE, TARGET_SIZE);
        }

        let (mut rgb, alpha) = split_alpha(&rgba);
        drop(rgba);

        if let Some(lut) = &self.lut {
            lut.apply(&mut rgb);
        }
        multiply(&mut rgb, self.tint);

        let mask = keep_mask(&alpha);
        composite_over_black(&mut rgb, &mask);

        merge_alpha(&rgb, &alpha)
    }
}

/// Bilinear resize with color premultiplied by alpha during the resample.
///
/// Without premultiplication fully transparent texels would bleed their
/// (often garbage) color into the visible edge.
pub fn resize_bilinear(rgba: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let mut premultiplied = rgba.clone();
    for pixel in premultiplied.pixels_mut() {
        let a = pixel[3] as u32;
        for c in &mut pixel.0[..3] {
            *c = ((*c as u32 * a + 127) / 255) as u8;
        }
    }

    let mut resized = imageops::resize(&premultiplied, width, height, FilterType::Triangle);

    for pixel in resized.pixels_mut() {
        let a = pixel[3] as u32;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut pixel.0[..3] {
            *c = (*c as u32 * 255 / a).min(255) as u8;
        }
    }

    resized
}

/// Separate the color channels from the alpha channel.
pub fn split_alpha(rgba: &RgbaImage) -> (RgbImage, GrayImage) {
    let (width, height) = rgba.dimensions();
    let rgb = RgbImage::from_fn(width, height, |x, y| {
        let [r, g, b, _] = rgba.get_pixel(x, y).0;
        Rgb([r, g, b])
    });
    let alpha = GrayImage::from_fn(width, height, |x, y| Luma([rgba.get_pixel(x, y)[3]]));
    (rgb, alpha)
}

/// Multiply blend against a constant color: `floor(a * b / 255)` per channel.
pub fn multiply(rgb: &mut RgbImage, tint: Tint) {
    let tint = tint.channels();
    for pixel in rgb.pixels_mut() {
        for (c, t) in pixel.0.iter_mut().zip(tint) {
            *c = (*c as u16 * t as u16 / 255) as u8;
        }
    }
}

/// Binary mask: 0 where alpha is 0, 255 everywhere else.
pub fn keep_mask(alpha: &GrayImage) -> GrayImage {
    let mut mask = alpha.clone();
    for value in mask.iter_mut() {
        *value = if *value == 0 { 0 } else { 255 };
    }
    mask
}

/// Keep texels under a set mask, replace the rest with black.
pub fn composite_over_black(rgb: &mut RgbImage, mask: &GrayImage) {
    for (pixel, keep) in rgb.pixels_mut().zip(mask.pixels()) {
        if keep[0] == 0 {
            *pixel = Rgb([0, 0, 0]);
        }
    }
}

/// Recombine color and alpha into the final image.
pub fn merge_alpha(rgb: &RgbImage, alpha: &GrayImage) -> RgbaImage {
    let (width, height) = rgb.dimensions();
    RgbaImage::from_fn(width, height, |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        image::Rgba([r, g, b, alpha.get_pixel(x, y)[0]])
    })
}
