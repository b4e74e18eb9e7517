//! Image preprocessing ahead of quantization.
//!
//! The quantizer runs at sticker resolution, so the source image is first
//! resampled down to `stickers_across x stickers_high`. An optional
//! Gaussian blur before quantization suppresses high-frequency detail that
//! would otherwise alias into sticker noise.

use crate::color::Rgb;

/// Area-average resample to a new size.
///
/// Each destination pixel averages the source region it covers, weighting
/// partially-covered source pixels by their fractional overlap. This is
/// proper box filtering: downscales are antialiased, and integer upscales
/// replicate pixels exactly.
///
/// # Panics (debug only)
///
/// Debug-asserts that `pixels.len() == src_w * src_h` and that all
/// dimensions are non-zero.
pub fn resample(
    pixels: &[Rgb],
    src_w: usize,
    src_h: usize,
    dst_w: usize,
    dst_h: usize,
) -> Vec<Rgb> {
    debug_assert_eq!(pixels.len(), src_w * src_h);
    debug_assert!(src_w > 0 && src_h > 0 && dst_w > 0 && dst_h > 0);

    if src_w == dst_w && src_h == dst_h {
        return pixels.to_vec();
    }

    let x_ratio = src_w as f32 / dst_w as f32;
    let y_ratio = src_h as f32 / dst_h as f32;

    let mut out = Vec::with_capacity(dst_w * dst_h);
    for dy in 0..dst_h {
        // Source span covered by this destination row.
        let y0 = dy as f32 * y_ratio;
        let y1 = (dy + 1) as f32 * y_ratio;
        let sy_start = y0.floor() as usize;
        let sy_end = (y1.ceil() as usize).min(src_h);

        for dx in 0..dst_w {
            let x0 = dx as f32 * x_ratio;
            let x1 = (dx + 1) as f32 * x_ratio;
            let sx_start = x0.floor() as usize;
            let sx_end = (x1.ceil() as usize).min(src_w);

            let mut r = 0.0f32;
            let mut g = 0.0f32;
            let mut b = 0.0f32;
            let mut weight_sum = 0.0f32;

            for sy in sy_start..sy_end {
                let cov_y = (y1.min((sy + 1) as f32) - y0.max(sy as f32)).max(0.0);
                for sx in sx_start..sx_end {
                    let cov_x = (x1.min((sx + 1) as f32) - x0.max(sx as f32)).max(0.0);
                    let w = cov_x * cov_y;
                    let p = pixels[sy * src_w + sx];
                    r += p.r * w;
                    g += p.g * w;
                    b += p.b * w;
                    weight_sum += w;
                }
            }

            out.push(Rgb::new(r / weight_sum, g / weight_sum, b / weight_sum));
        }
    }
    out
}

/// Separable Gaussian blur with edge clamping.
///
/// Kernel radius is `ceil(3 * sigma)`, covering 99.7% of the Gaussian mass.
/// Samples past the image edge clamp to the border pixel, so uniform images
/// are unchanged and no brightness is lost at the edges. `sigma <= 0` is a
/// no-op copy.
pub fn gaussian_blur(pixels: &[Rgb], width: usize, height: usize, sigma: f32) -> Vec<Rgb> {
    debug_assert_eq!(pixels.len(), width * height);

    if sigma <= 0.0 {
        return pixels.to_vec();
    }

    let radius = (3.0 * sigma).ceil() as i64;
    let kernel: Vec<f32> = {
        let mut k: Vec<f32> = (-radius..=radius)
            .map(|i| (-((i * i) as f32) / (2.0 * sigma * sigma)).exp())
            .collect();
        let sum: f32 = k.iter().sum();
        for w in &mut k {
            *w /= sum;
        }
        k
    };

    // Horizontal pass, then vertical.
    let mut tmp = vec![Rgb::new(0.0, 0.0, 0.0); width * height];
    for y in 0..height {
        for x in 0..width {
            let mut r = 0.0f32;
            let mut g = 0.0f32;
            let mut b = 0.0f32;
            for (ki, &w) in kernel.iter().enumerate() {
                let sx = (x as i64 + ki as i64 - radius).clamp(0, width as i64 - 1) as usize;
                let p = pixels[y * width + sx];
                r += p.r * w;
                g += p.g * w;
                b += p.b * w;
            }
            tmp[y * width + x] = Rgb::new(r, g, b);
        }
    }

    let mut out = vec![Rgb::new(0.0, 0.0, 0.0); width * height];
    for y in 0..height {
        for x in 0..width {
            let mut r = 0.0f32;
            let mut g = 0.0f32;
            let mut b = 0.0f32;
            for (ki, &w) in kernel.iter().enumerate() {
                let sy = (y as i64 + ki as i64 - radius).clamp(0, height as i64 - 1) as usize;
                let p = tmp[sy * width + x];
                r += p.r * w;
                g += p.g * w;
                b += p.b * w;
            }
            out[y * width + x] = Rgb::new(r, g, b);
        }
    }
    out
}
