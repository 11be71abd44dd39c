//! Image output in plain-text PPM (P3) format.
//!
//! The P3 format is an ASCII raster: a magic token, the pixel dimensions,
//! the maximum channel value, then one whitespace-separated RGB triplet per
//! pixel. Pixels are written in the buffer's row-major order, which matches
//! the renderer's scanline visiting order.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use image::{ImageBuffer, Rgb};
use log::info;

use crate::color::{self, Color};

/// Stream an f32 RGB image as ASCII PPM to any writer.
///
/// Emits the `P3` header with dimensions and a maximum channel value of
/// 255, then one quantized `R G B` line per pixel.
pub fn write_ppm<W: Write>(
    image: &ImageBuffer<Rgb<f32>, Vec<f32>>,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", image.width(), image.height())?;
    writeln!(out, "255")?;

    for pixel in image.pixels() {
        let [r, g, b] = color::to_rgb8(Color::new(pixel[0], pixel[1], pixel[2]));
        writeln!(out, "{} {} {}", r, g, b)?;
    }

    Ok(())
}

/// Save an f32 RGB image as a plain-text PPM file.
///
/// The file is created (or truncated) at `output_path` and released on all
/// paths when the writer drops. Returns the underlying I/O error when the
/// sink cannot be opened or written; the caller decides how to surface it.
pub fn save_image_as_ppm(
    image: &ImageBuffer<Rgb<f32>, Vec<f32>>,
    output_path: &str,
) -> io::Result<()> {
    let file = File::create(output_path)?;
    let mut out = BufWriter::new(file);
    write_ppm(image, &mut out)?;
    out.flush()?;

    info!("Image saved as {}", output_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::hittable::HittableList;
    use crate::sphere::Sphere;
    use glam::Vec3A;

    fn render_reference() -> ImageBuffer<Rgb<f32>, Vec<f32>> {
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(Vec3A::new(0.0, 0.0, -1.0), 0.5)));
        Camera::new(200, 100).render_with_progress(&world, |_| {})
    }

    fn pixel_lines(text: &str) -> Vec<[i32; 3]> {
        text.lines()
            .skip(3)
            .map(|line| {
                let values: Vec<i32> = line
                    .split(' ')
                    .map(|v| v.parse().expect("channel should be a decimal integer"))
                    .collect();
                [values[0], values[1], values[2]]
            })
            .collect()
    }

    #[test]
    fn header_and_pixel_count_match_dimensions() {
        let mut buffer = Vec::new();
        write_ppm(&render_reference(), &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("P3\n200 100\n255\n"));

        let pixels = pixel_lines(&text);
        assert_eq!(pixels.len(), 20000);
        assert!(pixels
            .iter()
            .all(|p| p.iter().all(|c| (0..=255).contains(c))));
    }

    #[test]
    fn top_scanline_is_emitted_first() {
        let mut buffer = Vec::new();
        write_ppm(&render_reference(), &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let pixels = pixel_lines(&text);

        // The first emitted pixel looks up toward the sky, the last looks
        // down at the horizon's white end, so red rises across the file.
        let first = pixels.first().unwrap();
        let last = pixels.last().unwrap();
        assert!(first[0] < last[0]);
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let mut first = Vec::new();
        write_ppm(&render_reference(), &mut first).unwrap();

        let mut second = Vec::new();
        write_ppm(&render_reference(), &mut second).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn unwritable_sink_reports_error() {
        let image = render_reference();
        assert!(save_image_as_ppm(&image, "/nonexistent-dir/image.ppm").is_err());
    }
}
