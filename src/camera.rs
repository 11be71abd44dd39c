//! Camera for ray generation and scene rendering

use std::time::Instant;

use glam::Vec3A;
use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use crate::color::Color;
use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::ray::Ray;

/// Camera for ray generation and scene rendering.
///
/// Uses a fixed pinhole camera model: the viewport is an axis-aligned
/// rectangle one focal length in front of the origin, two world units tall,
/// with its width following the image aspect ratio. Casts exactly one ray
/// per pixel; no sampling, no defocus.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,

    /// Camera position in world space
    origin: Vec3A,
    /// World position of the viewport's lower-left corner
    lower_left_corner: Vec3A,
    /// Vector spanning the viewport's horizontal edge
    horizontal: Vec3A,
    /// Vector spanning the viewport's vertical edge (world up)
    vertical: Vec3A,
}

impl Camera {
    /// Create a camera for the given image dimensions.
    ///
    /// Viewport height is fixed at 2.0 with a focal length of 1.0; viewport
    /// width follows the image aspect ratio. At 200x100 this places the
    /// lower-left corner at (-2, -1, -1) with spans (4, 0, 0) and (0, 2, 0).
    pub fn new(image_width: u32, image_height: u32) -> Self {
        // Guard against a degenerate zero-height image
        let image_height = image_height.max(1);
        let aspect_ratio = image_width as f32 / image_height as f32;

        let viewport_height = 2.0;
        let viewport_width = viewport_height * aspect_ratio;
        let focal_length = 1.0;

        let origin = Vec3A::ZERO;
        let horizontal = Vec3A::new(viewport_width, 0.0, 0.0);
        let vertical = Vec3A::new(0.0, viewport_height, 0.0);
        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - Vec3A::new(0.0, 0.0, focal_length);

        Self {
            image_width,
            image_height,
            origin,
            lower_left_corner,
            horizontal,
            vertical,
        }
    }

    /// Render the scene with a progress bar on the terminal.
    ///
    /// Returns a linear f32 RGB image buffer whose row-major order matches
    /// the scanline visiting order (top scanline first).
    pub fn render(&self, world: &dyn Hittable) -> ImageBuffer<Rgb<f32>, Vec<f32>> {
        let pb = ProgressBar::new(self.image_height as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40} {pos}/{len} ETA: {eta}")
                .unwrap(),
        );

        let generation_start = Instant::now();
        let image = self.render_with_progress(world, |_| pb.inc(1));
        pb.finish();
        info!("Image generated in {:.2?}", generation_start.elapsed());

        image
    }

    /// Render the scene, reporting each finished scanline to an observer.
    ///
    /// The observer receives the scanline index j, starting at the top row
    /// (image_height - 1) and counting down to 0. Pixel (i, j) maps to
    /// buffer row image_height - 1 - j, so the buffer's row-major order is
    /// the order scanlines were produced.
    pub fn render_with_progress<F>(
        &self,
        world: &dyn Hittable,
        mut on_scanline: F,
    ) -> ImageBuffer<Rgb<f32>, Vec<f32>>
    where
        F: FnMut(u32),
    {
        let mut image: ImageBuffer<Rgb<f32>, Vec<f32>> =
            ImageBuffer::new(self.image_width, self.image_height);

        for j in (0..self.image_height).rev() {
            for i in 0..self.image_width {
                let r = self.get_ray(i, j);
                let color = self.ray_color(&r, world);
                image.put_pixel(i, self.image_height - 1 - j, Rgb([color.x, color.y, color.z]));
            }
            on_scanline(j);
        }

        image
    }

    /// Generate the ray through pixel (i, j).
    ///
    /// j counts scanlines from the bottom of the viewport; the render loop
    /// visits it from the top down.
    fn get_ray(&self, i: u32, j: u32) -> Ray {
        let u = i as f32 / self.image_width as f32;
        let v = j as f32 / self.image_height as f32;
        let direction =
            self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin;

        Ray::new(self.origin, direction)
    }

    /// Compute the color seen along a ray.
    ///
    /// Any intersection shades flat red; the hit record is not consulted
    /// further. Otherwise the background is a vertical gradient keyed on
    /// the normalized direction's Y component. A degenerate zero-length
    /// direction normalizes to zero and lands on the gradient midpoint.
    fn ray_color(&self, r: &Ray, world: &dyn Hittable) -> Color {
        if world.hit(r, Interval::new(0.0, f32::INFINITY)).is_some() {
            return Color::new(1.0, 0.0, 0.0);
        }

        // No hit - render sky gradient
        let unit_direction = r.direction.normalize_or_zero();
        // Y = -1 (down) gives a = 0, Y = 1 (up) gives a = 1
        let a = 0.5 * (unit_direction.y + 1.0);

        // Linear interpolation between white and light blue
        (1.0 - a) * Color::new(1.0, 1.0, 1.0) + a * Color::new(0.5, 0.7, 1.0)
    }
}
