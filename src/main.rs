use clap::Parser;
use glam::Vec3A;
use log::{error, info};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;
use stillray::camera::Camera;
use stillray::hittable::HittableList;
use stillray::output::save_image_as_ppm;
use stillray::sphere::Sphere;

/// Create the scene: a single sphere centered in front of the camera
fn create_scene() -> HittableList {
    let mut world = HittableList::new();
    world.add(Box::new(Sphere::new(Vec3A::new(0.0, 0.0, -1.0), 0.5)));
    world
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    // Log application startup with version information
    info!("Stillray - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));
    info!("Image resolution: {}x{}", args.width, args.height);

    let world = create_scene();
    let camera = Camera::new(args.width, args.height);

    let image = camera.render(&world);

    if let Err(e) = save_image_as_ppm(&image, &args.output) {
        error!("Failed to open {} for writing: {}", args.output, e);
        std::process::exit(1);
    }

    info!("Done.");
}
