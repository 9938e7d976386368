mod demo;

use anyhow::Result;
use ember_engine::camera::{FlyCamera, Projection};
use ember_engine::device::GpuInit;
use ember_engine::logging::{init_logging, LoggingConfig};
use ember_engine::window::{Runtime, RuntimeConfig};

use demo::TriangleDemo;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let camera = FlyCamera::default();
    let projection = Projection::default();

    log::info!(
        "camera at {:?} looking {:?}, fov {:.1} deg, clip {}..{}",
        camera.position,
        camera.direction,
        projection.fov_y.to_degrees(),
        projection.near,
        projection.far,
    );
    log::info!("controls: WASD / arrows move, Space up, Shift down, Esc quits");

    Runtime::run(
        RuntimeConfig::default(),
        GpuInit::default(),
        TriangleDemo::new(camera, projection),
    )
}
