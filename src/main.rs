use anyhow::Context;

use mvp::{lighting::phong, prelude::*};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let mut camera = Camera::default();
    camera.perspective.resize(800, 600);
    camera.orbit(1.5, 1.5, 30.);

    let model = Transform::default()
        .with_scale(0.5, 0.5, 0.5)
        .with_rotation(0., 0., 45.)
        .with_translation(0., 0., 0.25)
        .model();

    let view = camera.view().context("Failed to build view matrix")?;
    let projection = camera
        .projection()
        .context("Failed to build projection matrix")?;
    let normals = camera
        .normal_matrix(&model)
        .context("Failed to build normal matrix")?;
    let mvp = projection.mult(&view).mult(&model);

    log::info!("Model:\n{}", model.as_text());
    log::info!("View:\n{}", view.as_text());
    log::info!("Projection:\n{}", projection.as_text());
    log::info!("Normal:\n{}", normals.as_text());
    log::info!("MVP uniform (column-major): {:?}", mvp.data());
    log::debug!("MVP uniform is {} bytes", mvp.as_bytes().len());

    let light = PointLight {
        position: Vector3::new(1., 1., 2.),
        ..Default::default()
    };
    let corner = model.transform_point(&Vector3::new(1., 1., 1.));
    let normal = model
        .normal_matrix()
        .context("Model matrix is not invertible")?
        .multiply_point(&Vector3::Z);
    let shade = phong(
        &light,
        &PhongMaterial::default(),
        &corner,
        &normal,
        &camera.eye,
    )
    .clamp();
    log::info!("Shade at {:?}: {:?}", corner.inner, shade.as_rgba());

    Ok(())
}
