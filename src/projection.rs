//! Projection matrix construction and inverse mapping.

use nalgebra::{Matrix4, Vector3};

use crate::{
    error::Error,
    geometry::{FloatType, WorldPoint},
    viewport::Viewport,
};

/// Orthographic projection mapping `[0, width] x [0, height]` pixel space
/// onto clip space.
pub fn orthographic(width: i32, height: i32) -> Matrix4<FloatType> {
    let w = FloatType::from(width);
    let h = FloatType::from(height);
    #[rustfmt::skip]
    let m = Matrix4::new(
        2.0 / w, 0.0,     0.0,  -1.0,
        0.0,     2.0 / h, 0.0,  -1.0,
        0.0,     0.0,     -1.0, 0.0,
        0.0,     0.0,     0.0,  1.0,
    );
    m
}

/// Perspective projection from a vertical field of view in degrees.
///
/// Both clip distances are measured forward from the viewer and must be
/// positive.
pub fn perspective(
    fovy: FloatType,
    aspect: FloatType,
    z_near: FloatType,
    z_far: FloatType,
) -> Result<Matrix4<FloatType>, Error> {
    if z_near <= 0.0 || z_far <= 0.0 {
        return Err(Error::InvalidArgument(
            "z distances must be positive".to_owned(),
        ));
    }
    let f = 1.0 / (fovy.to_radians() / 2.0).tan();
    #[rustfmt::skip]
    let m = Matrix4::new(
        f / aspect, 0.0, 0.0,                               0.0,
        0.0,        f,   0.0,                               0.0,
        0.0,        0.0, (z_far + z_near) / (z_near - z_far), (2.0 * z_far * z_near) / (z_near - z_far),
        0.0,        0.0, -1.0,                              0.0,
    );
    Ok(m)
}

/// Converts window coordinates back to object coordinates.
///
/// The caller supplies the inverse model-view-projection matrix directly, so
/// no inversion happens per call. The window Y direction should normally be
/// flipped first: the graphics convention puts the origin at the bottom-left
/// corner while windowing systems use the top-left.
pub fn un_project(
    win: Vector3<FloatType>,
    inverse_model_view_projection: &Matrix4<FloatType>,
    viewport: &Viewport,
) -> WorldPoint {
    let ndc = WorldPoint::new(
        2.0 * (win.x - FloatType::from(viewport.x())) / FloatType::from(viewport.width()) - 1.0,
        2.0 * (win.y - FloatType::from(viewport.y())) / FloatType::from(viewport.height()) - 1.0,
        2.0 * win.z - 1.0,
        1.0,
    );
    inverse_model_view_projection * ndc
}
