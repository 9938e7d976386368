use super::{cross, normalize, Mat4, Vec3, Vec4};

/// View matrix for a camera at `eye` looking at `target`.
///
/// View space is right-handed: the camera looks down -Z, +X is to its right and
/// +Y is `world_up` projected onto the image plane. The matrix first translates
/// by `-eye`, then rotates world axes into the camera basis.
///
/// `eye - target` must not be zero or parallel to `world_up`; otherwise the basis
/// is non-finite.
pub fn look_at(eye: Vec3, target: Vec3, world_up: Vec3) -> Mat4 {
    // Points from the target back toward the camera.
    let forward = normalize(eye - target);
    let right = normalize(cross(world_up, forward));
    let up = normalize(cross(forward, right));

    // Basis vectors are the rows of the rotation (inverse of the camera orientation).
    let rotation = Mat4::from_cols(
        Vec4::new(right.x, up.x, forward.x, 0.0),
        Vec4::new(right.y, up.y, forward.y, 0.0),
        Vec4::new(right.z, up.z, forward.z, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    );

    rotation * Mat4::from_translation(-eye)
}

/// Right-handed perspective projection with OpenGL clip depth.
///
/// `fov_y` is the vertical field of view in radians and must lie in `(0, π)`.
/// View-space `z = -near` maps to NDC depth `-1` and `z = -far` to `+1`.
/// `near == far` divides by zero and yields a non-finite matrix.
pub fn perspective(fov_y: f32, aspect_ratio: f32, near: f32, far: f32) -> Mat4 {
    let tan_half = (fov_y / 2.0).tan();
    let depth = far - near;

    let mut m = Mat4::ZERO;
    m.col[0].x = 1.0 / (aspect_ratio * tan_half);
    m.col[1].y = 1.0 / tan_half;
    m.col[2].z = -(far + near) / depth;
    m.col[2].w = -1.0;
    m.col[3].z = -(2.0 * far * near) / depth;
    m
}

/// Rotation by Euler angles in radians, composed as `rx * ry * rz`.
///
/// Under column vectors this applies the Z rotation first, then Y, then X. Each
/// elemental rotation is counter-clockwise when looking from the positive axis
/// toward the origin, e.g. `rotate(π/2, 0, 0)` takes +Y to +Z. Z follows the
/// same rule: `rotate(0, 0, π/2)` takes +X to +Y.
pub fn rotate(x_rad: f32, y_rad: f32, z_rad: f32) -> Mat4 {
    let mut rx = Mat4::IDENTITY;
    let mut ry = Mat4::IDENTITY;
    let mut rz = Mat4::IDENTITY;

    // A zero angle leaves the identity in place; same matrix as cos(0)/sin(0).
    if x_rad != 0.0 {
        let (s, c) = x_rad.sin_cos();
        rx.col[1] = Vec4::new(0.0, c, s, 0.0);
        rx.col[2] = Vec4::new(0.0, -s, c, 0.0);
    }
    if y_rad != 0.0 {
        let (s, c) = y_rad.sin_cos();
        ry.col[0] = Vec4::new(c, 0.0, -s, 0.0);
        ry.col[2] = Vec4::new(s, 0.0, c, 0.0);
    }
    if z_rad != 0.0 {
        let (s, c) = z_rad.sin_cos();
        // Counter-clockwise about +Z, same handedness as X and Y.
        rz.col[0] = Vec4::new(c, s, 0.0, 0.0);
        rz.col[1] = Vec4::new(-s, c, 0.0, 0.0);
    }

    (rx * ry) * rz
}
