use crate::math::{cross, look_at, normalize, Mat4, Vec3};

use super::MoveControls;

/// Camera that translates freely along its own axes without rotating.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlyCamera {
    pub position: Vec3,

    /// Unit view direction.
    pub direction: Vec3,

    /// World up used for the view basis and for vertical movement.
    pub world_up: Vec3,

    /// Movement speed in world units per second.
    pub speed: f32,
}

impl Default for FlyCamera {
    /// One unit in front of the origin, looking down -Z.
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 1.0),
            direction: Vec3::new(0.0, 0.0, -1.0),
            world_up: Vec3::Y,
            speed: 5.0,
        }
    }
}

impl FlyCamera {
    /// `direction` must be non-zero and not parallel to +Y.
    pub fn new(position: Vec3, direction: Vec3) -> Self {
        Self {
            position,
            direction: normalize(direction),
            ..Self::default()
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Camera-right axis in world space. Not normalized; it has the length of
    /// `direction × world_up`, which is 1 while the camera stays horizontal.
    #[inline]
    pub fn strafe_axis(&self) -> Vec3 {
        cross(self.direction, self.world_up)
    }

    /// Advances the position by `dt` seconds of movement.
    ///
    /// Opposing controls cancel out.
    pub fn update(&mut self, controls: MoveControls, dt: f32) {
        let step = dt * self.speed;

        if controls.forward {
            self.position += self.direction * step;
        }
        if controls.left {
            self.position -= self.strafe_axis() * step;
        }
        if controls.back {
            self.position -= self.direction * step;
        }
        if controls.right {
            self.position += self.strafe_axis() * step;
        }
        if controls.up {
            self.position += self.world_up * step;
        }
        if controls.down {
            self.position -= self.world_up * step;
        }
    }

    /// View matrix for the current state.
    pub fn view(&self) -> Mat4 {
        look_at(self.position, self.position + self.direction, self.world_up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Projection;
    use crate::coords::Viewport;
    use crate::math::Vec4;

    const DT: f32 = 0.25; // step of 1.25 at default speed

    fn moved(controls: MoveControls) -> Vec3 {
        let mut cam = FlyCamera::default();
        cam.update(controls, DT);
        cam.position
    }

    #[test]
    fn forward_moves_along_direction() {
        let p = moved(MoveControls { forward: true, ..Default::default() });
        assert_eq!(p, Vec3::new(0.0, 0.0, -0.25));
    }

    #[test]
    fn strafing_moves_along_x() {
        let right = MoveControls { right: true, ..Default::default() };
        let left = MoveControls { left: true, ..Default::default() };
        assert_eq!(moved(right), Vec3::new(1.25, 0.0, 1.0));
        assert_eq!(moved(left), Vec3::new(-1.25, 0.0, 1.0));
    }

    #[test]
    fn space_and_shift_move_vertically() {
        let up = MoveControls { up: true, ..Default::default() };
        let down = MoveControls { down: true, ..Default::default() };
        assert_eq!(moved(up), Vec3::new(0.0, 1.25, 1.0));
        assert_eq!(moved(down), Vec3::new(0.0, -1.25, 1.0));
    }

    #[test]
    fn opposing_controls_cancel() {
        let all = MoveControls {
            forward: true,
            left: true,
            back: true,
            right: true,
            up: true,
            down: true,
        };
        assert_eq!(moved(all), FlyCamera::default().position);
    }

    #[test]
    fn zero_dt_does_not_move() {
        let mut cam = FlyCamera::default();
        cam.update(MoveControls { forward: true, ..Default::default() }, 0.0);
        assert_eq!(cam, FlyCamera::default());
    }

    #[test]
    fn new_normalizes_direction() {
        let cam = FlyCamera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -4.0)).with_speed(2.0);
        assert_eq!(cam.direction, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(cam.speed, 2.0);
    }

    #[test]
    fn default_view_is_translation_back_one_unit() {
        let view = FlyCamera::default().view();
        assert_eq!(view, Mat4::from_translation(Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn view_follows_position() {
        let mut cam = FlyCamera::default();
        cam.update(MoveControls { right: true, ..Default::default() }, DT);

        // Origin now sits to the camera's left.
        let origin = cam.view() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(origin, Vec4::new(-1.25, 0.0, -1.0, 1.0));
    }

    #[test]
    fn triangle_at_origin_is_in_front_of_default_camera() {
        let cam = FlyCamera::default();
        let proj = Projection::default().matrix(Viewport::new(1280.0, 720.0)).unwrap();

        let clip = proj * cam.view() * Vec4::new(0.0, 0.5, 0.0, 1.0);
        assert!(clip.w > 0.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0 && ndc.z.abs() <= 1.0, "{ndc:?}");
    }
}
