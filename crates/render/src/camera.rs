use glam::{Mat4, Vec3};
use gravwell_common::constants::CAMERA_STEP;
use gravwell_input::CameraCommand;

/// Fixed-axis scene camera driven by discrete movement commands.
///
/// The front and up vectors are set at construction and never change; there
/// is no rotation or look-around. Each command displaces the position by
/// exactly one step along the relevant axis, independent of frame timing.
#[derive(Debug, Clone, Copy)]
pub struct SceneCamera {
    pub position: Vec3,
    front: Vec3,
    up: Vec3,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    step: f32,
}

impl Default for SceneCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 20.0),
            front: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::Y,
            fov: 45.0_f32.to_radians(),
            aspect: 800.0 / 600.0,
            near: 0.1,
            far: 100.0,
            step: CAMERA_STEP,
        }
    }
}

impl SceneCamera {
    /// Forward direction, unit length.
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Strafe axis: normalized front × up.
    pub fn right(&self) -> Vec3 {
        self.front.cross(self.up).normalize()
    }

    /// Apply one discrete movement command.
    pub fn apply(&mut self, command: CameraCommand) {
        let delta = match command {
            CameraCommand::MoveForward => self.front * self.step,
            CameraCommand::MoveBackward => -self.front * self.step,
            CameraCommand::StrafeLeft => -self.right() * self.step,
            CameraCommand::StrafeRight => self.right() * self.step,
        };
        self.position += delta;
        tracing::debug!(?command, position = ?self.position, "camera moved");
    }

    /// View matrix for the current pose. Computed fresh on every call so a
    /// pose mutation can never be observed through a stale matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pose_looks_down_negative_z() {
        let cam = SceneCamera::default();
        assert_eq!(cam.position, Vec3::new(0.0, 0.0, 20.0));
        assert_eq!(cam.front(), Vec3::new(0.0, 0.0, -1.0));
        let view = cam.view_matrix();
        assert!(!view.col(0).x.is_nan());
    }

    #[test]
    fn forward_moves_exactly_half_unit_along_front() {
        let mut cam = SceneCamera::default();
        let start = cam.position;
        cam.apply(CameraCommand::MoveForward);
        assert_eq!(cam.position, start + cam.front() * 0.5);
    }

    #[test]
    fn backward_is_inverse_of_forward() {
        let mut cam = SceneCamera::default();
        let start = cam.position;
        cam.apply(CameraCommand::MoveForward);
        cam.apply(CameraCommand::MoveBackward);
        assert_eq!(cam.position, start);
    }

    #[test]
    fn strafe_uses_normalized_cross_of_front_and_up() {
        let mut cam = SceneCamera::default();
        let start = cam.position;
        let right = cam.front().cross(Vec3::Y).normalize();
        cam.apply(CameraCommand::StrafeRight);
        assert_eq!(cam.position, start + right * 0.5);
        cam.apply(CameraCommand::StrafeLeft);
        assert_eq!(cam.position, start);
    }

    #[test]
    fn strafe_axis_is_unit_length() {
        let cam = SceneCamera::default();
        assert!((cam.right().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn view_matrix_tracks_pose_immediately() {
        let mut cam = SceneCamera::default();
        let before = cam.view_matrix();
        cam.apply(CameraCommand::StrafeRight);
        let after = cam.view_matrix();
        assert_ne!(before, after, "moved pose must produce a new view matrix");
    }

    #[test]
    fn step_size_is_independent_of_repetition() {
        let mut cam = SceneCamera::default();
        let start = cam.position;
        for _ in 0..4 {
            cam.apply(CameraCommand::MoveForward);
        }
        assert_eq!(cam.position, start + cam.front() * 2.0);
    }
}
