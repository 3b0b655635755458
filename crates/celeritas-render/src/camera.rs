//! Camera system for view and projection matrix generation.

use glam::{Mat3, Mat4, Quat, Vec3};

/// A perspective camera that generates view and projection matrices.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Position in world space.
    pub position: Vec3,
    /// Rotation as a unit quaternion.
    pub rotation: Quat,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width / height.
    pub aspect_ratio: f32,
    /// Near clip plane distance (always positive).
    pub near: f32,
    /// Far clip plane distance (always positive, > near).
    pub far: f32,
}

impl Camera {
    /// Compute the view matrix (inverse of camera transform).
    pub fn view_matrix(&self) -> Mat4 {
        let rotation_matrix = Mat4::from_quat(self.rotation);
        let translation_matrix = Mat4::from_translation(self.position);
        // View = inverse(Translation * Rotation)
        (translation_matrix * rotation_matrix).inverse()
    }

    /// Compute the perspective projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect_ratio, self.near, self.far)
    }

    /// Compute the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// The forward direction vector (-Z in camera space).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// The up direction vector (+Y in camera space).
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// The right direction vector (+X in camera space).
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Orient the camera to look at a world-space target point.
    ///
    /// The target must not coincide with the camera position; a degenerate
    /// direction leaves the rotation unchanged.
    pub fn look_at(&mut self, target: Vec3) {
        let Some(forward) = (target - self.position).try_normalize() else {
            return;
        };
        // When the view direction is (anti)parallel to world up, fall back
        // to +X as the reference up to keep the basis well-formed.
        let world_up = if forward.abs_diff_eq(Vec3::Y, 1e-6) || forward.abs_diff_eq(Vec3::NEG_Y, 1e-6)
        {
            Vec3::X
        } else {
            Vec3::Y
        };
        let right = forward.cross(world_up).normalize();
        let camera_up = right.cross(forward).normalize();

        let rotation_mat = Mat3::from_cols(right, camera_up, -forward);
        self.rotation = Quat::from_mat3(&rotation_mat);
    }

    /// Set the near clip plane distance.
    pub fn set_near_clip(&mut self, near: f32) {
        self.near = near;
    }

    /// Update the aspect ratio from surface dimensions.
    pub fn set_aspect_ratio(&mut self, width: f32, height: f32) {
        self.aspect_ratio = width / height.max(1.0);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            fov_y: std::f32::consts::FRAC_PI_4, // 45 degrees
            aspect_ratio: 4.0 / 3.0,
            near: 0.1,
            far: 10000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_camera_looks_down_neg_z() {
        let camera = Camera::default();
        let forward = camera.forward();
        assert!((forward.x).abs() < 1e-6);
        assert!((forward.y).abs() < 1e-6);
        assert!((forward.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_look_at_straight_ahead_keeps_neg_z() {
        let mut camera = Camera::default();
        camera.position = Vec3::ZERO;
        camera.look_at(Vec3::new(0.0, 0.0, -300.0));

        let forward = camera.forward();
        assert!((forward - Vec3::NEG_Z).length() < 1e-5);
        assert!((camera.up() - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn test_look_at_produces_orthonormal_basis() {
        let mut camera = Camera::default();
        camera.position = Vec3::new(10.0, 5.0, -3.0);
        camera.look_at(Vec3::new(-7.0, 2.0, 40.0));

        let f = camera.forward();
        let u = camera.up();
        let r = camera.right();

        assert!((f.length() - 1.0).abs() < 1e-5);
        assert!((u.length() - 1.0).abs() < 1e-5);
        assert!((r.length() - 1.0).abs() < 1e-5);
        assert!(f.dot(u).abs() < 1e-5);
        assert!(f.dot(r).abs() < 1e-5);
        assert!(u.dot(r).abs() < 1e-5);

        // Forward actually points at the target.
        let to_target = (Vec3::new(-7.0, 2.0, 40.0) - camera.position).normalize();
        assert!((f - to_target).length() < 1e-5);
    }

    #[test]
    fn test_look_at_self_is_a_no_op() {
        let mut camera = Camera::default();
        let before = camera.rotation;
        camera.look_at(camera.position);
        assert_eq!(camera.rotation, before);
    }

    #[test]
    fn test_look_straight_up_is_well_formed() {
        let mut camera = Camera::default();
        camera.look_at(Vec3::new(0.0, 100.0, 0.0));
        let f = camera.forward();
        assert!((f - Vec3::Y).length() < 1e-4);
        assert!((f.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_set_near_clip() {
        let mut camera = Camera::default();
        camera.set_near_clip(5.0);
        assert_eq!(camera.near, 5.0);
    }

    #[test]
    fn test_projection_matrix_aspect_ratio() {
        let mut camera = Camera::default();
        camera.set_aspect_ratio(1920.0, 1080.0);
        assert!((camera.aspect_ratio - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_view_matrix_inverse_is_camera_transform() {
        let camera = Camera {
            position: Vec3::new(10.0, 20.0, 30.0),
            rotation: Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            ..Camera::default()
        };
        let view = camera.view_matrix();
        let inv_view = view.inverse();

        // The inverse view matrix should reconstruct the camera's world
        // transform; column 3 is the camera position.
        let reconstructed_pos = inv_view.col(3).truncate();
        assert!((reconstructed_pos - camera.position).length() < 1e-4);
    }

    #[test]
    fn test_view_projection_combines_correctly() {
        let camera = Camera::default();
        let vp = camera.view_projection_matrix();
        let expected = camera.projection_matrix() * camera.view_matrix();
        for col in 0..4 {
            for row in 0..4 {
                assert!(
                    (vp.col(col)[row] - expected.col(col)[row]).abs() < 1e-6,
                    "mismatch at col={col}, row={row}"
                );
            }
        }
    }
}
