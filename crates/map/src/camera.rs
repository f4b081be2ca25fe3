use foundation::geo::{LngLat, mercator_x, mercator_y};
use foundation::math::Mat4;

/// Tile size used to scale the Mercator world, in pixels.
const TILE_SIZE: f64 = 512.0;

/// Vertical field of view of the map camera, in radians (~36.87 degrees).
const FOV_Y_RAD: f64 = 0.643_501_108_793_284_4;

/// Near clipping distance in world pixels.
const NEAR: f64 = 0.1;

/// Perspective camera over the Web Mercator plane.
///
/// World coordinates are Mercator pixels at the current zoom: the world is
/// a square of side `TILE_SIZE * 2^zoom` with the origin at the northwest
/// corner and Y growing southward.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MapCamera {
    pub center: LngLat,
    pub zoom: f64,
    pub pitch_deg: f64,
    width_px: u32,
    height_px: u32,
}

impl MapCamera {
    pub fn new(center: LngLat, zoom: f64, pitch_deg: f64, width_px: u32, height_px: u32) -> Self {
        Self {
            center,
            zoom,
            pitch_deg,
            width_px,
            height_px,
        }
    }

    pub fn set_size(&mut self, width_px: u32, height_px: u32) {
        self.width_px = width_px;
        self.height_px = height_px;
    }

    /// Side of the square Mercator world at the current zoom, in pixels.
    pub fn world_size(&self) -> f64 {
        TILE_SIZE * 2.0_f64.powf(self.zoom)
    }

    /// Distance from the camera to the map center, in world pixels. Chosen
    /// so one world pixel at the center spans one screen pixel.
    pub fn camera_to_center_distance(&self) -> f64 {
        0.5 * f64::from(self.height_px) / (0.5 * FOV_Y_RAD).tan()
    }

    /// View-projection matrix handed to custom layers each frame.
    pub fn projection_matrix(&self) -> Mat4 {
        let world = self.world_size();
        let cx = mercator_x(self.center.lon) * world;
        let cy = mercator_y(self.center.lat) * world;
        let dist = self.camera_to_center_distance();
        let aspect = f64::from(self.width_px) / f64::from(self.height_px);
        // Far plane past the whole world so pitched views keep the ground
        // in the frustum.
        let far = dist + world;

        Mat4::perspective(FOV_Y_RAD, aspect, NEAR, far)
            * Mat4::translation(0.0, 0.0, -dist)
            * Mat4::rotation_x(self.pitch_deg.to_radians())
            * Mat4::translation(-cx, -cy, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::MapCamera;
    use foundation::geo::{LngLat, mercator_x, mercator_y};

    fn camera() -> MapCamera {
        MapCamera::new(LngLat::new(148.9819, -35.3981), 18.0, 0.0, 1280, 720)
    }

    #[test]
    fn center_projects_to_screen_center_without_pitch() {
        let cam = camera();
        let world = cam.world_size();
        let center = [
            mercator_x(cam.center.lon) * world,
            mercator_y(cam.center.lat) * world,
            0.0,
        ];
        let ndc = cam.projection_matrix().transform_point(center);
        assert!(ndc[0].abs() < 1e-9, "ndc x = {}", ndc[0]);
        assert!(ndc[1].abs() < 1e-9, "ndc y = {}", ndc[1]);
    }

    #[test]
    fn zoom_doubles_the_world() {
        let mut cam = camera();
        let w0 = cam.world_size();
        cam.zoom += 1.0;
        assert_eq!(cam.world_size(), 2.0 * w0);
    }

    #[test]
    fn pitch_changes_the_projection() {
        let flat = camera().projection_matrix();
        let mut pitched = camera();
        pitched.pitch_deg = 60.0;
        assert_ne!(pitched.projection_matrix(), flat);
    }

    #[test]
    fn resize_changes_the_projection() {
        let mut cam = camera();
        let before = cam.projection_matrix();
        cam.set_size(1920, 1080);
        assert_ne!(cam.projection_matrix(), before);
    }
}
