use foundation::math::Mat4;
use map::layer::{LayerError, RenderContext};

use crate::adapter::OVERLAY_LAYER_ID;
use crate::scene::{OverlayFrame, OverlayScene};

/// The 3D engine bound into the map as a custom layer.
///
/// Owns the overlay scene and tracks the rendering surface size; it lives
/// strictly inside one map lifecycle, from layer attach until the owning
/// view disposes it.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayEngine {
    scene: OverlayScene,
    width_px: u32,
    height_px: u32,
    frames_rendered: u64,
}

impl OverlayEngine {
    /// Binds a new engine to the map's rendering context.
    pub fn new(ctx: &RenderContext) -> Result<Self, LayerError> {
        if !ctx.has_area() {
            return Err(LayerError::ContextUnavailable {
                layer_id: OVERLAY_LAYER_ID.to_string(),
            });
        }
        Ok(Self {
            scene: OverlayScene::new(),
            width_px: ctx.width_px,
            height_px: ctx.height_px,
            frames_rendered: 0,
        })
    }

    pub fn scene(&self) -> &OverlayScene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut OverlayScene {
        &mut self.scene
    }

    pub fn surface_size(&self) -> (u32, u32) {
        (self.width_px, self.height_px)
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Matches the 3D rendering surface to the map's pixel dimensions.
    pub fn resize(&mut self, width_px: u32, height_px: u32) {
        self.width_px = width_px;
        self.height_px = height_px;
    }

    /// Renders one frame with the camera locked to the map's projection.
    pub fn render(&mut self, projection: Mat4) -> OverlayFrame {
        self.scene.camera.freeze_projection(projection);
        self.frames_rendered += 1;
        self.scene.render()
    }
}

#[cfg(test)]
mod tests {
    use foundation::math::Mat4;
    use map::layer::{LayerError, RenderContext};
    use pretty_assertions::assert_eq;

    use super::OverlayEngine;
    use crate::scene::OverlayCommand;

    #[test]
    fn refuses_a_zero_area_context() {
        let err = OverlayEngine::new(&RenderContext::new(0, 720)).unwrap_err();
        assert!(matches!(err, LayerError::ContextUnavailable { .. }));
    }

    #[test]
    fn render_freezes_the_supplied_projection() {
        let mut engine = OverlayEngine::new(&RenderContext::new(1280, 720)).unwrap();
        let projection = Mat4::translation(1.0, 2.0, 3.0);

        let frame = engine.render(projection);
        assert_eq!(
            frame.commands[0],
            OverlayCommand::SetProjection(projection)
        );
        assert_eq!(engine.scene().camera.projection(), Some(projection));
        assert_eq!(engine.frames_rendered(), 1);
    }

    #[test]
    fn resize_tracks_the_map_surface() {
        let mut engine = OverlayEngine::new(&RenderContext::new(1280, 720)).unwrap();
        engine.resize(1920, 1080);
        assert_eq!(engine.surface_size(), (1920, 1080));
    }
}
