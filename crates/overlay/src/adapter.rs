use std::cell::RefCell;
use std::rc::Rc;

use foundation::math::Mat4;
use map::layer::{CustomLayer, LayerError, RenderContext};

use crate::engine::OverlayEngine;

/// Identifier of the custom layer the overlay registers on the map.
pub const OVERLAY_LAYER_ID: &str = "3d-model";

/// Shared handle to the engine, so the owning lifecycle can resize and
/// dispose it outside the layer hooks. `None` until the layer attaches,
/// and again after disposal.
pub type EngineHandle = Rc<RefCell<Option<OverlayEngine>>>;

pub fn engine_handle() -> EngineHandle {
    Rc::new(RefCell::new(None))
}

/// Bridges the map's custom-layer contract to the overlay engine: creates
/// the engine when the layer attaches, and relays the map's projection
/// matrix into it every rendered frame.
pub struct OverlayLayerAdapter {
    engine: EngineHandle,
}

impl OverlayLayerAdapter {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }
}

impl CustomLayer for OverlayLayerAdapter {
    fn id(&self) -> &str {
        OVERLAY_LAYER_ID
    }

    fn on_add(&mut self, ctx: &RenderContext) -> Result<(), LayerError> {
        let engine = OverlayEngine::new(ctx)?;
        *self.engine.borrow_mut() = Some(engine);
        Ok(())
    }

    fn render(&mut self, _ctx: &RenderContext, projection: Mat4) {
        let mut slot = self.engine.borrow_mut();
        if let Some(engine) = slot.as_mut() {
            engine.render(projection);
        }
    }
}
