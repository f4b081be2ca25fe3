use foundation::math::Mat4;

/// Handle to the map's rendering context, handed to custom layers when they
/// attach.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub width_px: u32,
    pub height_px: u32,
}

impl RenderContext {
    pub fn new(width_px: u32, height_px: u32) -> Self {
        Self {
            width_px,
            height_px,
        }
    }

    pub fn has_area(&self) -> bool {
        self.width_px > 0 && self.height_px > 0
    }
}

/// Error raised when a custom layer fails to attach to the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerError {
    /// The rendering context cannot host the layer.
    ContextUnavailable { layer_id: String },
}

impl std::fmt::Display for LayerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerError::ContextUnavailable { layer_id } => {
                write!(f, "rendering context unavailable for layer {layer_id}")
            }
        }
    }
}

impl std::error::Error for LayerError {}

/// Extension point letting external rendering code draw into the map's
/// frame.
pub trait CustomLayer {
    fn id(&self) -> &str;

    /// Invoked once when the layer is added to the map.
    fn on_add(&mut self, ctx: &RenderContext) -> Result<(), LayerError>;

    /// Invoked once per rendered frame with the map's current projection
    /// matrix.
    fn render(&mut self, ctx: &RenderContext, projection: Mat4);
}
