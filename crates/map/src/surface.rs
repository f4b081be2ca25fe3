use foundation::math::Mat4;

use crate::camera::MapCamera;
use crate::layer::{CustomLayer, LayerError, RenderContext};
use crate::options::MapOptions;

#[derive(Debug)]
pub enum MapError {
    /// Style endpoints must be absolute HTTPS URLs.
    InvalidStyleUrl(String),
    /// The surface has no drawable area.
    ContextUnavailable { width_px: u32, height_px: u32 },
    /// A custom layer refused to attach.
    Layer(LayerError),
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::InvalidStyleUrl(url) => write!(f, "invalid style url: {url}"),
            MapError::ContextUnavailable {
                width_px,
                height_px,
            } => {
                write!(f, "no drawable area ({width_px}x{height_px})")
            }
            MapError::Layer(e) => write!(f, "layer attach failed: {e}"),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapError::Layer(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LayerError> for MapError {
    fn from(e: LayerError) -> Self {
        MapError::Layer(e)
    }
}

/// Load state of the style configuration backing the surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Removed,
}

type LoadCallback = Box<dyn FnOnce(&mut MapSurface)>;

/// The live map surface: one style endpoint, one camera, and the custom
/// layers drawn into its frames.
///
/// Fetching and parsing the style configuration is outside this surface;
/// the host signals completion through [`MapSurface::notify_style_loaded`],
/// which fires the deferred load callbacks.
pub struct MapSurface {
    options: MapOptions,
    camera: MapCamera,
    ctx: RenderContext,
    state: LoadState,
    layers: Vec<Box<dyn CustomLayer>>,
    on_load: Vec<LoadCallback>,
    frames_rendered: u64,
}

impl std::fmt::Debug for MapSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapSurface")
            .field("options", &self.options)
            .field("camera", &self.camera)
            .field("ctx", &self.ctx)
            .field("state", &self.state)
            .field("layers", &self.layers.len())
            .field("on_load", &self.on_load.len())
            .field("frames_rendered", &self.frames_rendered)
            .finish()
    }
}

impl MapSurface {
    pub fn new(options: MapOptions) -> Result<Self, MapError> {
        if !options.style_url.starts_with("https://") {
            return Err(MapError::InvalidStyleUrl(options.style_url));
        }
        let ctx = RenderContext::new(options.width_px, options.height_px);
        if !ctx.has_area() {
            return Err(MapError::ContextUnavailable {
                width_px: ctx.width_px,
                height_px: ctx.height_px,
            });
        }
        let camera = MapCamera::new(
            options.center(),
            options.zoom,
            options.pitch_deg,
            options.width_px,
            options.height_px,
        );
        Ok(Self {
            options,
            camera,
            ctx,
            state: LoadState::Loading,
            layers: Vec::new(),
            on_load: Vec::new(),
            frames_rendered: 0,
        })
    }

    pub fn style_url(&self) -> &str {
        &self.options.style_url
    }

    pub fn load_state(&self) -> LoadState {
        self.state
    }

    pub fn camera(&self) -> &MapCamera {
        &self.camera
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Registers a callback for when the style configuration has loaded.
    /// Runs immediately if it already has; dropped if the map was removed.
    pub fn on_load(&mut self, f: impl FnOnce(&mut MapSurface) + 'static) {
        match self.state {
            LoadState::Loading => self.on_load.push(Box::new(f)),
            LoadState::Loaded => f(self),
            LoadState::Removed => {}
        }
    }

    /// Called by the host once the style configuration has resolved; fires
    /// pending load callbacks in registration order.
    pub fn notify_style_loaded(&mut self) {
        if self.state != LoadState::Loading {
            return;
        }
        self.state = LoadState::Loaded;
        for f in std::mem::take(&mut self.on_load) {
            f(self);
        }
    }

    /// Attaches a custom layer, invoking its attach hook with the map's
    /// rendering context. The layer is not kept if the hook fails.
    pub fn add_layer(&mut self, mut layer: Box<dyn CustomLayer>) -> Result<(), MapError> {
        layer.on_add(&self.ctx)?;
        self.layers.push(layer);
        Ok(())
    }

    /// Renders one frame, forwarding the current projection matrix into
    /// every attached layer. Returns the matrix used, or `None` when the
    /// style has not finished loading (or the map was removed).
    pub fn render_frame(&mut self) -> Option<Mat4> {
        if self.state != LoadState::Loaded {
            return None;
        }
        let projection = self.camera.projection_matrix();
        for layer in &mut self.layers {
            layer.render(&self.ctx, projection);
        }
        self.frames_rendered += 1;
        Some(projection)
    }

    pub fn resize(&mut self, width_px: u32, height_px: u32) {
        self.ctx = RenderContext::new(width_px, height_px);
        self.camera.set_size(width_px, height_px);
    }

    /// Removes the map, dropping all layers and pending load callbacks.
    pub fn remove(&mut self) {
        self.state = LoadState::Removed;
        self.layers.clear();
        self.on_load.clear();
    }
}
