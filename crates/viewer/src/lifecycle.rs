use foundation::math::Mat4;
use map::{LoadState, MapError, MapOptions, MapSurface};
use overlay::{EngineHandle, OVERLAY_LAYER_ID, OverlayLayerAdapter, engine_handle};
use styles::MapStyle;

use crate::events::{LifecycleEventKind, LifecycleLog};

/// Tags one construction cycle. Completing a load with a stale ticket
/// attaches nothing; the stale cycle's map was already disposed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
}

/// The styled map view: at most one live map surface, keyed on the selected
/// style, with the 3D overlay bound in as a custom layer.
///
/// Changing the style fully disposes the previous map and its overlay
/// engine before the replacement is constructed; the two never coexist.
pub struct MapView {
    style: MapStyle,
    base: MapOptions,
    generation: u64,
    map: Option<MapSurface>,
    engine: EngineHandle,
    log: LifecycleLog,
}

impl MapView {
    /// Mounts the view with the default viewport.
    pub fn mount(style: MapStyle) -> Result<(Self, LoadTicket), MapError> {
        Self::mount_with(style, MapOptions::new(style.style_url()))
    }

    /// Mounts the view with an explicit viewport; the style endpoint in
    /// `base` is replaced on every construction cycle.
    pub fn mount_with(style: MapStyle, base: MapOptions) -> Result<(Self, LoadTicket), MapError> {
        let mut view = Self {
            style,
            base,
            generation: 0,
            map: None,
            engine: engine_handle(),
            log: LifecycleLog::new(),
        };
        let ticket = view.activate()?;
        Ok((view, ticket))
    }

    pub fn style(&self) -> MapStyle {
        self.style
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_mounted(&self) -> bool {
        self.map.is_some()
    }

    pub fn map(&self) -> Option<&MapSurface> {
        self.map.as_ref()
    }

    pub fn engine(&self) -> &EngineHandle {
        &self.engine
    }

    pub fn log(&self) -> &LifecycleLog {
        &self.log
    }

    /// Switches the selected style.
    ///
    /// Reselecting the live style is a no-op and returns `None`. Otherwise
    /// the previous map and overlay engine are disposed, strictly before
    /// the replacement map is constructed, and the new cycle's ticket is
    /// returned.
    pub fn set_style(&mut self, style: MapStyle) -> Result<Option<LoadTicket>, MapError> {
        if self.map.is_some() && style == self.style {
            return Ok(None);
        }
        self.style = style;
        self.deactivate();
        self.log
            .emit(self.generation, LifecycleEventKind::StyleChanged, style.value());
        let ticket = self.activate()?;
        Ok(Some(ticket))
    }

    /// Completes the asynchronous style load for one construction cycle:
    /// marks the map loaded and attaches the overlay layer. A ticket from
    /// a superseded cycle is recorded and ignored.
    pub fn finish_load(&mut self, ticket: LoadTicket) -> Result<(), MapError> {
        if ticket.generation != self.generation || self.map.is_none() {
            self.log.emit(
                self.generation,
                LifecycleEventKind::StaleLoadIgnored,
                format!("ticket generation {}", ticket.generation),
            );
            return Ok(());
        }
        let adapter = OverlayLayerAdapter::new(self.engine.clone());
        let Some(map) = self.map.as_mut() else {
            return Ok(());
        };
        // Duplicate completion of an already-loaded cycle attaches nothing.
        if map.load_state() != LoadState::Loading {
            return Ok(());
        }
        map.notify_style_loaded();
        map.add_layer(Box::new(adapter))?;
        self.log.emit(
            self.generation,
            LifecycleEventKind::OverlayAttached,
            OVERLAY_LAYER_ID,
        );
        Ok(())
    }

    /// Forwards a window resize into the live map and overlay engine. Does
    /// nothing after unmount.
    pub fn viewport_resized(&mut self, width_px: u32, height_px: u32) {
        let Some(map) = self.map.as_mut() else {
            return;
        };
        map.resize(width_px, height_px);
        self.base.width_px = width_px;
        self.base.height_px = height_px;

        let resized = {
            let mut slot = self.engine.borrow_mut();
            match slot.as_mut() {
                Some(engine) => {
                    engine.resize(width_px, height_px);
                    true
                }
                None => false,
            }
        };
        if resized {
            self.log.emit(
                self.generation,
                LifecycleEventKind::OverlayResized,
                format!("{width_px}x{height_px}"),
            );
        }
    }

    /// Renders one frame of the live map (and through it the overlay).
    pub fn render_frame(&mut self) -> Option<Mat4> {
        self.map.as_mut()?.render_frame()
    }

    /// Unmounts the view, disposing the overlay engine and the map.
    pub fn unmount(&mut self) {
        self.deactivate();
    }

    fn activate(&mut self) -> Result<LoadTicket, MapError> {
        debug_assert!(self.map.is_none(), "activation requires prior disposal");
        self.generation += 1;
        let mut options = self.base.clone();
        options.style_url = self.style.style_url();
        let map = MapSurface::new(options)?;
        self.log.emit(
            self.generation,
            LifecycleEventKind::MapCreated,
            map.style_url().to_string(),
        );
        self.map = Some(map);
        Ok(LoadTicket {
            generation: self.generation,
        })
    }

    fn deactivate(&mut self) {
        let disposed = self.engine.borrow_mut().take();
        if let Some(engine) = disposed {
            self.log.emit(
                self.generation,
                LifecycleEventKind::OverlayDisposed,
                format!("{} frames rendered", engine.frames_rendered()),
            );
        }
        if let Some(mut map) = self.map.take() {
            map.remove();
            self.log.emit(
                self.generation,
                LifecycleEventKind::MapRemoved,
                map.style_url().to_string(),
            );
        }
    }
}
