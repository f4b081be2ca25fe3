/// What happened during a view lifecycle cycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LifecycleEventKind {
    StyleChanged,
    MapCreated,
    MapRemoved,
    OverlayAttached,
    OverlayDisposed,
    OverlayResized,
    StaleLoadIgnored,
}

/// One recorded lifecycle event, tagged with the construction cycle it
/// belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleEvent {
    pub generation: u64,
    pub kind: LifecycleEventKind,
    pub detail: String,
}

/// Append-only record of everything the view constructed, disposed, and
/// ignored. This is the instrumentation the lifecycle invariants are
/// checked against.
#[derive(Debug, Default)]
pub struct LifecycleLog {
    events: Vec<LifecycleEvent>,
}

impl LifecycleLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, generation: u64, kind: LifecycleEventKind, detail: impl Into<String>) {
        self.events.push(LifecycleEvent {
            generation,
            kind,
            detail: detail.into(),
        });
    }

    pub fn events(&self) -> &[LifecycleEvent] {
        &self.events
    }

    pub fn count(&self, kind: LifecycleEventKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }

    pub fn drain(&mut self) -> Vec<LifecycleEvent> {
        std::mem::take(&mut self.events)
    }
}
