use styles::{ALL_STYLES, MapStyle};

/// One entry in the style picker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StyleOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// The fixed style picker shown over the map. Holds nothing beyond the
/// current selection; validation is whatever the closed option set already
/// guarantees.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SelectionControl {
    selected: MapStyle,
}

impl SelectionControl {
    pub fn new() -> Self {
        Self {
            selected: MapStyle::default(),
        }
    }

    pub fn options(&self) -> [StyleOption; 4] {
        ALL_STYLES.map(|style| StyleOption {
            value: style.value(),
            label: style.label(),
        })
    }

    pub fn selected(&self) -> MapStyle {
        self.selected
    }

    /// Applies a selection value from the picker and reports the resolved
    /// style. Unrecognized values fall open to the default style.
    pub fn select(&mut self, value: &str) -> MapStyle {
        self.selected = MapStyle::from_value(value);
        self.selected
    }
}

impl Default for SelectionControl {
    fn default() -> Self {
        Self::new()
    }
}
