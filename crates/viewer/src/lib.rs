pub mod events;
pub mod lifecycle;
pub mod selection;

pub use events::*;
pub use lifecycle::*;
pub use selection::*;
