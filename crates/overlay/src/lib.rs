pub mod adapter;
pub mod engine;
pub mod scene;

pub use adapter::*;
pub use engine::*;
pub use scene::*;
