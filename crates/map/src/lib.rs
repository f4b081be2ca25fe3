pub mod camera;
pub mod layer;
pub mod options;
pub mod surface;

pub use camera::*;
pub use layer::*;
pub use options::*;
pub use surface::*;
