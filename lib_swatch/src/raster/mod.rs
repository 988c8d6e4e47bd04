pub mod canvas;
pub mod compositor;
pub mod label;
pub mod noise;

pub use canvas::{Canvas, CanvasError};
pub use compositor::{composite, CompositeError};
pub use label::Label;
pub use noise::noise;
