// Geometry and small numeric helpers shared by the engine and game layers

pub mod math;
pub mod rect;

pub use rect::Rect;
