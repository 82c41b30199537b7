mod buffer_layout;
mod color;
mod error;
pub mod geometry;
mod matrix_stack;
pub mod projection;
mod viewport;

pub use buffer_layout::{BufferLayout, BufferLayoutBuilder, BufferRegion, DataType};
pub use color::{Rgba, rgba_from_array, rgba_to_array};
pub use error::Error;
pub use matrix_stack::MatrixStack;
pub use viewport::Viewport;
