//! Board state ownership and drag-and-drop

pub mod controller;
pub mod drag;

pub use controller::BoardController;
pub use drag::{DragContext, DragEvent};
