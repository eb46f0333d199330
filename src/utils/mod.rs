pub mod id;
pub mod text;

pub use id::{IdGenerator, SequentialIds, UuidGenerator, generate_uuid};
pub use text::{truncate_string, wrap_text_lines};
