pub mod reader;
pub mod writer;

pub use reader::{extract, read_manifest, ExtractReport};
pub use writer::{write_plain, write_with_manifest};
