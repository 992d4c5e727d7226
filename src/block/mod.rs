mod extractor;
mod script;

pub use extractor::{extract, DocBlock};
pub use script::contains_japanese;
