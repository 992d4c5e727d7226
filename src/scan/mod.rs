mod walker;

pub use walker::{basename_is, walk};
