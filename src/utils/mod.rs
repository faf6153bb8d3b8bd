pub mod paths;

pub use paths::{expand_tilde, format_path_with_tilde};
