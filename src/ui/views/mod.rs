pub mod chapter_cover;
pub mod intro;
pub mod questions;
pub mod results;
