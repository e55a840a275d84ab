pub mod duration;
pub mod timeline;
pub mod travel;
