pub mod config;
pub mod cycle;
pub mod init;
pub mod list;
pub mod path;
pub mod sheet;
pub mod travel;
