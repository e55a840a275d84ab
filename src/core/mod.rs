pub mod calculator;
pub mod cycle;
pub mod logic;
pub mod render;
