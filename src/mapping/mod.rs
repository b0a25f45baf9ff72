pub mod floor;
pub mod projects;

pub use floor::*;
pub use projects::*;
