pub mod screen;
pub mod controller;
