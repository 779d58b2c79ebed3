pub mod controller;
pub mod image_source;
