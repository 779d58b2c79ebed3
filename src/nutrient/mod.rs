pub mod catalog;
pub mod nutrition_info;
pub mod projector;
