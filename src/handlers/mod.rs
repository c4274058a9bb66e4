pub mod images;
pub mod recipes;
