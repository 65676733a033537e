pub mod catalog;
pub mod score;
pub mod suggest;
