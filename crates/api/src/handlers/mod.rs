pub mod admin;
pub mod recipes;
