pub mod core;
pub mod layout;
pub mod main;
pub mod prediction;
pub mod render;
pub mod run_effect;
pub mod upload;
pub mod view_model;

#[cfg(test)]
mod tests;
