pub mod audit;
pub mod entry;
pub mod settings;
pub mod state;
pub mod target;
