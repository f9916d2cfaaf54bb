pub mod settings;
pub mod status;
pub mod store;
pub mod tracker;
