pub mod record;
pub mod settings;
pub mod status;
