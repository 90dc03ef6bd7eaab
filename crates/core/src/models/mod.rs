pub mod group;
pub mod settings;
pub mod status;
pub mod transaction;
