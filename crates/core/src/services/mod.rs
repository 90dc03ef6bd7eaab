pub mod currency_service;
pub mod status_store;
pub mod transaction_service;
