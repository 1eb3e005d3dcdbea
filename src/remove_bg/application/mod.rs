pub mod error;
pub mod remove_bg_service;
