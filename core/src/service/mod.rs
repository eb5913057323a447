pub mod dto;
pub mod import_service;
pub mod tracker_service;
