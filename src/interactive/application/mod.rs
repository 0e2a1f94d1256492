pub mod navigation_service;
pub mod search_service;
