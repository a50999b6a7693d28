pub mod compare_service;
