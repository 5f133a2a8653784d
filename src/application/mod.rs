pub mod commands;
pub mod dto;
pub mod ports;
pub mod queries;
pub mod services;
