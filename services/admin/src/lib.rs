pub mod config;
pub mod domain;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod infra;
pub mod mapper;
pub mod router;
pub mod state;
pub mod usecase;
