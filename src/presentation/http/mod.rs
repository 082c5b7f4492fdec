// src/presentation/http/mod.rs
pub mod controllers;
pub mod error;
pub mod response;
pub mod routes;
pub mod state;
