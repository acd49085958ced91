// src/presentation/http/controllers/mod.rs
pub mod admin;
pub mod auth;
pub mod content;
pub mod pages;
pub mod profile;
