// src/application/ports/mod.rs
pub mod security;
pub mod storage;
pub mod time;
pub mod util;

pub type PasswordHasherPort = dyn security::PasswordHasher;
pub type TokenManagerPort = dyn security::TokenManager;
pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
pub type FileStoragePort = dyn storage::FileStorage;
