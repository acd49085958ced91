// tests/support/mocks/mod.rs
//! In-memory adapters standing in for Postgres, the token backend and the
//! media directory.
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod security;
pub mod storage;
pub mod store;
pub mod time;

pub use security::{
    ADMIN_TOKEN, AUTHOR_TOKEN, DummyPasswordHasher, DummyTokenManager, OTHER_AUTHOR_TOKEN,
    VIEWER_TOKEN, test_user,
};
pub use storage::MemoryStorage;
pub use store::{ADMIN_ID, AUTHOR_ID, InMemoryStore, OTHER_AUTHOR_ID, VIEWER_ID};
pub use time::{TestClock, fixed_now};
