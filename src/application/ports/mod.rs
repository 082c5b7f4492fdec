// src/application/ports/mod.rs
pub mod security;
pub mod time;
pub mod util;

pub type PasswordHasherPort = dyn security::PasswordHasher;
pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
