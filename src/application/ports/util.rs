// src/application/ports/util.rs
/// Turns free text into a URL-safe token. Implementations must be pure:
/// lower-case ASCII alphanumerics joined by single hyphens, no leading or
/// trailing hyphen, empty when nothing sluggable remains.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
