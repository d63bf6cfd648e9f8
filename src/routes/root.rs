use crate::config::GREETING;

/// Greeting served at the site root.
pub async fn index() -> &'static str {
    GREETING
}
