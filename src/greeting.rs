//! The welcome message.

/// What `GET /` says.
pub const WELCOME_MESSAGE: &str = "Welcome to CI/CD 101 using CircleCI!";

/// Returns the welcome message.
///
/// Takes nothing, never fails, and has no side effects. The entire
/// behavioral surface of the application lives here, which is what makes it
/// a good pipeline subject: any test failure is a pipeline problem, not an
/// application mystery.
pub fn welcome() -> &'static str {
    WELCOME_MESSAGE
}
