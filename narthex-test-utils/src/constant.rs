//! Standard constant values shared by tests. None of these are real
//! credentials.

/// Plaintext password every fixture user is created with.
pub static TEST_PASSWORD: &str = "correct-horse";

/// Signing secret for tokens issued during tests.
pub static TEST_JWT_SECRET: &str = "test-jwt-secret";
