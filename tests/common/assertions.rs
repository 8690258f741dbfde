//! Custom assertion macros
//!
//! Failure messages include the response body, which usually says why a
//! request was rejected.

/// Assert the status of a `TestResponse`
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status,
            $status,
            "unexpected status, body: {}",
            $response.text()
        );
    };
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
