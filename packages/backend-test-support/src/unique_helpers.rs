//! Unique test data built on ULIDs.

use ulid::Ulid;

/// A display name that will not collide with other tests' data.
///
/// ```
/// use backend_test_support::unique_helpers::unique_name;
///
/// let a = unique_name("alice");
/// let b = unique_name("alice");
/// assert_ne!(a, b);
/// assert!(a.starts_with("alice-"));
/// ```
pub fn unique_name(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A photo reference shaped like an uploaded object path.
pub fn unique_photo_url(prefix: &str) -> String {
    format!("https://cdn.example.test/photos/{}-{}.png", prefix, Ulid::new())
}
