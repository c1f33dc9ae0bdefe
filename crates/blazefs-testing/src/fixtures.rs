//! Common object layouts for adapter tests

use crate::memory::InMemoryClient;

/// Bucket name used by the fixtures.
pub const TEST_BUCKET: &str = "test-bucket";

/// Seed a small hierarchy exercising every listing scope: top-level
/// objects, immediate children, deeper nesting, and a sibling directory
/// sharing a string prefix with `docs`.
pub async fn seed_tree(client: &InMemoryClient) {
    client
        .insert(TEST_BUCKET, "readme.txt", "top level", Some("text/plain"))
        .await;
    client.insert(TEST_BUCKET, "logo.png", "png bytes", None).await;
    client
        .insert(TEST_BUCKET, "docs/guide.md", "guide", None)
        .await;
    client
        .insert(TEST_BUCKET, "docs/api/index.md", "api index", None)
        .await;
    client
        .insert(TEST_BUCKET, "docs/api/deep/notes.md", "notes", None)
        .await;
    client
        .insert(TEST_BUCKET, "docs-archive/old.md", "archived", None)
        .await;
}

/// Every key `seed_tree` creates, in the store's listing order.
pub fn seeded_keys() -> Vec<&'static str> {
    vec![
        "docs-archive/old.md",
        "docs/api/deep/notes.md",
        "docs/api/index.md",
        "docs/guide.md",
        "logo.png",
        "readme.txt",
    ]
}
