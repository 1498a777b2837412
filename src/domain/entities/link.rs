//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with metadata.
///
/// Maps a unique short `code` to the original `url`. The `code` is stable
/// once assigned and `visits` only ever increases.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub url: String,
    pub code: String,
    pub title: String,
    pub visits: i64,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        url: String,
        code: String,
        title: String,
        visits: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            url,
            code,
            title,
            visits,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub url: String,
    pub code: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "https://example.com".to_string(),
            "abc123xy".to_string(),
            "example.com".to_string(),
            0,
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.url, "https://example.com");
        assert_eq!(link.code, "abc123xy");
        assert_eq!(link.visits, 0);
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink {
            url: "https://rust-lang.org".to_string(),
            code: "xyz789ab".to_string(),
            title: "rust-lang.org".to_string(),
        };

        assert_eq!(new_link.url, "https://rust-lang.org");
        assert_eq!(new_link.code, "xyz789ab");
    }
}
