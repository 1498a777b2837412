//! Click entity recording one successful resolution of a short link.

use chrono::{DateTime, Utc};

/// A single click event, appended per successful redirect.
///
/// Append-only; there is no uniqueness constraint across clicks.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_references_link() {
        let click = Click {
            id: 1,
            link_id: 42,
            created_at: Utc::now(),
        };
        assert_eq!(click.link_id, 42);
    }
}
