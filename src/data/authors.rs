//! Author directory with synthesized fallbacks.
//!
//! Lookups model a remote profile service: they suspend for a fixed
//! simulated latency and never fail. Unknown names get a generated
//! guest profile so article views always have something to show.

use super::seed::seed_authors;
use super::types::Author;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::sleep;

/// Simulated lookup latency.
const GET_LATENCY: Duration = Duration::from_millis(200);

/// Keyed author lookup over a fixed seed set.
pub struct AuthorDirectory {
    profiles: HashMap<String, Author>,
}

impl AuthorDirectory {
    /// Directory over the seed profiles.
    pub fn new() -> Self {
        let profiles = seed_authors()
            .into_iter()
            .map(|author| (author.name.clone(), author))
            .collect();
        Self { profiles }
    }

    /// Look up a profile by exact name.
    ///
    /// A miss synthesizes a guest profile with a placeholder avatar
    /// derived from the name; this never returns an error.
    pub async fn get(&self, name: &str) -> Author {
        sleep(GET_LATENCY).await;

        self.profiles
            .get(name)
            .cloned()
            .unwrap_or_else(|| synthesize_profile(name))
    }
}

impl Default for AuthorDirectory {
    fn default() -> Self {
        Self::new()
    }
}

fn synthesize_profile(name: &str) -> Author {
    let topic = if name == "You" { "technology" } else { "this topic" };
    Author {
        name: name.to_owned(),
        role: "Guest Contributor".to_owned(),
        bio: format!("A guest writer for Zenith sharing their unique perspective on {topic}."),
        avatar: format!(
            "https://ui-avatars.com/api/?name={}&background=random&color=fff",
            urlencoding::encode(name)
        ),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_known_author() {
        let directory = AuthorDirectory::new();
        let author = directory.get("Alex Dev").await;
        assert_eq!(author.name, "Alex Dev");
        assert_eq!(author.role, "Senior Python Engineer");
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_author_fallback() {
        let directory = AuthorDirectory::new();
        let author = directory.get("Nonexistent Name").await;
        assert_eq!(author.name, "Nonexistent Name");
        assert_eq!(author.role, "Guest Contributor");
        assert!(author.bio.contains("this topic"));
        assert!(author.avatar.contains("Nonexistent%20Name"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_you_gets_technology_bio() {
        let directory = AuthorDirectory::new();
        let author = directory.get("You").await;
        assert!(author.bio.contains("technology"));
    }
}
