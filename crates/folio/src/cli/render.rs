use super::setup::Collection;
use serde::Serialize;

pub fn json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

pub fn added(collection: Collection, id: &str) -> String {
    format!("Added {} entry {}", collection.as_str(), id)
}

pub fn updated(collection: Collection, id: &str, matched: bool) -> String {
    if matched {
        format!("Updated {} entry {}", collection.as_str(), id)
    } else {
        no_match(collection, id)
    }
}

pub fn removed(collection: Collection, id: &str, matched: bool) -> String {
    if matched {
        format!("Removed {} entry {}", collection.as_str(), id)
    } else {
        no_match(collection, id)
    }
}

fn no_match(collection: Collection, id: &str) -> String {
    format!(
        "No {} entry with id {}, nothing changed",
        collection.as_str(),
        id
    )
}

/// Data-URIs are summarized, URLs are shown in full.
pub fn image(source: Option<&str>) -> String {
    match source {
        None => "No profile image available".to_string(),
        Some(uri) if uri.starts_with("data:") => {
            let mime = uri
                .strip_prefix("data:")
                .and_then(|rest| rest.split(';').next())
                .unwrap_or("unknown");
            format!("Uploaded image ({}, {} characters)", mime, uri.len())
        }
        Some(url) => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_message() {
        assert_eq!(
            removed(Collection::Projects, "nonexistent", false),
            "No projects entry with id nonexistent, nothing changed"
        );
        assert_eq!(
            updated(Collection::SocialLinks, "1", true),
            "Updated social-links entry 1"
        );
    }

    #[test]
    fn test_image_summaries() {
        assert_eq!(image(None), "No profile image available");
        assert_eq!(
            image(Some("data:image/png;base64,AAAA")),
            "Uploaded image (image/png, 26 characters)"
        );
        assert_eq!(
            image(Some("https://avatars.example/u/1")),
            "https://avatars.example/u/1"
        );
    }
}
