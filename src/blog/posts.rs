use chrono::NaiveDate;
use log::error;
use once_cell::sync::Lazy;
use serde::Deserialize;

// Shipped empty; add entries to publish articles.
const POSTS_JSON: &str = include_str!("../../assets/posts.json");

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub date: NaiveDate,
    pub tags: Vec<String>,
    pub cover: String,
    pub content: Vec<String>,
}

impl Post {
    pub fn formatted_date(&self) -> String {
        self.date.format("%-d. %-m. %Y").to_string()
    }
}

static POSTS: Lazy<Vec<Post>> = Lazy::new(|| parse_posts(POSTS_JSON));

pub fn parse_posts(json: &str) -> Vec<Post> {
    match serde_json::from_str(json) {
        Ok(posts) => posts,
        Err(e) => {
            error!("Failed to parse blog posts: {}", e);
            Vec::new()
        }
    }
}

pub fn all_posts() -> &'static [Post] {
    &POSTS
}

pub fn find_post<'a>(posts: &'a [Post], slug: &str) -> Option<&'a Post> {
    posts.iter().find(|p| p.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"[
        {
            "slug": "fotovoltika-2025",
            "title": "Fotovoltika v roku 2025",
            "summary": "Čo sa zmenilo pri dotáciách.",
            "date": "2025-03-07",
            "tags": ["Energetika"],
            "cover": "/assets/fv.webp",
            "content": ["Prvý odsek.", "Druhý odsek."]
        }
    ]"#;

    #[test]
    fn shipped_dataset_is_empty() {
        assert!(all_posts().is_empty());
    }

    #[test]
    fn parses_posts_and_formats_date() {
        let posts = parse_posts(SAMPLE);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].content.len(), 2);
        assert_eq!(posts[0].formatted_date(), "7. 3. 2025");
    }

    #[test]
    fn malformed_dataset_yields_nothing() {
        assert!(parse_posts("{ not json").is_empty());
        assert!(parse_posts(r#"[{"slug": "x"}]"#).is_empty());
    }

    #[test]
    fn finds_by_slug() {
        let posts = parse_posts(SAMPLE);
        assert_eq!(
            find_post(&posts, "fotovoltika-2025").map(|p| p.title.as_str()),
            Some("Fotovoltika v roku 2025")
        );
        assert_eq!(find_post(&posts, "neexistuje"), None);
        assert_eq!(find_post(all_posts(), "fotovoltika-2025"), None);
    }
}
