use once_cell::sync::Lazy;
use regex::Regex;

use super::posts::Post;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    All,
    Energy,
    EMobility,
    General,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::All,
        Category::Energy,
        Category::EMobility,
        Category::General,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "Všetko",
            Category::Energy => "Energetika",
            Category::EMobility => "E-mobilita",
            Category::General => "Všeobecné",
        }
    }
}

// `ev` ends at an ASCII word boundary, so "nevšedný" still counts
static EMOBILITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"e-?mobil|elektromobil|nabíj|ev(?-u:\b)").expect("valid e-mobility pattern")
});
static ENERGY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"energet|úspora|audit|fotovolt|tepel|technolog|invest|tarif|spotreb")
        .expect("valid energy pattern")
});

/// Keyword heuristic until posts carry an explicit category.
pub fn derive_category(post: &Post) -> Category {
    let haystack = format!("{} {}", post.title, post.tags.join(" ")).to_lowercase();
    if EMOBILITY.is_match(&haystack) {
        Category::EMobility
    } else if ENERGY.is_match(&haystack) {
        Category::Energy
    } else {
        Category::General
    }
}

fn matches_query(post: &Post, query: &str) -> bool {
    query.is_empty()
        || post.title.to_lowercase().contains(query)
        || post.summary.to_lowercase().contains(query)
        || post.tags.iter().any(|t| t.to_lowercase().contains(query))
}

pub fn filter_posts<'a>(posts: &'a [Post], query: &str, category: Category) -> Vec<&'a Post> {
    let query = query.trim().to_lowercase();
    posts
        .iter()
        .filter(|p| matches_query(p, &query))
        .filter(|p| category == Category::All || derive_category(p) == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn post(slug: &str, title: &str, summary: &str, tags: &[&str]) -> Post {
        Post {
            slug: slug.to_string(),
            title: title.to_string(),
            summary: summary.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            cover: String::new(),
            content: Vec::new(),
        }
    }

    fn slugs(posts: &[&Post]) -> Vec<String> {
        posts.iter().map(|p| p.slug.clone()).collect()
    }

    fn dataset() -> Vec<Post> {
        vec![
            post("audit", "Energetický audit krok za krokom", "Čo čakať.", &["Audit"]),
            post("wallbox", "Wallbox doma", "Nabíjanie cez noc.", &["E-mobilita"]),
            post("novinky", "Novinky z kancelárie", "Krátko o nás.", &[]),
            post("tarify", "Ako čítať faktúru", "Distribučné položky a TARIFY.", &["Faktúry"]),
        ]
    }

    #[test]
    fn empty_query_and_all_returns_everything_in_order() {
        let posts = dataset();
        assert_eq!(
            slugs(&filter_posts(&posts, "", Category::All)),
            vec!["audit", "wallbox", "novinky", "tarify"]
        );
        assert_eq!(filter_posts(&posts, "   ", Category::All).len(), 4);
    }

    #[test]
    fn empty_dataset_yields_nothing() {
        assert!(filter_posts(&[], "", Category::All).is_empty());
        assert!(filter_posts(&[], "audit", Category::Energy).is_empty());
    }

    #[test]
    fn derives_categories_from_title_and_tags() {
        let posts = dataset();
        assert_eq!(derive_category(&posts[0]), Category::Energy);
        assert_eq!(derive_category(&posts[1]), Category::EMobility);
        assert_eq!(derive_category(&posts[2]), Category::General);
        // summary is not part of the heuristic
        assert_eq!(derive_category(&posts[3]), Category::General);
        assert_eq!(
            derive_category(&post("ev", "Prvé EV vo firme", "", &[])),
            Category::EMobility
        );
    }

    #[test]
    fn ev_before_a_diacritic_is_still_a_word_end() {
        assert_eq!(
            derive_category(&post("d", "Nevšedný deň", "", &[])),
            Category::EMobility
        );
        assert_eq!(
            derive_category(&post("p", "Prevádzka firmy", "", &[])),
            Category::EMobility
        );
        // an ASCII letter after `ev` still blocks the match
        assert_eq!(
            derive_category(&post("l", "Levný nákup", "", &[])),
            Category::General
        );
    }

    #[test]
    fn category_and_query_must_both_match() {
        let posts = vec![
            post("tag-only", "Wallbox doma", "Praktické rady.", &["E-mobilita"]),
            post("in-title", "Nové EV pre obec", "Praktické rady.", &["E-mobilita"]),
            post("in-summary", "Wallbox vo firme", "Prevádzka áut.", &["E-mobilita"]),
        ];

        let found = filter_posts(&posts, "ev", Category::EMobility);

        assert_eq!(slugs(&found), vec!["in-title", "in-summary"]);
    }

    #[test]
    fn query_is_case_insensitive_and_trimmed() {
        let posts = dataset();
        assert_eq!(slugs(&filter_posts(&posts, "  TARIFY ", Category::All)), vec!["tarify"]);
        assert_eq!(slugs(&filter_posts(&posts, "energetický", Category::All)), vec!["audit"]);
        assert_eq!(slugs(&filter_posts(&posts, "e-mobilita", Category::All)), vec!["wallbox"]);
    }

    #[test]
    fn category_alone_filters() {
        let posts = dataset();
        assert_eq!(slugs(&filter_posts(&posts, "", Category::General)), vec!["novinky", "tarify"]);
        assert!(filter_posts(&posts, "audit", Category::EMobility).is_empty());
    }

    #[test]
    fn labels_match_filter_buttons() {
        let labels: Vec<_> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["Všetko", "Energetika", "E-mobilita", "Všeobecné"]);
    }
}
