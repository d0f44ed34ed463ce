use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_content, validate_summary, validate_title};
use crate::error::{DomainError, Violation};

pub type PostId = i32;

/// Post category. Only these two values are accepted, matched exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Fiction")]
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fiction => "Fiction",
            Category::NonFiction => "Non-Fiction",
        }
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fiction" => Ok(Category::Fiction),
            "Non-Fiction" => Ok(Category::NonFiction),
            _ => Err(DomainError::invalid(
                "category",
                Violation::Enumeration,
                "Category must be Fiction or Non-Fiction.",
            )),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Post entity - represents a blog post or article.
///
/// `title` is required; `content`, `summary` and `category` are optional but
/// validated whenever they are set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    id: Option<PostId>,
    title: String,
    content: Option<String>,
    summary: Option<String>,
    category: Option<Category>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Field values for a new post, validated by `Post::new` in declaration order.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub category: Option<String>,
}

impl Post {
    /// Create a new, not yet persisted post.
    pub fn new(fields: NewPost) -> Result<Self, DomainError> {
        validate_title(&fields.title)?;
        if let Some(content) = &fields.content {
            validate_content(content)?;
        }
        if let Some(summary) = &fields.summary {
            validate_summary(summary)?;
        }
        let category = fields
            .category
            .as_deref()
            .map(Category::from_str)
            .transpose()?;

        let now = Utc::now();
        Ok(Self {
            id: None,
            title: fields.title,
            content: fields.content,
            summary: fields.summary,
            category,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild a post from a stored row. Stored values are trusted.
    #[allow(clippy::too_many_arguments)]
    pub fn from_storage(
        id: PostId,
        title: String,
        content: Option<String>,
        summary: Option<String>,
        category: Option<Category>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            title,
            content,
            summary,
            category,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> Option<PostId> {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), DomainError> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        self.touch();
        Ok(())
    }

    pub fn set_content(&mut self, content: Option<String>) -> Result<(), DomainError> {
        if let Some(content) = &content {
            validate_content(content)?;
        }
        self.content = content;
        self.touch();
        Ok(())
    }

    pub fn set_summary(&mut self, summary: Option<String>) -> Result<(), DomainError> {
        if let Some(summary) = &summary {
            validate_summary(summary)?;
        }
        self.summary = summary;
        self.touch();
        Ok(())
    }

    /// Set the category from its text form ("Fiction" or "Non-Fiction").
    pub fn set_category(&mut self, category: Option<&str>) -> Result<(), DomainError> {
        self.category = category.map(Category::from_str).transpose()?;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.id.map_or_else(|| "None".to_string(), |id| id.to_string());
        write!(
            f,
            "Post(id={}, title={} content={}, summary={})",
            id,
            self.title,
            self.content.as_deref().unwrap_or("None"),
            self.summary.as_deref().unwrap_or("None"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_content() -> String {
        "x".repeat(250)
    }

    fn fields() -> NewPost {
        NewPost {
            title: "Top 10 Facts".to_string(),
            content: Some(long_content()),
            summary: Some("A short summary.".to_string()),
            category: Some("Non-Fiction".to_string()),
        }
    }

    #[test]
    fn test_new_post() {
        let post = Post::new(fields()).unwrap();
        assert_eq!(post.id(), None);
        assert_eq!(post.title(), "Top 10 Facts");
        assert_eq!(post.category(), Some(Category::NonFiction));
        assert_eq!(post.summary(), Some("A short summary."));
    }

    #[test]
    fn test_new_post_title_only() {
        let post = Post::new(NewPost {
            title: "The Secret Life of Bees".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(post.content(), None);
        assert_eq!(post.summary(), None);
        assert_eq!(post.category(), None);
    }

    #[test]
    fn test_new_post_rejects_each_field() {
        let cases = [
            (
                NewPost { title: "Ordinary News".to_string(), ..fields() },
                "title",
                Violation::MissingKeyword,
            ),
            (
                NewPost { content: Some("x".repeat(249)), ..fields() },
                "content",
                Violation::Length,
            ),
            (
                NewPost { summary: Some("x".repeat(251)), ..fields() },
                "summary",
                Violation::Length,
            ),
            (
                NewPost { category: Some("fiction".to_string()), ..fields() },
                "category",
                Violation::Enumeration,
            ),
        ];

        for (input, expected_field, expected_violation) in cases {
            match Post::new(input) {
                Err(DomainError::InvalidField { field, violation, .. }) => {
                    assert_eq!(field, expected_field);
                    assert_eq!(violation, expected_violation);
                }
                other => panic!("expected {expected_field} to be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("Fiction".parse::<Category>().unwrap(), Category::Fiction);
        assert_eq!("Non-Fiction".parse::<Category>().unwrap(), Category::NonFiction);
        for bad in ["fiction", "", "NonFiction", "Non-fiction", " Fiction"] {
            assert!(bad.parse::<Category>().is_err(), "{bad:?}");
        }
    }

    #[test]
    fn test_category_serde_names() {
        let json = serde_json::to_string(&Category::NonFiction).unwrap();
        assert_eq!(json, "\"Non-Fiction\"");
        let back: Category = serde_json::from_str("\"Fiction\"").unwrap();
        assert_eq!(back, Category::Fiction);
    }

    #[test]
    fn test_rejected_assignment_leaves_record_unchanged() {
        let mut post = Post::new(fields()).unwrap();
        let before = post.clone();

        assert!(post.set_title("").is_err());
        assert!(post.set_content(Some("too short".to_string())).is_err());
        assert!(post.set_summary(Some("y".repeat(300))).is_err());
        assert!(post.set_category(Some("Poetry")).is_err());
        assert_eq!(post, before);
    }

    #[test]
    fn test_setters() {
        let mut post = Post::new(fields()).unwrap();
        let created_at = post.created_at();

        post.set_title("Guess What Happened").unwrap();
        post.set_category(Some("Fiction")).unwrap();
        post.set_summary(Some("z".repeat(250))).unwrap();
        post.set_content(None).unwrap();

        assert_eq!(post.title(), "Guess What Happened");
        assert_eq!(post.category(), Some(Category::Fiction));
        assert_eq!(post.content(), None);
        assert_eq!(post.created_at(), created_at);
        assert!(post.updated_at() >= created_at);
    }

    #[test]
    fn test_display() {
        let now = Utc::now();
        let post = Post::from_storage(
            3,
            "Top Picks".to_string(),
            None,
            Some("Short".to_string()),
            Some(Category::Fiction),
            now,
            now,
        );
        assert_eq!(
            post.to_string(),
            "Post(id=3, title=Top Picks content=None, summary=Short)"
        );
    }
}
