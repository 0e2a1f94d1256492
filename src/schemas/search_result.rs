use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of portal resource a search result points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Article,
    Opportunity,
    Alumni,
    /// Any resource kind this build does not know about
    #[serde(other)]
    Other,
}

impl Category {
    /// Icon identifier shown next to a result row.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Article => "newspaper",
            Category::Opportunity => "briefcase",
            Category::Alumni => "user-graduate",
            Category::Other => "search",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Article => "article",
            Category::Opportunity => "opportunity",
            Category::Alumni => "alumni",
            Category::Other => "other",
        }
    }

    /// Only articles and opportunities can be saved to favorites
    pub fn is_favoritable(&self) -> bool {
        matches!(self, Category::Article | Category::Opportunity)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub destination: String,
}

impl SearchResult {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: Category,
        subtitle: Option<&str>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category,
            subtitle: subtitle.map(str::to_string),
            destination: destination.into(),
        }
    }
}
