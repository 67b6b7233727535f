//! Query-variant templates for a topic.

use serde::{Deserialize, Serialize};

/// Placeholder substituted with the user's topic.
pub const TOPIC_PLACEHOLDER: &str = "{topic}";

/// Ordered search-phrase templates plus the broader fallback template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryPlan {
    /// Templates tried in order until the target is met.
    pub templates: Vec<String>,
    /// Single broader query issued when the templates fall short.
    pub fallback: String,
}

impl Default for QueryPlan {
    fn default() -> Self {
        Self {
            templates: [
                "{topic} quotes",
                "famous quotes about {topic}",
                "{topic} sayings and quotes",
                "best {topic} quotes",
                "inspirational {topic} quotes",
                "meaningful {topic} quotes",
                "popular {topic} quotes",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            fallback: "quotes related to {topic}".to_owned(),
        }
    }
}

impl QueryPlan {
    /// Query strings for `topic`, in template order.
    pub fn variants(&self, topic: &str) -> Vec<String> {
        let topic = topic.trim();
        self.templates
            .iter()
            .map(|template| fill(template, topic))
            .collect()
    }

    /// The broader fallback query for `topic`.
    pub fn fallback_query(&self, topic: &str) -> String {
        fill(&self.fallback, topic.trim())
    }

    /// Templates that lack the `{topic}` placeholder (fallback included).
    pub fn templates_missing_topic(&self) -> Vec<&str> {
        self.templates
            .iter()
            .chain(std::iter::once(&self.fallback))
            .filter(|t| !t.contains(TOPIC_PLACEHOLDER))
            .map(String::as_str)
            .collect()
    }
}

fn fill(template: &str, topic: &str) -> String {
    template.replace(TOPIC_PLACEHOLDER, topic)
}
