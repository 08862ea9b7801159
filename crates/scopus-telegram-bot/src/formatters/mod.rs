//! Plain-text reply composition for chat messages.

use crate::models::{Article, QuotaStatus};

/// Usage hint sent when `/scopus` arrives without an argument.
pub const USAGE_HINT: &str = "Please provide a search query. Example: /scopus methane pyrolysis";

/// Notice sent when a search matched nothing.
pub const NOTHING_FOUND: &str = "Nothing found for your query.";

/// Acknowledgment sent before the quota probe.
pub const QUOTA_ACK: &str = "Fetching API quota information...";

/// Acknowledgment sent before a search runs.
#[must_use]
pub fn search_ack(query: &str) -> String {
    format!("Searching for articles matching: {query}...")
}

/// Format a search reply: a multi-line list of articles, or the
/// nothing-found notice when the result set is empty.
#[must_use]
pub fn format_search_reply(query: &str, articles: &[Article]) -> String {
    if articles.is_empty() {
        return NOTHING_FOUND.to_string();
    }

    let mut output = format!("Search results for \"{query}\":\n\n");

    for article in articles {
        output.push_str(&format!(
            "Title: {}\nDOI: {}\nJournal: {}\nDate: {}\nAuthors: {}\nLink: {}\n\n",
            article.title,
            article.doi,
            article.journal,
            article.cover_date,
            article.authors,
            article.link,
        ));
    }

    output
}

/// Format the quota-status reply.
#[must_use]
pub fn format_quota_reply(quota: &QuotaStatus) -> String {
    format!(
        "Scopus API quota status:\nRequest limit: {}\nRemaining requests: {}\nQuota reset: {}\n",
        quota.limit, quota.remaining, quota.reset,
    )
}

/// Format the user-visible error reply for a failed search.
#[must_use]
pub fn search_error(description: &str) -> String {
    format!("Search failed: {description}")
}

/// Format the user-visible error reply for a failed quota probe.
#[must_use]
pub fn quota_error(description: &str) -> String {
    format!("Failed to fetch quota information: {description}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Article, Entry};

    fn sample_article() -> Article {
        Article::from(Entry {
            title: Some("Methane Pyrolysis Revisited".to_string()),
            doi: Some("10.1000/xyz".to_string()),
            publication_name: Some("Journal of Energy".to_string()),
            cover_date: Some("2024-03-01".to_string()),
            creator: Some("Doe J., Roe R.".to_string()),
        })
    }

    #[test]
    fn test_empty_result_set_renders_notice() {
        assert_eq!(format_search_reply("methane", &[]), NOTHING_FOUND);
    }

    #[test]
    fn test_search_reply_lists_all_fields() {
        let reply = format_search_reply("methane", &[sample_article()]);
        assert!(reply.starts_with("Search results for \"methane\""));
        assert!(reply.contains("Title: Methane Pyrolysis Revisited"));
        assert!(reply.contains("DOI: 10.1000/xyz"));
        assert!(reply.contains("Journal: Journal of Energy"));
        assert!(reply.contains("Date: 2024-03-01"));
        assert!(reply.contains("Authors: Doe J., Roe R."));
        assert!(reply.contains("Link: https://doi.org/10.1000/xyz"));
    }

    #[test]
    fn test_search_reply_preserves_order() {
        let mut second = sample_article();
        second.title = "Second Match".to_string();
        let reply = format_search_reply("methane", &[sample_article(), second]);

        let first_pos = reply.find("Methane Pyrolysis Revisited").unwrap();
        let second_pos = reply.find("Second Match").unwrap();
        assert!(first_pos < second_pos);
    }

    #[test]
    fn test_quota_reply() {
        let quota = crate::models::QuotaStatus {
            limit: "20000".to_string(),
            remaining: "19876".to_string(),
            reset: "2023-11-14 22:13:20".to_string(),
        };

        let reply = format_quota_reply(&quota);
        assert!(reply.contains("Request limit: 20000"));
        assert!(reply.contains("Remaining requests: 19876"));
        assert!(reply.contains("Quota reset: 2023-11-14 22:13:20"));
    }

    #[test]
    fn test_error_replies_embed_description() {
        assert!(search_error("connection refused").contains("connection refused"));
        assert!(quota_error("connection refused").contains("connection refused"));
    }
}
