use crate::conf::KnownIssue;

/// Case-insensitive substring matcher for known failure signatures.
#[derive(Debug, Clone)]
pub struct IssueMatcher {
    /// (lower-cased phrase, label)
    phrases: Vec<(String, String)>,
}

impl IssueMatcher {
    pub fn new(known_issues: &[KnownIssue]) -> Self {
        Self {
            phrases: known_issues
                .iter()
                .map(|issue| (issue.phrase.to_lowercase(), issue.label.clone()))
                .collect(),
        }
    }

    /// Labels of every phrase found in `line`, in table order.
    ///
    /// Phrases are checked independently, so one line can yield several
    /// labels (e.g. "failed to open disco box" also contains "disco box").
    pub fn matches<'a>(&'a self, line: &str) -> impl Iterator<Item = &'a str> + 'a {
        let lowered = line.to_lowercase();
        self.phrases
            .iter()
            .filter(move |(phrase, _)| lowered.contains(phrase.as_str()))
            .map(|(_, label)| label.as_str())
    }
}
