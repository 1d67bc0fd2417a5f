//! Rule system for element to Markdown conversion.

mod builtin;
mod rule;

pub use builtin::builtin_rules;
pub use rule::{ListMarker, Rule};

use indexmap::IndexMap;

/// Lookup table from normalized tag name to render rule
#[derive(Debug, Clone)]
pub struct Rules {
    table: IndexMap<String, Rule>,
}

impl Rules {
    /// Create a new Rules instance with the built-in rules
    pub fn new() -> Self {
        let mut table = IndexMap::new();
        for (tag, rule) in builtin_rules() {
            table.insert(tag.to_string(), rule);
        }
        Self { table }
    }

    /// Map a tag to a rule, replacing any existing mapping
    pub fn add(&mut self, tag: &str, rule: Rule) {
        self.table.insert(tag.to_lowercase(), rule);
    }

    /// Render elements with this tag verbatim as `<TAG>…</TAG>`
    pub fn keep(&mut self, tag: &str) {
        self.add(tag, Rule::Verbatim);
    }

    /// Drop elements with this tag, children included
    pub fn remove(&mut self, tag: &str) {
        self.add(tag, Rule::Remove);
    }

    /// Find the rule for a tag. Unmapped tags are passed through verbatim.
    pub fn for_tag(&self, tag: &str) -> Rule {
        self.table
            .get(tag.to_lowercase().as_str())
            .copied()
            .unwrap_or(Rule::Verbatim)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let rules = Rules::new();
        assert_eq!(rules.for_tag("B"), Rule::Strong);
        assert_eq!(rules.for_tag("Strong"), Rule::Strong);
        assert_eq!(rules.for_tag("h7"), Rule::Heading(7));
        assert_eq!(rules.for_tag("OL"), Rule::List(ListMarker::Numbered));
    }

    #[test]
    fn test_unknown_tags_are_verbatim() {
        let rules = Rules::new();
        assert_eq!(rules.for_tag("small"), Rule::Verbatim);
        assert_eq!(rules.for_tag("h8"), Rule::Verbatim);
        assert_eq!(rules.for_tag("a"), Rule::Verbatim);
    }

    #[test]
    fn test_overrides() {
        let mut rules = Rules::new();
        rules.keep("B");
        rules.remove("script");
        rules.add("Mark", Rule::Emphasis);

        assert_eq!(rules.for_tag("b"), Rule::Verbatim);
        assert_eq!(rules.for_tag("strong"), Rule::Strong);
        assert_eq!(rules.for_tag("script"), Rule::Remove);
        assert_eq!(rules.for_tag("mark"), Rule::Emphasis);
    }
}
