use serde::Serialize;

/// Ordered, duplicate-free skill tags. Comparison is case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillTags(Vec<String>);

impl SkillTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim and append. Empty or already-present tags are ignored.
    pub fn add(&mut self, candidate: &str) -> bool {
        let tag = candidate.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.0.push(tag.to_string());
        true
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        match self.0.iter().position(|t| t == tag) {
            Some(idx) => {
                self.0.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillTags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = SkillTags::new();
        for s in iter {
            tags.add(s.as_ref());
        }
        tags
    }
}

/// The text box next to the tag list. Enter commits instead of submitting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillInput {
    pub buffer: String,
}

impl SkillInput {
    pub fn push(&mut self, c: char) {
        self.buffer.push(c);
    }

    pub fn pop(&mut self) {
        self.buffer.pop();
    }

    /// Buffer is cleared only when the tag was accepted.
    pub fn commit(&mut self, tags: &mut SkillTags) -> bool {
        let added = tags.add(&self.buffer);
        if added {
            self.buffer.clear();
        }
        added
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_case_sensitive() {
        let mut tags = SkillTags::new();
        assert!(tags.add("Python"));
        assert!(tags.add("python"));
        assert_eq!(tags.as_slice(), ["Python", "python"]);
    }

    #[test]
    fn test_add_twice_keeps_one() {
        let mut tags = SkillTags::new();
        assert!(tags.add("Python"));
        assert!(!tags.add("Python"));
        assert!(!tags.add("  Python "));
        assert_eq!(tags.as_slice().len(), 1);
    }

    #[test]
    fn test_add_trims_and_ignores_blank() {
        let mut tags = SkillTags::new();
        assert!(!tags.add("   "));
        assert!(!tags.add(""));
        assert!(tags.add("  Rust  "));
        assert_eq!(tags.as_slice(), ["Rust"]);
    }

    #[test]
    fn test_remove_exact_match_only() {
        let mut tags: SkillTags = ["Go", "Rust", "Zig"].into_iter().collect();
        assert!(!tags.remove("rust"));
        assert!(tags.remove("Rust"));
        assert_eq!(tags.as_slice(), ["Go", "Zig"]);
        assert!(!tags.remove("Rust"));
    }

    #[test]
    fn test_commit_clears_buffer_only_on_success() {
        let mut tags = SkillTags::new();
        let mut input = SkillInput::default();
        for c in "Docker".chars() {
            input.push(c);
        }
        assert!(input.commit(&mut tags));
        assert!(input.buffer.is_empty());

        input.buffer = "Docker".to_string();
        assert!(!input.commit(&mut tags));
        assert_eq!(input.buffer, "Docker");
        assert_eq!(tags.as_slice().len(), 1);
    }
}
