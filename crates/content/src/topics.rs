/// One entry on the home screen's topic chooser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicInfo {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// A small icon card used by the "why it matters" sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

#[must_use]
pub fn topics() -> [TopicInfo; 3] {
    [
        TopicInfo {
            slug: "grammar",
            title: "Context-Free Grammar",
            description: "Explore the production rules and structures that define programming languages",
            icon: "📝",
        },
        TopicInfo {
            slug: "trees",
            title: "Syntax Tree",
            description: "See how code is analyzed and structured into abstract syntax trees",
            icon: "🌳",
        },
        TopicInfo {
            slug: "ambiguity",
            title: "Ambiguity",
            description: "Understand when a grammar can produce multiple interpretations of the same code",
            icon: "🤔",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_slugs_are_unique() {
        let topics = topics();
        for (i, a) in topics.iter().enumerate() {
            for b in &topics[i + 1..] {
                assert_ne!(a.slug, b.slug);
            }
        }
    }
}
