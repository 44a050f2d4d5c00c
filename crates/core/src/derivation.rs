use serde::{Deserialize, Serialize};

/// One context-free production rule, `left → right…`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionRule {
    pub left: String,
    pub right: Vec<String>,
    pub description: String,
}

impl ProductionRule {
    #[must_use]
    pub fn new(left: impl Into<String>, right: &[&str], description: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.iter().map(|symbol| (*symbol).to_string()).collect(),
            description: description.into(),
        }
    }

    /// The right-hand side as a single display string.
    #[must_use]
    pub fn rhs_label(&self) -> String {
        self.right.join(" ")
    }
}

/// The growing list of sentential forms shown by the production visualizer.
///
/// Starts from a single symbol; each rule application appends the rule's
/// right-hand side as the next form. This is a display aid, not a parser:
/// it does not substitute into the previous form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    start: String,
    steps: Vec<String>,
}

impl Derivation {
    #[must_use]
    pub fn new(start: impl Into<String>) -> Self {
        let start = start.into();
        Self {
            steps: vec![start.clone()],
            start,
        }
    }

    /// Starts from the left-hand symbol of the first rule.
    #[must_use]
    pub fn for_rules(rules: &[ProductionRule]) -> Self {
        let start = rules.first().map_or(String::new(), |rule| rule.left.clone());
        Self::new(start)
    }

    pub fn apply(&mut self, rule: &ProductionRule) {
        self.steps.push(rule.rhs_label());
    }

    pub fn reset(&mut self) {
        self.steps.truncate(1);
    }

    #[must_use]
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// How many rules have been applied so far.
    #[must_use]
    pub fn applied(&self) -> usize {
        self.steps.len() - 1
    }

    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Vec<ProductionRule> {
        vec![
            ProductionRule::new("E", &["E", "+", "T"], "sum"),
            ProductionRule::new("T", &["T", "*", "F"], "product"),
            ProductionRule::new("F", &["id"], "identifier"),
        ]
    }

    #[test]
    fn starts_from_first_left_symbol() {
        let derivation = Derivation::for_rules(&rules());
        assert_eq!(derivation.steps(), ["E"]);
        assert_eq!(derivation.applied(), 0);
    }

    #[test]
    fn apply_appends_the_joined_rhs() {
        let rules = rules();
        let mut derivation = Derivation::for_rules(&rules);
        derivation.apply(&rules[0]);
        derivation.apply(&rules[1]);
        assert_eq!(derivation.steps(), ["E", "E + T", "T * F"]);
        assert_eq!(derivation.applied(), 2);
    }

    #[test]
    fn reset_keeps_only_the_start_symbol() {
        let rules = rules();
        let mut derivation = Derivation::for_rules(&rules);
        derivation.apply(&rules[2]);
        derivation.reset();
        assert_eq!(derivation.steps(), ["E"]);
        assert_eq!(derivation.applied(), 0);
    }
}
