//! Ordered rule table: the pattern-to-category bindings the engine scans by.
//!
//! Rules are registered up front and validated eagerly — a malformed
//! pattern fails the registration call, never a later scan. The set is
//! frozen for the duration of a scan by construction: the engine holds a
//! shared borrow, so the borrow checker rejects mutation while any
//! tokenizer is alive. One table can feed any number of independent
//! engine instances.
//!
//! # Ordering
//!
//! Registration order is preserved but does **not** grant precedence: the
//! engine picks the longest match at each position. Order matters only as
//! the deterministic tie-break when two rules match the same length.

use regex::Regex;

use crate::error::RuleError;
use crate::token::Category;

/// Whether matches of a rule surface as tokens or vanish.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum RuleAction {
    /// Produce a token for each match.
    Emit,
    /// Consume the match silently (whitespace, comments).
    Discard,
}

/// One pattern-to-category binding.
#[derive(Clone, Debug)]
pub struct Rule<C> {
    category: C,
    pattern: Regex,
    action: RuleAction,
}

impl<C: Category> Rule<C> {
    /// The category this rule classifies matches under.
    pub fn category(&self) -> C {
        self.category
    }

    /// The pattern text as supplied at registration (unanchored).
    pub fn pattern(&self) -> &str {
        // Strip the `\A(?:` prefix and `)` suffix added by compile().
        let anchored = self.pattern.as_str();
        &anchored[ANCHOR_PREFIX.len()..anchored.len() - 1]
    }

    /// Whether matches of this rule surface as tokens.
    pub fn emits(&self) -> bool {
        self.action == RuleAction::Emit
    }

    /// Match this rule anchored at the start of `rest`, returning the
    /// matched prefix. The compiled pattern carries a `\A` anchor, so a
    /// returned match always starts at byte 0.
    pub(crate) fn match_at_start<'src>(&self, rest: &'src str) -> Option<&'src str> {
        let m = self.pattern.find(rest)?;
        debug_assert_eq!(m.start(), 0, "anchored pattern matched past the cursor");
        Some(m.as_str())
    }
}

/// Prefix wrapping every pattern so matching is anchored at the cursor
/// rather than searching ahead. The non-capturing group keeps top-level
/// alternations (`a|b`) from escaping the anchor.
const ANCHOR_PREFIX: &str = r"\A(?:";

/// Compile a caller-supplied pattern with cursor anchoring, rejecting
/// patterns that are malformed or can match the empty string.
fn compile(pattern: &str) -> Result<Regex, RuleError> {
    let anchored = format!("{ANCHOR_PREFIX}{pattern})");
    let regex = Regex::new(&anchored).map_err(|source| RuleError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    // A rule that can match "" never consumes input: the cursor would
    // stall on it forever. Configuration error, caught here.
    if regex.find("").is_some() {
        return Err(RuleError::EmptyMatch {
            pattern: pattern.to_string(),
        });
    }

    Ok(regex)
}

/// Ordered collection of rules, built once and then scanned read-only.
#[derive(Clone, Debug)]
pub struct RuleSet<C> {
    rules: Vec<Rule<C>>,
}

impl<C> Default for RuleSet<C> {
    fn default() -> Self {
        RuleSet { rules: Vec::new() }
    }
}

impl<C: Category> RuleSet<C> {
    /// Create an empty rule set.
    pub fn new() -> Self {
        RuleSet { rules: Vec::new() }
    }

    /// Register an emitting rule. Returns `&mut Self` so registrations
    /// chain with `?`.
    ///
    /// # Errors
    ///
    /// [`RuleError::InvalidPattern`] for bad regex syntax,
    /// [`RuleError::EmptyMatch`] for patterns that can match the empty
    /// string.
    pub fn rule(&mut self, category: C, pattern: &str) -> Result<&mut Self, RuleError> {
        self.register(category, pattern, RuleAction::Emit)
    }

    /// Register a discard rule: matches are consumed (the cursor and
    /// position advance) but no token is produced. Typical for whitespace
    /// and comments.
    ///
    /// # Errors
    ///
    /// Same as [`rule`](Self::rule).
    pub fn skip(&mut self, category: C, pattern: &str) -> Result<&mut Self, RuleError> {
        self.register(category, pattern, RuleAction::Discard)
    }

    /// Register a rule with an explicit action.
    ///
    /// # Errors
    ///
    /// Same as [`rule`](Self::rule).
    pub fn register(
        &mut self,
        category: C,
        pattern: &str,
        action: RuleAction,
    ) -> Result<&mut Self, RuleError> {
        let pattern = compile(pattern)?;
        self.rules.push(Rule {
            category,
            pattern,
            action,
        });
        Ok(self)
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate rules in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule<C>> {
        self.rules.iter()
    }
}

impl<'a, C: Category> IntoIterator for &'a RuleSet<C> {
    type Item = &'a Rule<C>;
    type IntoIter = std::slice::Iter<'a, Rule<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
