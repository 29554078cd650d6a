//! Matching token streams against language patterns.
//!
//! Groups are matched left to right with backtracking over optional
//! groups. A pattern only matches if every significant token is consumed.
//! In flexible (SOV and VSO) languages, role groups carrying a marker may
//! appear in any order; orderings closest to the canonical one
//! are tried first and each inversion costs confidence.
//!
//! Fused markers are zero-width: a value whose token carries a marking
//! suffix leaves the affix pending, and the marker that immediately
//! follows must claim it. A marking prefix must be claimed by the marker
//! before the value. An unclaimed marking affix fails the match.

use std::cell::Cell;

use polyphrase_foundation::{
    FilterExpr, Keyword, Literal, LiteralKind, Selector, SemanticRole, SemanticValue,
};
use polyphrase_languages::AffixPosition;

use crate::pattern::{LanguagePattern, Matcher, MarkerMatcher, PatternGroup};
use crate::token::{Token, TokenRole};

/// Confidence lost per stripped non-marking inflection.
const STRIPPED_PENALTY: f64 = 0.1;
/// Confidence lost per pair of groups out of canonical order.
const INVERSION_PENALTY: f64 = 0.05;
/// Confidence lost when every optional group is absent.
const ABSENT_OPTIONAL_PENALTY: f64 = 0.1;

/// A successful pattern match.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternMatch<'p> {
    /// The matched pattern.
    pub pattern: &'p LanguagePattern,
    /// Role bindings in surface order.
    pub bindings: Vec<(SemanticRole, SemanticValue)>,
    /// Match confidence in `[0, 1]`.
    pub confidence: f64,
    /// Group pairs out of canonical order.
    pub inversions: usize,
}

/// Matches tokens against patterns.
pub struct PatternMatcher;

impl PatternMatcher {
    /// Matches tokens against every pattern, returning all full matches in
    /// pattern order.
    #[must_use]
    pub fn match_all<'p>(
        tokens: &[&Token],
        patterns: impl IntoIterator<Item = &'p LanguagePattern>,
    ) -> Vec<PatternMatch<'p>> {
        patterns
            .into_iter()
            .filter_map(|pattern| Self::try_match(tokens, pattern).ok())
            .collect()
    }

    /// Attempts to match one pattern.
    ///
    /// # Errors
    ///
    /// On failure, returns the largest number of tokens any attempt
    /// consumed, for diagnostics.
    pub fn try_match<'p>(tokens: &[&Token], pattern: &'p LanguagePattern) -> Result<PatternMatch<'p>, usize> {
        let walker = Walker {
            tokens,
            furthest: Cell::new(0),
        };
        for (order, inversions) in orderings(pattern) {
            let groups: Vec<&PatternGroup> = order.iter().map(|i| &pattern.groups[*i]).collect();
            if let Some(state) = walker.walk(&groups, 0, State::default()) {
                let confidence = confidence(pattern, &state, inversions);
                return Ok(PatternMatch {
                    pattern,
                    bindings: state.bindings,
                    confidence,
                    inversions,
                });
            }
        }
        Err(walker.furthest.get())
    }
}

#[allow(clippy::cast_precision_loss)]
fn confidence(pattern: &LanguagePattern, state: &State, inversions: usize) -> f64 {
    let optional = pattern.optional_groups();
    let absent = if optional == 0 {
        0.0
    } else {
        1.0 - state.optional_present as f64 / optional as f64
    };
    let confidence = 1.0
        - STRIPPED_PENALTY * state.stripped as f64
        - INVERSION_PENALTY * inversions as f64
        - ABSENT_OPTIONAL_PENALTY * absent;
    confidence.clamp(0.0, 1.0)
}

/// Group orders to try with their inversion counts, fewest inversions first.
fn orderings(pattern: &LanguagePattern) -> Vec<(Vec<usize>, usize)> {
    let identity: Vec<usize> = (0..pattern.groups.len()).collect();
    if !pattern.flexible {
        return vec![(identity, 0)];
    }
    let marked: Vec<usize> = identity
        .iter()
        .copied()
        .filter(|i| pattern.groups[*i].is_marked())
        .collect();
    let mut orders: Vec<(Vec<usize>, usize)> = permutations(&marked)
        .into_iter()
        .map(|perm| {
            let mut order = identity.clone();
            for (slot, group) in marked.iter().zip(&perm) {
                order[*slot] = *group;
            }
            (order, inversions(&perm))
        })
        .collect();
    orders.sort_by_key(|(_, inversions)| *inversions);
    orders
}

fn permutations(items: &[usize]) -> Vec<Vec<usize>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for (index, first) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(index);
        for tail in permutations(&rest) {
            let mut perm = Vec::with_capacity(items.len());
            perm.push(*first);
            perm.extend(tail);
            out.push(perm);
        }
    }
    out
}

fn inversions(perm: &[usize]) -> usize {
    perm.iter()
        .enumerate()
        .map(|(i, a)| perm[i + 1..].iter().filter(|b| a > b).count())
        .sum()
}

#[derive(Clone, Debug, Default)]
struct State {
    pos: usize,
    bindings: Vec<(SemanticRole, SemanticValue)>,
    /// A marking suffix waiting for its marker.
    pending: Option<(SemanticRole, String)>,
    /// Position of a value whose marking prefix a marker has claimed.
    claimed_prefix: Option<usize>,
    stripped: usize,
    optional_present: usize,
}

struct Walker<'t, 'a> {
    tokens: &'t [&'a Token],
    furthest: Cell<usize>,
}

impl Walker<'_, '_> {
    fn walk(&self, groups: &[&PatternGroup], index: usize, state: State) -> Option<State> {
        let Some(group) = groups.get(index) else {
            return (state.pos == self.tokens.len()).then_some(state);
        };
        if let Some(mut next) = self.match_group(group, state.clone()) {
            if group.optional {
                next.optional_present += 1;
            }
            if let Some(done) = self.walk(groups, index + 1, next) {
                return Some(done);
            }
        }
        if group.optional {
            return self.walk(groups, index + 1, state);
        }
        None
    }

    fn match_group(&self, group: &PatternGroup, mut state: State) -> Option<State> {
        for matcher in &group.matchers {
            match matcher {
                Matcher::Action(action) => {
                    let token = self.keyword_at(state.pos, |t| t.action() == Some(*action))?;
                    state.stripped += usize::from(token.is_stripped());
                    state.pos += 1;
                }
                Matcher::On => {
                    let token = self.keyword_at(state.pos, |t| t.is_keyword(Keyword::On))?;
                    state.stripped += usize::from(token.is_stripped());
                    state.pos += 1;
                }
                Matcher::Marker(marker) => self.match_marker(marker, &mut state)?,
                Matcher::Value(role) => self.match_value(*role, &mut state)?,
            }
            self.reach(state.pos);
        }
        (state.pending.is_none() && state.claimed_prefix.is_none()).then_some(state)
    }

    fn keyword_at(&self, pos: usize, accept: impl Fn(&Token) -> bool) -> Option<&Token> {
        let token = *self.tokens.get(pos)?;
        (accept(token) && token.marking().is_none()).then_some(token)
    }

    fn match_marker(&self, marker: &MarkerMatcher, state: &mut State) -> Option<()> {
        if let Some((role, affix)) = &state.pending {
            if *role == marker.role && marker.accepts(affix) {
                state.pending = None;
                return Some(());
            }
            return None;
        }

        if let Some(token) = self.tokens.get(state.pos) {
            let wordlike = matches!(
                token.role,
                TokenRole::Particle | TokenRole::Keyword(_) | TokenRole::Identifier
            );
            if wordlike && token.inflection.is_none() && marker.accepts(&token.normalized) {
                state.pos += 1;
                return Some(());
            }
            let claims_prefix = token.marking().is_some_and(|inflection| {
                inflection.position == AffixPosition::Prefix
                    && inflection.marks == Some(marker.role)
                    && marker.accepts(&inflection.affix)
            });
            if marker.fused && claims_prefix {
                state.claimed_prefix = Some(state.pos);
                return Some(());
            }
        }
        marker.optional.then_some(())
    }

    fn match_value(&self, role: SemanticRole, state: &mut State) -> Option<()> {
        let (value, used) = accept_value(role, self.tokens, state.pos)?;
        let consumed = &self.tokens[state.pos..state.pos + used];
        for (offset, token) in consumed.iter().enumerate() {
            state.stripped += usize::from(token.is_stripped());
            let Some(inflection) = token.marking() else {
                continue;
            };
            match inflection.position {
                AffixPosition::Prefix if offset == 0 && state.claimed_prefix == Some(state.pos) => {}
                AffixPosition::Suffix if offset + 1 == used => {
                    state.pending = Some((inflection.marks?, inflection.affix.clone()));
                }
                _ => return None,
            }
        }
        state.claimed_prefix = None;
        state.bindings.push((role, value));
        state.pos += used;
        Some(())
    }

    fn reach(&self, pos: usize) {
        if pos > self.furthest.get() {
            self.furthest.set(pos);
        }
    }
}

/// Reads a value for `role` at `pos`, returning it and the tokens used.
fn accept_value(role: SemanticRole, tokens: &[&Token], pos: usize) -> Option<(SemanticValue, usize)> {
    let token = *tokens.get(pos)?;
    match role {
        SemanticRole::EventName => match token.role {
            TokenRole::Keyword(Keyword::Event(event)) => Some((SemanticValue::event(event), 1)),
            TokenRole::Identifier => Some((SemanticValue::identifier(token.stem_text()), 1)),
            _ => None,
        },
        SemanticRole::Filter => filter_value(tokens, pos),
        _ => operand(token).map(|value| (value, 1)),
    }
}

/// The value a single token holds in a non-filter role.
pub(crate) fn operand(token: &Token) -> Option<SemanticValue> {
    match token.role {
        TokenRole::Selector(_) => Selector::parse(&token.text).map(SemanticValue::Selector),
        TokenRole::Literal(LiteralKind::String) => Some(SemanticValue::string(token.normalized.as_str())),
        TokenRole::Literal(_) => Literal::parse_numeric(&token.text).map(SemanticValue::Literal),
        TokenRole::Identifier => Some(SemanticValue::identifier(token.stem_text())),
        TokenRole::Keyword(Keyword::Reference(reference)) => Some(SemanticValue::Reference(reference)),
        TokenRole::Keyword(Keyword::Event(event)) => Some(SemanticValue::event(event)),
        _ => None,
    }
}

/// `[not]... selector [not]...`, one negation per `not`.
fn filter_value(tokens: &[&Token], pos: usize) -> Option<(SemanticValue, usize)> {
    let is_not = |at: usize| tokens.get(at).is_some_and(|t| t.is_keyword(Keyword::Not));
    let mut at = pos;
    let mut negations = 0;
    while is_not(at) {
        negations += 1;
        at += 1;
    }
    let token = *tokens.get(at)?;
    if !matches!(token.role, TokenRole::Selector(_)) {
        return None;
    }
    let mut filter = FilterExpr::Matches(Selector::parse(&token.text)?);
    at += 1;
    while is_not(at) {
        negations += 1;
        at += 1;
    }
    for _ in 0..negations {
        filter = filter.negate();
    }
    Some((SemanticValue::Filter(filter), at - pos))
}
