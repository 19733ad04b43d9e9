use tracing::{debug, instrument};

use crate::domain::{
    common::services::Service,
    conflict::{
        entities::{
            ConflictPair, ConflictParty, ConflictReport, ConflictRule, RoutineConflictReport,
        },
        ports::ConflictService,
        value_objects::{ConflictRuleSet, DetectConflictsInput, MatchOptions},
    },
    product::entities::{Product, RoutineProducts, RoutineSlot},
};

/// Lowercased spellings that count as one side of a rule: the term plus its aliases.
struct TermMatcher {
    spellings: Vec<String>,
}

impl TermMatcher {
    fn new(term: &str, rules: &ConflictRuleSet) -> Self {
        let spellings = std::iter::once(term)
            .chain(rules.synonyms_for(term))
            .map(|spelling| spelling.trim().to_lowercase())
            .filter(|spelling| !spelling.is_empty())
            .collect();

        Self { spellings }
    }

    fn matches_any(&self, ingredients: &[String], options: MatchOptions) -> bool {
        ingredients.iter().any(|ingredient| {
            self.spellings
                .iter()
                .any(|spelling| fragment_matches(ingredient, spelling, options.min_fragment_len))
        })
    }
}

struct RuleMatcher {
    a: TermMatcher,
    b: TermMatcher,
}

impl RuleMatcher {
    fn new(rule: &ConflictRule, rules: &ConflictRuleSet) -> Self {
        Self {
            a: TermMatcher::new(&rule.a, rules),
            b: TermMatcher::new(&rule.b, rules),
        }
    }

    /// Whether `ingredients` hold side `a` and side `b` of the rule.
    fn sides(&self, ingredients: &[String], options: MatchOptions) -> (bool, bool) {
        (
            self.a.matches_any(ingredients, options),
            self.b.matches_any(ingredients, options),
        )
    }
}

/// Two-way containment between an ingredient name and a rule term, both already lowercased.
///
/// Only the shorter string can sit inside the longer one, so the shorter side
/// is held to `min_len`; below it the two must be equal.
pub fn fragment_matches(ingredient: &str, term: &str, min_len: usize) -> bool {
    if ingredient.is_empty() || term.is_empty() {
        return false;
    }
    if ingredient == term {
        return true;
    }

    let (shorter, longer) = if ingredient.chars().count() <= term.chars().count() {
        (ingredient, term)
    } else {
        (term, ingredient)
    };

    shorter.chars().count() >= min_len && longer.contains(shorter)
}

/// Detects conflicts with the default [`MatchOptions`].
pub fn detect_conflicts(products: &[Product], rules: &ConflictRuleSet) -> ConflictReport {
    detect_conflicts_with(products, rules, MatchOptions::default())
}

/// Pairs every two distinct products of a slot against every rule.
///
/// A pair conflicts under `{a, b}` when one product has `a` and the other has
/// `b`, in either order. Each matching (pair, rule) is reported once.
pub fn detect_conflicts_with(
    products: &[Product],
    rules: &ConflictRuleSet,
    options: MatchOptions,
) -> ConflictReport {
    let ingredients: Vec<Vec<String>> = products
        .iter()
        .map(|product| {
            product
                .normalized_ingredients()
                .iter()
                .map(|name| name.to_lowercase())
                .collect()
        })
        .collect();

    let matchers: Vec<RuleMatcher> = rules
        .rules
        .iter()
        .map(|rule| RuleMatcher::new(rule, rules))
        .collect();

    // hits[product][rule] = (has a, has b)
    let hits: Vec<Vec<(bool, bool)>> = ingredients
        .iter()
        .map(|names| {
            matchers
                .iter()
                .map(|matcher| matcher.sides(names, options))
                .collect()
        })
        .collect();

    let mut pairs = Vec::new();
    for i in 0..products.len() {
        for j in (i + 1)..products.len() {
            for (rule_index, rule) in rules.rules.iter().enumerate() {
                let (i_has_a, i_has_b) = hits[i][rule_index];
                let (j_has_a, j_has_b) = hits[j][rule_index];

                let terms = if i_has_a && j_has_b {
                    (&rule.a, &rule.b)
                } else if i_has_b && j_has_a {
                    (&rule.b, &rule.a)
                } else {
                    continue;
                };

                pairs.push(ConflictPair {
                    first: party(&products[i], terms.0),
                    second: party(&products[j], terms.1),
                    rule_index,
                    message: rule.message(terms.0, terms.1),
                });
            }
        }
    }

    debug!(
        products = products.len(),
        rules = rules.rules.len(),
        conflicts = pairs.len(),
        "conflict detection finished"
    );

    ConflictReport::new(pairs)
}

fn party(product: &Product, term: &str) -> ConflictParty {
    ConflictParty {
        product_id: product.id.clone(),
        product_name: product.name.clone(),
        ingredient: term.to_string(),
    }
}

pub fn detect_routine_conflicts(
    routine: &RoutineProducts,
    rules: &ConflictRuleSet,
    options: MatchOptions,
) -> RoutineConflictReport {
    let [morning, evening, weekly] =
        RoutineSlot::ALL.map(|slot| detect_conflicts_with(routine.slot(slot), rules, options));

    RoutineConflictReport::new(morning, evening, weekly)
}

impl ConflictService for Service {
    #[instrument(
        skip_all,
        fields(products = input.products.len(), custom_rules = input.rules.is_some())
    )]
    fn detect_conflicts(&self, input: DetectConflictsInput) -> ConflictReport {
        let rules = input.rules.as_ref().unwrap_or(self.rules.as_ref());
        detect_conflicts_with(&input.products, rules, self.match_options)
    }

    #[instrument(skip_all, fields(products = routine.len()))]
    fn detect_routine_conflicts(&self, routine: &RoutineProducts) -> RoutineConflictReport {
        detect_routine_conflicts(routine, &self.rules, self.match_options)
    }

    fn conflict_rules(&self) -> &ConflictRuleSet {
        &self.rules
    }
}
