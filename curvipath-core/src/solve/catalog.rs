//! Candidate formulas keyed by category and unknown.
//!
//! Candidates are listed in priority order: the first one whose inputs are
//! all provided wins, even when later ones would also apply.

mod general_curvilinear;
mod non_uniform_circular;
mod projectile;
mod uniform_circular;

use crate::quantity::{Category, Symbol};

use super::candidate::Candidate;

/// Ordered candidates for `unknown` in `category`.
///
/// Empty if the category has no formula for the unknown.
#[must_use]
pub fn candidates(category: Category, unknown: Symbol) -> &'static [Candidate] {
    match category {
        Category::UniformCircular => uniform_circular::candidates(unknown),
        Category::NonUniformCircular => non_uniform_circular::candidates(unknown),
        Category::Projectile => projectile::candidates(unknown),
        Category::GeneralCurvilinear => general_curvilinear::candidates(unknown),
    }
}

/// Unknowns `category` can solve for.
#[must_use]
pub fn unknowns(category: Category) -> &'static [Symbol] {
    match category {
        Category::UniformCircular => uniform_circular::UNKNOWNS,
        Category::NonUniformCircular => non_uniform_circular::UNKNOWNS,
        Category::Projectile => projectile::UNKNOWNS,
        Category::GeneralCurvilinear => general_curvilinear::UNKNOWNS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_candidates() -> impl Iterator<Item = (Category, Symbol, &'static Candidate)> {
        Category::ALL.into_iter().flat_map(|category| {
            unknowns(category).iter().flat_map(move |unknown| {
                candidates(category, *unknown)
                    .iter()
                    .map(move |candidate| (category, *unknown, candidate))
            })
        })
    }

    fn placeholders(template: &str) -> Vec<&str> {
        template
            .split('{')
            .skip(1)
            .filter_map(|part| part.split_once('}').map(|(name, _)| name))
            .collect()
    }

    #[test]
    fn every_listed_unknown_has_candidates() {
        for category in Category::ALL {
            for unknown in unknowns(category) {
                assert!(
                    !candidates(category, *unknown).is_empty(),
                    "{category} has no formula for {unknown}"
                );
            }
        }
    }

    #[test]
    fn inputs_and_unknowns_belong_to_the_category() {
        for (category, unknown, candidate) in all_candidates() {
            let vocabulary = category.vocabulary();
            assert!(vocabulary.contains(&unknown), "{category}: {unknown}");
            for symbol in candidate.requires {
                assert!(vocabulary.contains(symbol), "{category}/{unknown}: {symbol}");
                assert_ne!(*symbol, unknown, "{category}/{unknown} requires itself");
            }
        }
    }

    #[test]
    fn templates_reference_only_required_symbols() {
        for (category, unknown, candidate) in all_candidates() {
            let names = placeholders(candidate.template);
            assert!(
                names.contains(&"result"),
                "{category}/{unknown}: missing result"
            );
            for name in names.into_iter().filter(|name| *name != "result") {
                let symbol = Symbol::from_key(name);
                assert!(
                    symbol.is_some_and(|symbol| candidate.requires.contains(&symbol)),
                    "{category}/{unknown}: stray placeholder {{{name}}}"
                );
            }
            assert!(
                candidate.template.ends_with(unknown.unit())
                    || candidate.template.contains(&format!("{{result}} {}", unknown.unit())),
                "{category}/{unknown}: unit"
            );
        }
    }

    #[test]
    fn symbols_outside_the_catalogue_have_no_candidates() {
        assert!(candidates(Category::GeneralCurvilinear, Symbol::Gravity).is_empty());
        assert!(candidates(Category::UniformCircular, Symbol::MaxHeight).is_empty());
    }
}
