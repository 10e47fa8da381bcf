use crate::{
    quantity::{Category, Provided, Symbol},
    variables::Variables,
};

use super::Config;

/// Resolves prepared variables against `category`'s vocabulary.
///
/// Each symbol is read from its primary key, then from its synonyms, and is
/// left out if no key holds a number. A projectile request that has no `g`
/// key at all gets [`Config::default_gravity`].
#[must_use]
pub fn resolve(category: Category, variables: &Variables, config: &Config) -> Provided {
    category
        .vocabulary()
        .iter()
        .filter_map(|&symbol| {
            let value = keys(symbol)
                .find_map(|key| variables.number(key))
                .or_else(|| default_for(category, symbol, variables, config))?;
            Some((symbol, value))
        })
        .collect()
}

fn keys(symbol: Symbol) -> impl Iterator<Item = &'static str> {
    std::iter::once(symbol.key()).chain(symbol.synonyms().iter().copied())
}

fn default_for(
    category: Category,
    symbol: Symbol,
    variables: &Variables,
    config: &Config,
) -> Option<f64> {
    let missing = keys(symbol).all(|key| !variables.contains(key));
    (category == Category::Projectile && symbol == Symbol::Gravity && missing)
        .then_some(config.default_gravity)
}
