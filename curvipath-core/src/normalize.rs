/// Cleans up a raw equation string before it is parsed.
///
/// Applied in order:
/// 1. all whitespace is removed;
/// 2. every `sen` becomes `sin` (Spanish sine);
/// 3. a `*` is inserted between a digit and a following letter or `(`,
///    so `2t` becomes `2*t` and `3(t+1)` becomes `3*(t+1)`.
///
/// Blank input is returned unchanged. Normalizing an already normalized
/// string yields the same string.
///
/// The `sen` replacement is a plain substring replacement and will also
/// rewrite longer identifiers that happen to contain `sen`.
#[must_use]
pub fn normalize(raw: &str) -> String {
    if raw.trim().is_empty() {
        return raw.to_string();
    }

    let compact: String = raw.chars().filter(|ch| !ch.is_whitespace()).collect();
    let aliased = compact.replace("sen", "sin");

    let mut normalized = String::with_capacity(aliased.len() + 4);
    let mut chars = aliased.chars().peekable();
    while let Some(ch) = chars.next() {
        normalized.push(ch);
        if ch.is_ascii_digit()
            && chars
                .peek()
                .is_some_and(|next| next.is_ascii_alphabetic() || *next == '(')
        {
            normalized.push('*');
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_whitespace() {
        assert_eq!(normalize(" t ^ 2 +\t1 "), "t^2+1");
    }

    #[test]
    fn aliases_spanish_sine() {
        assert_eq!(normalize("sen(t)"), "sin(t)");
        assert_eq!(normalize("3sen(2t)"), "3*sin(2*t)");
    }

    #[test]
    fn inserts_explicit_multiplication() {
        assert_eq!(normalize("2t"), "2*t");
        assert_eq!(normalize("3(t+1)"), "3*(t+1)");
        assert_eq!(normalize("12t^2"), "12*t^2");
        assert_eq!(normalize("2.5t"), "2.5*t");
        assert_eq!(normalize("t2"), "t2");
    }

    #[test]
    fn blank_input_passes_through() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "   ");
    }

    #[test]
    fn is_idempotent() {
        let inputs = ["2t + 3(t-1)", "sen(4t)cos(t)", "sesenn", "10 t ^ 3", "5"];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {input}");
        }
    }

    #[test]
    fn sen_replacement_is_literal() {
        assert_eq!(normalize("sensor"), "sinsor");
    }
}
