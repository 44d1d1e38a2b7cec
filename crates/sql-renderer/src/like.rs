//! `LIKE` pattern construction.

use predicate_engine::fold_case;

/// Escapes the `LIKE` metacharacters `\`, `%` and `_` with a backslash.
pub fn escape_like(literal: &str) -> String {
    let mut escaped = String::with_capacity(literal.len());
    for c in literal.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Where the literal must occur in the column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikePosition {
    Anywhere,
    Start,
    End,
}

/// Builds the bound `LIKE` pattern for `literal`, folding its case first when
/// `fold` is set.
pub fn like_pattern(literal: &str, position: LikePosition, fold: bool) -> String {
    let literal = if fold {
        escape_like(&fold_case(literal))
    } else {
        escape_like(literal)
    };
    match position {
        LikePosition::Anywhere => format!("%{literal}%"),
        LikePosition::Start => format!("{literal}%"),
        LikePosition::End => format!("%{literal}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_metacharacters() {
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like("50%_off"), r"50\%\_off");
        assert_eq!(escape_like(r"C:\tmp"), r"C:\\tmp");
    }

    #[test]
    fn test_patterns_by_position() {
        assert_eq!(like_pattern("ab", LikePosition::Anywhere, false), "%ab%");
        assert_eq!(like_pattern("ab", LikePosition::Start, false), "ab%");
        assert_eq!(like_pattern("ab", LikePosition::End, false), "%ab");
        assert_eq!(like_pattern("a_b", LikePosition::Start, false), r"a\_b%");
    }

    #[test]
    fn test_folded_pattern() {
        assert_eq!(like_pattern("Straße", LikePosition::Anywhere, true), "%STRASSE%");
    }
}
