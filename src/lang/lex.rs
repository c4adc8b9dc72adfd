use super::{token::*, Error, LineNumber, MAX_LINE_NUMBER};
use std::ops::Range;

type Result<T> = std::result::Result<T, Error>;

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Separates a leading line number from the statement text.
/// `"10 PRINT X"` is `(Some(10), "PRINT X")`; `"10"` alone is
/// `(Some(10), "")` which deletes the line.
pub fn lex(s: &str) -> Result<(LineNumber, &str)> {
    let s = s.trim_matches(|c: char| is_basic_whitespace(c) || c == '\r' || c == '\n');
    let digits = s.chars().take_while(|c| is_basic_digit(*c)).count();
    if digits == 0 {
        return Ok((None, s));
    }
    let number = match s[..digits].parse::<u16>() {
        Ok(n) if n <= MAX_LINE_NUMBER => n,
        _ => return Err(error!(SyntaxError; "INVALID LINE NUMBER")),
    };
    Ok((Some(number), s[digits..].trim_start_matches(is_basic_whitespace)))
}

/// Splits one statement into its leading reserved word and the remainder.
/// Only the alphabetic run is considered so `HTAB5` still finds `HTAB`.
pub fn split_word(s: &str) -> (Option<Word>, &str) {
    let s = s.trim_start_matches(is_basic_whitespace);
    if let Some(rest) = s.strip_prefix('?') {
        return (Some(Word::Print2), rest.trim_matches(is_basic_whitespace));
    }
    let len = s.chars().take_while(|c| is_basic_alphabetic(*c)).count();
    match Word::from_string(&s[..len]) {
        Some(word) => (Some(word), s[len..].trim_matches(is_basic_whitespace)),
        None => (None, s),
    }
}

/// Byte offsets and characters that sit outside string literals and
/// outside parentheses.
pub fn top_level(s: &str) -> impl Iterator<Item = (usize, char)> + '_ {
    let mut quoted = false;
    let mut depth = 0usize;
    s.char_indices().filter(move |&(_, ch)| {
        if ch == '"' {
            quoted = !quoted;
            return false;
        }
        if quoted {
            return false;
        }
        match ch {
            '(' => {
                depth += 1;
                false
            }
            ')' => {
                depth = depth.saturating_sub(1);
                false
            }
            _ => depth == 0,
        }
    })
}

/// Splits on a separator that is not inside quotes or parentheses.
pub fn split_top_level(s: &str, sep: char) -> Vec<&str> {
    let mut v = vec![];
    let mut start = 0;
    for (index, ch) in top_level(s) {
        if ch == sep {
            v.push(&s[start..index]);
            start = index + ch.len_utf8();
        }
    }
    v.push(&s[start..]);
    v
}

/// Finds a reserved word used as a separator, such as `THEN` or `TO`.
/// The match must not touch a letter on either side.
pub fn find_word(s: &str, word: Word) -> Option<Range<usize>> {
    let needle = word.as_str();
    let upper = s.to_ascii_uppercase();
    for (index, _) in top_level(s) {
        if !upper[index..].starts_with(needle) {
            continue;
        }
        let end = index + needle.len();
        let before = upper[..index].chars().next_back();
        let after = upper[end..].chars().next();
        if before.map_or(true, |c| !is_basic_alphabetic(c) && c != '$')
            && after.map_or(true, |c| !is_basic_alphabetic(c))
        {
            return Some(index..end);
        }
    }
    None
}

/// First relational operator outside quotes and parentheses.
pub fn find_relation(s: &str) -> Option<(Range<usize>, Relation)> {
    for (index, ch) in top_level(s) {
        if ch != '<' && ch != '>' && ch != '=' {
            continue;
        }
        for (spelling, relation) in Relation::spellings() {
            if s[index..].starts_with(spelling) {
                return Some((index..index + spelling.len(), *relation));
            }
        }
    }
    None
}

/// A variable name: a letter, then letters or digits, then an optional `$`.
pub fn is_ident(s: &str) -> bool {
    let s = s.strip_suffix('$').unwrap_or(s);
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if is_basic_alphabetic(c) => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// A single string literal with nothing inside it that closes it early.
pub fn is_quoted(s: &str) -> bool {
    s.len() >= 2 && s.starts_with('"') && s.ends_with('"') && !s[1..s.len() - 1].contains('"')
}

/// Recognizes `name = expr` and returns both sides.
pub fn split_assignment(s: &str) -> Option<(&str, &str)> {
    let index = s.find('=')?;
    let name = s[..index].trim_matches(is_basic_whitespace);
    if !is_ident(name) {
        return None;
    }
    Some((name, s[index + 1..].trim_matches(is_basic_whitespace)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_line_number() {
        assert_eq!(lex("10 PRINT \"HI\"").unwrap(), (Some(10), "PRINT \"HI\""));
        assert_eq!(lex("  20PRINT").unwrap(), (Some(20), "PRINT"));
        assert_eq!(lex("30").unwrap(), (Some(30), ""));
        assert_eq!(lex("PRINT 1").unwrap(), (None, "PRINT 1"));
        assert!(lex("65530 END").is_err());
        assert!(lex("99999999 END").is_err());
    }

    #[test]
    fn test_split_word() {
        assert_eq!(split_word("print \"x\""), (Some(Word::Print1), "\"x\""));
        assert_eq!(split_word("HTAB5"), (Some(Word::Htab), "5"));
        assert_eq!(split_word("?CHR$(65)"), (Some(Word::Print2), "CHR$(65)"));
        assert_eq!(split_word("ENDX=1"), (None, "ENDX=1"));
    }

    #[test]
    fn test_split_top_level() {
        assert_eq!(split_top_level("1, \"a,b\", CHR$(2)", ','), vec!["1", " \"a,b\"", " CHR$(2)"]);
        assert_eq!(split_top_level("", ','), vec![""]);
    }

    #[test]
    fn test_find_word() {
        assert_eq!(find_word("A=1 THEN PRINT", Word::Then), Some(4..8));
        assert_eq!(find_word("\"THEN\" THEN X", Word::Then), Some(7..11));
        assert_eq!(find_word("I=TOTAL TO 5", Word::To), Some(8..10));
        assert_eq!(find_word("I=1TO10", Word::To), Some(3..5));
        assert_eq!(find_word("ATOM", Word::To), None);
    }

    #[test]
    fn test_find_relation() {
        assert_eq!(find_relation("A <= 3"), Some((2..4, Relation::LessEqual)));
        assert_eq!(find_relation("\"<\" = A"), Some((4..5, Relation::Equal)));
        assert_eq!(find_relation("A <> B"), Some((2..4, Relation::NotEqual)));
        assert_eq!(find_relation("A + B"), None);
    }

    #[test]
    fn test_idents() {
        assert!(is_ident("A"));
        assert!(is_ident("X1"));
        assert!(is_ident("NAME$"));
        assert!(!is_ident("1X"));
        assert!(!is_ident("A B"));
        assert!(!is_ident(""));
        assert_eq!(split_assignment("x = 5"), Some(("x", "5")));
        assert_eq!(split_assignment("A$=\"HI\""), Some(("A$", "\"HI\"")));
        assert_eq!(split_assignment("PRINT X"), None);
    }

    #[test]
    fn test_is_quoted() {
        assert!(is_quoted("\"HI\""));
        assert!(is_quoted("\"\""));
        assert!(!is_quoted("\"A\";\"B\""));
        assert!(!is_quoted("\""));
    }
}
