use super::Val;
use std::convert::TryFrom;

pub struct Function {}

impl Function {
    /// Recognizes `CHR$(...)` spanning the whole expression and returns
    /// the argument text.
    pub fn chr_argument(s: &str) -> Option<&str> {
        let head = s.get(..4)?;
        if !head.eq_ignore_ascii_case("CHR$") {
            return None;
        }
        let args = s[4..].trim_start();
        let inner = args.strip_prefix('(')?.strip_suffix(')')?;
        let mut depth = 0usize;
        let mut quoted = false;
        for ch in inner.chars() {
            match ch {
                '"' => quoted = !quoted,
                '(' if !quoted => depth += 1,
                ')' if !quoted => {
                    if depth == 0 {
                        return None;
                    }
                    depth -= 1;
                }
                _ => {}
            }
        }
        Some(inner)
    }

    /// Character for codes 1 to 255, `?` for anything else.
    pub fn chr(val: Val) -> Val {
        match i32::try_from(val) {
            Ok(code) if (1..=255).contains(&code) => {
                Val::String(char::from(code as u8).to_string().into())
            }
            _ => Val::from("?"),
        }
    }
}
