use std::collections::HashMap;

thread_local!(
    static STRING_TO_WORD: HashMap<&'static str, Word> = Word::all()
        .iter()
        .map(|w| (w.as_str(), *w))
        .collect();
);

/// Reserved words that begin a statement, plus the words that
/// only appear inside one.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Circle,
    Cls,
    Color,
    Else,
    End,
    Fill,
    For,
    Home,
    Htab,
    If,
    Let,
    Line,
    List,
    New,
    Next,
    Plot,
    Print1,
    Print2,
    Rect,
    Rem,
    Run,
    Step,
    Then,
    To,
    Vtab,
}

impl Word {
    fn all() -> &'static [Word] {
        use Word::*;
        &[
            Circle, Cls, Color, Else, End, Fill, For, Home, Htab, If, Let, Line, List, New, Next,
            Plot, Print1, Print2, Rect, Rem, Run, Step, Then, To, Vtab,
        ]
    }

    /// Case-insensitive lookup of a whole word.
    pub fn from_string(s: &str) -> Option<Word> {
        let upper = s.to_ascii_uppercase();
        STRING_TO_WORD.with(|stw| stw.get(upper.as_str()).copied())
    }

    pub fn as_str(&self) -> &'static str {
        use Word::*;
        match self {
            Circle => "CIRCLE",
            Cls => "CLS",
            Color => "COLOR",
            Else => "ELSE",
            End => "END",
            Fill => "FILL",
            For => "FOR",
            Home => "HOME",
            Htab => "HTAB",
            If => "IF",
            Let => "LET",
            Line => "LINE",
            List => "LIST",
            New => "NEW",
            Next => "NEXT",
            Plot => "PLOT",
            Print1 => "PRINT",
            Print2 => "?",
            Rect => "RECT",
            Rem => "REM",
            Run => "RUN",
            Step => "STEP",
            Then => "THEN",
            To => "TO",
            Vtab => "VTAB",
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Flat arithmetic, evaluated strictly left to right.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        match ch {
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Relation {
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Relation {
    /// Two-character spellings come first so `<=` is never read as `<`.
    pub fn spellings() -> &'static [(&'static str, Relation)] {
        use Relation::*;
        &[
            ("<>", NotEqual),
            ("><", NotEqual),
            ("<=", LessEqual),
            ("=<", LessEqual),
            (">=", GreaterEqual),
            ("=>", GreaterEqual),
            ("<", Less),
            (">", Greater),
            ("=", Equal),
        ]
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Relation::*;
        match self {
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
        }
    }
}
