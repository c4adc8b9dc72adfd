use super::token::Relation;
use std::rc::Rc;

/// One parsed statement. Argument shapes are checked by the parser;
/// expressions stay as source text for the evaluator.
#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Circle(Expression, Expression, Expression, bool),
    Cls,
    Color(Expression, Option<Expression>),
    End,
    Fill(Expression, Expression),
    For(Ident, Expression, Expression, Option<Expression>),
    Home,
    Htab(Expression),
    If(Condition, Box<Statement>, Option<Box<Statement>>),
    Let(Ident, Expression),
    Line(Expression, Expression, Expression, Expression),
    List,
    New,
    Next(Option<Ident>),
    Plot(Expression, Expression),
    Print(Vec<PrintItem>),
    Rect(Expression, Expression, Expression, Expression, bool),
    Rem,
    Run,
    Vtab(Expression),
}

/// Canonical (uppercase) variable name.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Ident(Rc<str>);

impl Ident {
    pub fn new(s: &str) -> Ident {
        Ident(s.trim().to_ascii_uppercase().into())
    }

    pub fn as_rc(&self) -> &Rc<str> {
        &self.0
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unparsed expression text, trimmed.
#[derive(Debug, PartialEq, Clone)]
pub struct Expression(Rc<str>);

impl Expression {
    pub fn new(s: &str) -> Expression {
        Expression(s.trim().into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Condition {
    Compare(Expression, Relation, Expression),
    Truthy(Expression),
}

#[derive(Debug, PartialEq, Clone)]
pub enum PrintItem {
    Expression(Expression),
    Space,
    Newline,
}
