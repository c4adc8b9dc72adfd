use super::{ast::*, lex::*, token::*, Error, LineNumber};

type Result<T> = std::result::Result<T, Error>;

/// Parses the text of one statement. Errors carry the line number.
pub fn parse(line_number: LineNumber, s: &str) -> Result<Statement> {
    match Statement::parse(s) {
        Err(e) => Err(e.in_line_number(line_number)),
        Ok(r) => Ok(r),
    }
}

fn expression(s: &str, msg: &str) -> Result<Expression> {
    if s.trim().is_empty() {
        return Err(error!(SyntaxError; msg));
    }
    Ok(Expression::new(s))
}

fn arguments<'a>(s: &'a str, counts: &[usize], msg: &str) -> Result<Vec<&'a str>> {
    let args: Vec<&str> = split_top_level(s, ',').into_iter().map(str::trim).collect();
    if !counts.contains(&args.len()) || args.iter().any(|a| a.is_empty()) {
        return Err(error!(SyntaxError; msg));
    }
    Ok(args)
}

fn filled(flag: Option<&&str>, msg: &str) -> Result<bool> {
    match flag {
        None => Ok(false),
        Some(f) if f.eq_ignore_ascii_case("F") => Ok(true),
        Some(_) => Err(error!(SyntaxError; msg)),
    }
}

fn no_arguments(s: &str, statement: Statement) -> Result<Statement> {
    if s.is_empty() {
        Ok(statement)
    } else {
        Err(error!(SyntaxError; "UNEXPECTED ARGUMENT"))
    }
}

impl Statement {
    fn parse(s: &str) -> Result<Statement> {
        match split_word(s) {
            (Some(word), rest) => Statement::for_word(word, rest),
            (None, _) => match split_assignment(s) {
                Some((name, expr)) => Ok(Statement::Let(
                    Ident::new(name),
                    expression(expr, "EXPECTED EXPRESSION")?,
                )),
                None => Err(error!(SyntaxError)),
            },
        }
    }

    fn for_word(word: Word, s: &str) -> Result<Statement> {
        use Word::*;
        match word {
            Circle => Self::r#circle(s),
            Cls => no_arguments(s, Statement::Cls),
            Color => Self::r#color(s),
            End => no_arguments(s, Statement::End),
            Fill => Self::r#fill(s),
            For => Self::r#for(s),
            Home => no_arguments(s, Statement::Home),
            Htab => Ok(Statement::Htab(expression(s, "EXPECTED COLUMN")?)),
            If => Self::r#if(s),
            Let => Self::r#let(s),
            Line => Self::r#line(s),
            List => no_arguments(s, Statement::List),
            New => no_arguments(s, Statement::New),
            Next => Self::r#next(s),
            Plot => Self::r#plot(s),
            Print1 | Print2 => Ok(Statement::Print(Self::printer_list(s))),
            Rect => Self::r#rect(s),
            Rem => Ok(Statement::Rem),
            Run => no_arguments(s, Statement::Run),
            Vtab => Ok(Statement::Vtab(expression(s, "EXPECTED ROW")?)),
            Else | Step | Then | To => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn printer_list(s: &str) -> Vec<PrintItem> {
        let mut v: Vec<PrintItem> = vec![];
        let mut start = 0;
        let separators: Vec<(usize, char)> = top_level(s)
            .filter(|&(_, ch)| ch == ';' || ch == ',')
            .collect();
        let last = separators.last().map(|&(_, ch)| ch);
        for (index, ch) in separators {
            let item = s[start..index].trim();
            if !item.is_empty() {
                v.push(PrintItem::Expression(Expression::new(item)));
            }
            if ch == ',' {
                v.push(PrintItem::Space);
            }
            start = index + 1;
        }
        let tail = s[start..].trim();
        if !tail.is_empty() {
            v.push(PrintItem::Expression(Expression::new(tail)));
            v.push(PrintItem::Newline);
        } else if last != Some(';') {
            v.push(PrintItem::Newline);
        }
        v
    }

    fn r#let(s: &str) -> Result<Statement> {
        match split_assignment(s) {
            Some((name, expr)) => Ok(Statement::Let(
                Ident::new(name),
                expression(expr, "EXPECTED EXPRESSION")?,
            )),
            None => Err(error!(SyntaxError; "EXPECTED ASSIGNMENT")),
        }
    }

    fn r#color(s: &str) -> Result<Statement> {
        let args = arguments(s, &[1, 2], "EXPECTED FOREGROUND[,BACKGROUND]")?;
        Ok(Statement::Color(
            Expression::new(args[0]),
            args.get(1).map(|bg| Expression::new(bg)),
        ))
    }

    fn r#plot(s: &str) -> Result<Statement> {
        let args = arguments(s, &[2], "EXPECTED X,Y")?;
        Ok(Statement::Plot(
            Expression::new(args[0]),
            Expression::new(args[1]),
        ))
    }

    fn r#fill(s: &str) -> Result<Statement> {
        let args = arguments(s, &[2], "EXPECTED X,Y")?;
        Ok(Statement::Fill(
            Expression::new(args[0]),
            Expression::new(args[1]),
        ))
    }

    fn r#line(s: &str) -> Result<Statement> {
        let args = arguments(s, &[4], "EXPECTED X1,Y1,X2,Y2")?;
        Ok(Statement::Line(
            Expression::new(args[0]),
            Expression::new(args[1]),
            Expression::new(args[2]),
            Expression::new(args[3]),
        ))
    }

    fn r#rect(s: &str) -> Result<Statement> {
        let msg = "EXPECTED X1,Y1,X2,Y2[,F]";
        let args = arguments(s, &[4, 5], msg)?;
        Ok(Statement::Rect(
            Expression::new(args[0]),
            Expression::new(args[1]),
            Expression::new(args[2]),
            Expression::new(args[3]),
            filled(args.get(4), msg)?,
        ))
    }

    fn r#circle(s: &str) -> Result<Statement> {
        let msg = "EXPECTED X,Y,R[,F]";
        let args = arguments(s, &[3, 4], msg)?;
        Ok(Statement::Circle(
            Expression::new(args[0]),
            Expression::new(args[1]),
            Expression::new(args[2]),
            filled(args.get(3), msg)?,
        ))
    }

    fn r#if(s: &str) -> Result<Statement> {
        let then = match find_word(s, Word::Then) {
            Some(range) => range,
            None => return Err(error!(SyntaxError; "EXPECTED THEN")),
        };
        let predicate = Self::condition(&s[..then.start])?;
        let branches = &s[then.end..];
        let (then_text, else_text) = match find_word(branches, Word::Else) {
            Some(range) => (&branches[..range.start], Some(&branches[range.end..])),
            None => (branches, None),
        };
        let then_stmt = Self::branch(then_text)?;
        let else_stmt = match else_text {
            Some(text) => Some(Box::new(Self::branch(text)?)),
            None => None,
        };
        Ok(Statement::If(predicate, Box::new(then_stmt), else_stmt))
    }

    fn condition(s: &str) -> Result<Condition> {
        match find_relation(s) {
            Some((range, relation)) => Ok(Condition::Compare(
                expression(&s[..range.start], "EXPECTED EXPRESSION")?,
                relation,
                expression(&s[range.end..], "EXPECTED EXPRESSION")?,
            )),
            None => Ok(Condition::Truthy(expression(s, "EXPECTED EXPRESSION")?)),
        }
    }

    /// A THEN or ELSE branch: bare assignment wins over keywords.
    fn branch(s: &str) -> Result<Statement> {
        let s = s.trim();
        if s.is_empty() {
            return Err(error!(SyntaxError; "EXPECTED STATEMENT"));
        }
        match split_assignment(s) {
            Some((name, expr)) => Ok(Statement::Let(
                Ident::new(name),
                expression(expr, "EXPECTED EXPRESSION")?,
            )),
            None => Statement::parse(s),
        }
    }

    fn r#for(s: &str) -> Result<Statement> {
        let msg = "EXPECTED FOR <VAR>=<START> TO <END> [STEP <STEP>]";
        let (name, range) = match split_assignment(s) {
            Some(parts) => parts,
            None => return Err(error!(SyntaxError; msg)),
        };
        let to = match find_word(range, Word::To) {
            Some(to) => to,
            None => return Err(error!(SyntaxError; msg)),
        };
        let from = expression(&range[..to.start], msg)?;
        let rest = &range[to.end..];
        let (to_expr, step_expr) = match find_word(rest, Word::Step) {
            Some(step) => (
                expression(&rest[..step.start], msg)?,
                Some(expression(&rest[step.end..], msg)?),
            ),
            None => (expression(rest, msg)?, None),
        };
        Ok(Statement::For(Ident::new(name), from, to_expr, step_expr))
    }

    fn r#next(s: &str) -> Result<Statement> {
        if s.is_empty() {
            Ok(Statement::Next(None))
        } else if is_ident(s) {
            Ok(Statement::Next(Some(Ident::new(s))))
        } else {
            Err(error!(SyntaxError; "EXPECTED VARIABLE"))
        }
    }
}
