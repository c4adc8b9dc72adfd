use super::*;

fn parse_str(s: &str) -> Option<Statement> {
    parse(None, s).ok()
}

fn expr(s: &str) -> Expression {
    Expression::new(s)
}

#[test]
fn test_let_and_implicit_let() {
    let answer = Statement::Let(Ident::new("TER"), expr("BAR"));
    assert_eq!(parse_str("let ter=BAR"), Some(answer.clone()));
    assert_eq!(parse_str("ter = BAR"), Some(answer));
    assert_eq!(parse_str("LET 5=3"), None);
}

#[test]
fn test_unknown_word_is_syntax_error() {
    let err = parse(Some(40), "FROB 1,2").unwrap_err();
    assert_eq!(err.to_string(), "SYNTAX ERROR IN 40");
}

#[test]
fn test_printer_list() {
    assert_eq!(
        parse_str("PRINT \"A\";B, C"),
        Some(Statement::Print(vec![
            PrintItem::Expression(expr("\"A\"")),
            PrintItem::Expression(expr("B")),
            PrintItem::Space,
            PrintItem::Expression(expr("C")),
            PrintItem::Newline,
        ]))
    );
    assert_eq!(
        parse_str("? \"NO NEWLINE\";"),
        Some(Statement::Print(vec![PrintItem::Expression(expr(
            "\"NO NEWLINE\""
        ))]))
    );
    assert_eq!(
        parse_str("PRINT \"A\","),
        Some(Statement::Print(vec![
            PrintItem::Expression(expr("\"A\"")),
            PrintItem::Space,
            PrintItem::Newline,
        ]))
    );
    assert_eq!(
        parse_str("PRINT"),
        Some(Statement::Print(vec![PrintItem::Newline]))
    );
    assert_eq!(
        parse_str("PRINT \"A;B\""),
        Some(Statement::Print(vec![
            PrintItem::Expression(expr("\"A;B\"")),
            PrintItem::Newline,
        ]))
    );
}

#[test]
fn test_graphics_shapes() {
    assert_eq!(
        parse_str("PLOT 10, Y+1"),
        Some(Statement::Plot(expr("10"), expr("Y+1")))
    );
    assert_eq!(parse_str("PLOT 10"), None);
    assert_eq!(parse_str("PLOT 1,2,3"), None);
    assert_eq!(parse_str("PLOT 1,"), None);
    assert_eq!(
        parse_str("RECT 1,2,3,4,f"),
        Some(Statement::Rect(
            expr("1"),
            expr("2"),
            expr("3"),
            expr("4"),
            true
        ))
    );
    assert_eq!(parse_str("RECT 1,2,3,4,X"), None);
    assert_eq!(
        parse_str("CIRCLE 50,40,R"),
        Some(Statement::Circle(expr("50"), expr("40"), expr("R"), false))
    );
    assert_eq!(
        parse_str("LINE 0,0,239,159"),
        Some(Statement::Line(
            expr("0"),
            expr("0"),
            expr("239"),
            expr("159")
        ))
    );
    assert_eq!(parse_str("FILL 3,4"), Some(Statement::Fill(expr("3"), expr("4"))));
}

#[test]
fn test_color() {
    assert_eq!(parse_str("COLOR 5"), Some(Statement::Color(expr("5"), None)));
    assert_eq!(
        parse_str("COLOR 1,15"),
        Some(Statement::Color(expr("1"), Some(expr("15"))))
    );
    assert_eq!(parse_str("COLOR"), None);
}

#[test]
fn test_no_argument_words() {
    assert_eq!(parse_str("cls"), Some(Statement::Cls));
    assert_eq!(parse_str("HOME"), Some(Statement::Home));
    assert_eq!(parse_str("END"), Some(Statement::End));
    assert_eq!(parse_str("RUN 100"), None);
    assert_eq!(parse_str("REM anything at all: 1,2"), Some(Statement::Rem));
}

#[test]
fn test_if_then_else() {
    assert_eq!(
        parse_str("IF 1 = 2 THEN PRINT \"A\" ELSE PRINT \"B\""),
        Some(Statement::If(
            Condition::Compare(expr("1"), Relation::Equal, expr("2")),
            Box::new(Statement::Print(vec![
                PrintItem::Expression(expr("\"A\"")),
                PrintItem::Newline
            ])),
            Some(Box::new(Statement::Print(vec![
                PrintItem::Expression(expr("\"B\"")),
                PrintItem::Newline
            ]))),
        ))
    );
    assert_eq!(
        parse_str("IF X THEN Y=1"),
        Some(Statement::If(
            Condition::Truthy(expr("X")),
            Box::new(Statement::Let(Ident::new("Y"), expr("1"))),
            None
        ))
    );
    assert_eq!(parse_str("IF X PRINT 1"), None);
    assert_eq!(parse_str("IF X THEN"), None);
}

#[test]
fn test_for_next() {
    assert_eq!(
        parse_str("FOR I = 1 TO 10"),
        Some(Statement::For(Ident::new("I"), expr("1"), expr("10"), None))
    );
    assert_eq!(
        parse_str("for j=10 to 1 step -2"),
        Some(Statement::For(
            Ident::new("J"),
            expr("10"),
            expr("1"),
            Some(expr("-2"))
        ))
    );
    assert_eq!(parse_str("FOR I 1 TO 3"), None);
    assert_eq!(parse_str("FOR I=1"), None);
    assert_eq!(parse_str("NEXT"), Some(Statement::Next(None)));
    assert_eq!(parse_str("next i"), Some(Statement::Next(Some(Ident::new("I")))));
    assert_eq!(parse_str("NEXT 3"), None);
}

#[test]
fn test_cursor() {
    assert_eq!(parse_str("HTAB 5"), Some(Statement::Htab(expr("5"))));
    assert_eq!(parse_str("VTAB Y"), Some(Statement::Vtab(expr("Y"))));
    assert_eq!(parse_str("VTAB"), None);
}
