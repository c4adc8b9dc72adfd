use super::*;
use crate::display::Call;
use crate::mach::Val;

#[test]
fn test_enter_classifies_lines() {
    let mut r = Runtime::default();
    assert!(r.enter("10 PRINT 1"));
    assert!(r.enter("20 PRINT 2"));
    assert!(r.enter("20"));
    assert!(!r.enter(""));
    assert_eq!(r.listing().line_numbers(), vec![10]);
    assert!(!r.enter("70000 PRINT"));
    assert_eq!(run(&mut r), "?SYNTAX ERROR; INVALID LINE NUMBER\n");
}

#[test]
fn test_long_line_rejected() {
    let mut r = Runtime::default();
    let long = format!("10 PRINT \"{}\"", "X".repeat(300));
    assert!(!r.enter(&long));
    assert!(r.listing().is_empty());
    assert_eq!(run(&mut r), "?LINE BUFFER OVERFLOW\n");
}

#[test]
fn test_errors_do_not_stop_program() {
    let mut r = Runtime::default();
    r.enter("10 PRINT 1/0");
    r.enter("20 FROB");
    r.enter("30 PRINT \"DONE\"");
    r.enter("RUN");
    assert_eq!(
        run(&mut r),
        "?ERROR: DIVISION BY ZERO IN 10\n?SYNTAX ERROR IN 20\nDONE\n"
    );
    assert!(!r.is_running());
}

#[test]
fn test_end_and_new_stop_program() {
    let mut r = Runtime::default();
    r.enter("10 A=1");
    r.enter("20 END");
    r.enter("30 A=2");
    r.enter("RUN");
    assert_eq!(run(&mut r), "Program ended\n");
    assert_eq!(r.vars().fetch("A"), Val::Integer(1));
    r.enter("20 NEW");
    r.enter("RUN");
    assert_eq!(run(&mut r), "Program cleared\n");
    assert!(r.listing().is_empty());
    assert!(r.vars().is_empty());
}

#[test]
fn test_run_inside_program_restarts() {
    let mut r = Runtime::default();
    r.enter("10 N=N+1");
    r.enter("20 IF N < 3 THEN RUN");
    r.enter("30 PRINT N");
    r.enter("RUN");
    assert_eq!(run(&mut r), "3\n");
}

#[test]
fn test_direct_line_stops_running_program() {
    let mut r = Runtime::default();
    let mut port = Transcript::new();
    r.enter("10 X=X+1");
    r.enter("20 RUN");
    r.enter("RUN");
    assert_eq!(r.execute(&mut port, 10), Event::Running);
    r.enter("PRINT \"HELLO\"");
    assert!(!r.is_running());
    assert_eq!(r.execute(&mut port, 10), Event::Stopped);
    assert_eq!(port.text, "HELLO\n");
}

#[test]
fn test_direct_lines_run_in_order() {
    let mut r = Runtime::default();
    r.enter("X=42");
    r.enter("PRINT X");
    assert_eq!(run(&mut r), "42\n");
    r.enter("10 PRINT X");
    r.enter("X=1");
    r.enter("RUN");
    r.enter("X=2");
    r.enter("RUN");
    assert_eq!(run(&mut r), "1\n2\n");
}

#[test]
fn test_queued_line_waits_for_program() {
    let mut r = Runtime::default();
    let mut port = Transcript::new();
    r.enter("10 PRINT 1");
    r.enter("20 PRINT 2");
    r.enter("RUN");
    r.enter("PRINT 3");
    assert_eq!(r.execute(&mut port, 1), Event::Running);
    assert_eq!(port.text, "1\n");
    assert_eq!(r.execute(&mut port, 10), Event::Stopped);
    assert_eq!(port.text, "1\n2\n3\n");
}

#[test]
fn test_process_line() {
    let mut r = Runtime::default();
    let mut port = Transcript::new();
    r.process_line("10 COLOR 2", &mut port);
    r.process_line("20 PLOT 1,2", &mut port);
    r.process_line("RUN", &mut port);
    assert_eq!(
        port.calls,
        vec![Call::TextColor(2), Call::Pixel(1, 2, None)]
    );
}

#[test]
fn test_deleted_line_skipped_mid_run() {
    let mut r = Runtime::default();
    let mut port = Transcript::new();
    r.enter("10 PRINT 1");
    r.enter("20 PRINT 2");
    r.enter("RUN");
    assert_eq!(r.execute(&mut port, 1), Event::Running);
    r.enter("20");
    assert_eq!(r.execute(&mut port, 10), Event::Stopped);
    assert_eq!(port.text, "1\n");
}
