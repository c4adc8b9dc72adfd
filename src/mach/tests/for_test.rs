use super::*;

#[test]
fn test_loop_variable_ends_past_limit() {
    let mut r = Runtime::default();
    r.enter("10 FOR I=1 TO 3");
    r.enter("20 NEXT I");
    r.enter("30 PRINT I");
    r.enter("RUN");
    assert_eq!(run(&mut r), "4\n");
    assert_eq!(r.loop_depth(), 0);
}

#[test]
fn test_loop_body_runs_each_pass() {
    let mut r = Runtime::default();
    r.enter("10 for i=1 to 3");
    r.enter("20?i;");
    r.enter("30next");
    r.enter("run");
    assert_eq!(run(&mut r), "123");
}

#[test]
fn test_negative_step() {
    let mut r = Runtime::default();
    r.enter("10 FOR N = 10 TO 1 STEP -3");
    r.enter("20 PRINT N,");
    r.enter("30 NEXT N");
    r.enter("RUN");
    assert_eq!(run(&mut r), "10 \n7 \n4 \n1 \n");
}

#[test]
fn test_body_runs_once_when_already_past() {
    let mut r = Runtime::default();
    r.enter("10 FOR I = 5 TO 1");
    r.enter("20 PRINT I");
    r.enter("30 NEXT I");
    r.enter("RUN");
    assert_eq!(run(&mut r), "5\n");
}

#[test]
fn test_nested_loops() {
    let mut r = Runtime::default();
    r.enter("10 FOR Y=1 TO 2");
    r.enter("20 FOR X=8 TO 9");
    r.enter("30 PRINT Y;X;\" \";");
    r.enter("40 NEXT X");
    r.enter("50 NEXT Y");
    r.enter("RUN");
    assert_eq!(run(&mut r), "18 19 28 29 ");
    assert_eq!(r.loop_depth(), 0);
}

#[test]
fn test_next_name_drops_inner_frames() {
    let mut r = Runtime::default();
    r.enter("10 FOR Y=1 TO 2");
    r.enter("20 FOR X=8 TO 9");
    r.enter("30 PRINT Y;X,");
    r.enter("40 NEXT Y");
    r.enter("RUN");
    assert_eq!(run(&mut r), "18 \n28 \n");
    assert_eq!(r.loop_depth(), 0);
}

#[test]
fn test_restarting_a_loop_replaces_its_frame() {
    let mut r = Runtime::default();
    r.enter("10 FOR I=1 TO 2");
    r.enter("20 FOR J=1 TO 2");
    r.enter("30 FOR I=1 TO 1");
    r.enter("40 END");
    r.enter("RUN");
    assert_eq!(run(&mut r), "Program ended\n");
    assert_eq!(r.loop_depth(), 1);
}

#[test]
fn test_next_without_for() {
    let mut r = Runtime::default();
    r.enter("10 NEXT");
    r.enter("20 NEXT Q");
    r.enter("30 PRINT \"AFTER\"");
    r.enter("RUN");
    assert_eq!(
        run(&mut r),
        "?NEXT WITHOUT FOR IN 10\n?NEXT WITHOUT FOR IN 20\nAFTER\n"
    );
}

#[test]
fn test_loops_are_not_direct() {
    let mut r = Runtime::default();
    r.enter("FOR I=1 TO 2");
    assert_eq!(run(&mut r), "?ILLEGAL DIRECT\n");
    r.enter("NEXT");
    assert_eq!(run(&mut r), "?ILLEGAL DIRECT\n");
}

#[test]
fn test_run_clears_loop_stack() {
    let mut r = Runtime::default();
    r.enter("10 FOR I=1 TO 9");
    r.enter("20 END");
    r.enter("RUN");
    run(&mut r);
    assert_eq!(r.loop_depth(), 1);
    r.enter("10 FOR J=1 TO 9");
    r.enter("RUN");
    run(&mut r);
    assert_eq!(r.loop_depth(), 1);
}

#[test]
fn test_endless_loop_can_be_interrupted() {
    let mut r = Runtime::default();
    r.enter("10 FOR I=1 TO 2 STEP 0");
    r.enter("20 NEXT I");
    r.enter("RUN");
    let s = run_cycles(&mut r, 50);
    assert!(s.ends_with("Execution cycles exceeded.\n"));
    assert!(r.is_running());
    r.interrupt();
    assert_eq!(run(&mut r), "?BREAK IN 20\n");
    assert!(!r.is_running());
}
