use super::*;

#[test]
fn increments_second_operand() {
    let processor = run(&[
        wide_move(WideMoveOp::Movz, true, 1, 20, 0),
        csinc(true, 2, 0, 1, Cond::Ne),
        halt(),
    ]);
    assert_eq!(processor.register(2), 21);
}

#[test]
fn takes_first_operand_unchanged() {
    let processor = run(&[
        wide_move(WideMoveOp::Movz, true, 0, 10, 0),
        csinc(true, 2, 0, 1, Cond::Eq),
        halt(),
    ]);
    assert_eq!(processor.register(2), 10);
}

#[test]
fn increment_wraps_in_word_width() {
    let processor = run(&[
        wide_move(WideMoveOp::Movn, false, 1, 0, 0),
        csinc(false, 2, 0, 1, Cond::Ne),
        halt(),
    ]);
    assert_eq!(processor.register(2), 0);
}
