use super::*;

#[test]
fn selects_first_when_condition_holds() {
    // Z is set at reset, so EQ holds
    let processor = run(&[
        wide_move(WideMoveOp::Movz, true, 0, 10, 0),
        wide_move(WideMoveOp::Movz, true, 1, 20, 0),
        csel(true, 2, 0, 1, Cond::Eq),
        halt(),
    ]);
    assert_eq!(processor.register(2), 10);
}

#[test]
fn selects_second_otherwise() {
    let processor = run(&[
        wide_move(WideMoveOp::Movz, true, 0, 10, 0),
        wide_move(WideMoveOp::Movz, true, 1, 20, 0),
        csel(true, 2, 0, 1, Cond::Ne),
        halt(),
    ]);
    assert_eq!(processor.register(2), 20);
}
