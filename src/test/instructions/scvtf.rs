use super::*;

#[test]
fn converts_positive() {
    let processor = run(&[
        wide_move(WideMoveOp::Movz, true, 0, 7, 0),
        scvtf(true, FpType::Double, 1, 0),
        halt(),
    ]);
    assert_eq!(double_in(&processor, 1), 7.0);
}

#[test]
fn converts_negative_as_signed() {
    let processor = run(&[
        wide_move(WideMoveOp::Movn, true, 0, 6, 0),
        scvtf(true, FpType::Double, 1, 0),
        halt(),
    ]);
    assert_eq!(double_in(&processor, 1), -7.0);
}

#[test]
fn word_source_is_sign_extended() {
    let processor = run(&[
        wide_move(WideMoveOp::Movn, false, 0, 0, 0),
        scvtf(false, FpType::Double, 1, 0),
        halt(),
    ]);
    assert_eq!(double_in(&processor, 1), -1.0);
}
