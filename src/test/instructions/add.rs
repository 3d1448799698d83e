use super::*;

#[test]
fn immediate() {
    let processor = run(&[arith_imm(ArithOp::Add, true, 1, 0, 7, false), halt()]);
    assert_eq!(processor.register(1), 7);
}

#[test]
fn immediate_shifted() {
    let processor = run(&[arith_imm(ArithOp::Add, true, 1, 0, 5, true), halt()]);
    assert_eq!(processor.register(1), 5 << 12);
}

#[test]
fn register_with_shift() {
    let processor = run(&[
        wide_move(WideMoveOp::Movz, true, 0, 3, 0),
        arith_reg(ArithOp::Add, true, 1, 0, 0, ShiftKind::Lsl, 4),
        halt(),
    ]);
    assert_eq!(processor.register(1), 3 + (3 << 4));
}

#[test]
fn word_write_zero_extends() {
    let processor = run(&[
        wide_move(WideMoveOp::Movn, true, 1, 0, 0),
        arith_imm(ArithOp::Add, false, 2, 1, 1, false),
        halt(),
    ]);
    // the 32-bit sum wraps and the upper half of the slot stays clear
    assert_eq!(processor.register(1), u64::max_value());
    assert_eq!(processor.register(2), 0);
}
