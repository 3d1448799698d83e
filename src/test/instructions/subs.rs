use super::*;

#[test]
fn no_borrow_sets_carry() {
    let processor = run(&[
        wide_move(WideMoveOp::Movz, true, 0, 5, 0),
        arith_imm(ArithOp::Subs, true, 1, 0, 3, false),
        halt(),
    ]);
    assert_eq!(processor.register(1), 2);
    assert!(processor.pstate().carry);
    assert!(!processor.pstate().negative);
}

#[test]
fn borrow_clears_carry() {
    let processor = run(&[
        wide_move(WideMoveOp::Movz, true, 0, 3, 0),
        wide_move(WideMoveOp::Movz, true, 2, 5, 0),
        arith_reg(ArithOp::Subs, true, 1, 0, 2, ShiftKind::Lsl, 0),
        halt(),
    ]);
    assert_eq!(processor.register(1), -2i64 as u64);
    assert!(!processor.pstate().carry);
    assert!(processor.pstate().negative);
    assert!(!processor.pstate().overflow);
}

#[test]
fn equal_operands_set_z_and_carry() {
    let processor = run(&[
        wide_move(WideMoveOp::Movz, true, 0, 42, 0),
        arith_imm(ArithOp::Subs, true, constants::ZR, 0, 42, false),
        halt(),
    ]);
    assert!(processor.pstate().zero);
    assert!(processor.pstate().carry);
}
