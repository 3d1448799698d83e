use super::*;

#[test]
fn zero_result_sets_z() {
    let processor = run(&[
        arith_reg(ArithOp::Adds, true, 0, constants::ZR, constants::ZR, ShiftKind::Lsl, 0),
        halt(),
    ]);
    assert!(processor.pstate().zero);
    assert!(!processor.pstate().negative);
    assert!(!processor.pstate().carry);
    assert!(!processor.pstate().overflow);
}

#[test]
fn unsigned_wrap_sets_carry() {
    let processor = run(&[
        wide_move(WideMoveOp::Movn, true, 0, 0, 0),
        arith_imm(ArithOp::Adds, true, 1, 0, 1, false),
        halt(),
    ]);
    assert_eq!(processor.register(1), 0);
    assert!(processor.pstate().carry);
    assert!(processor.pstate().zero);
}

#[test]
fn signed_overflow_64() {
    // X0 = 0x7FFFFFFFFFFFFFFF built out of four 16-bit lanes
    let processor = run(&[
        wide_move(WideMoveOp::Movz, true, 0, 0xFFFF, 0),
        wide_move(WideMoveOp::Movk, true, 0, 0xFFFF, 1),
        wide_move(WideMoveOp::Movk, true, 0, 0xFFFF, 2),
        wide_move(WideMoveOp::Movk, true, 0, 0x7FFF, 3),
        arith_reg(ArithOp::Adds, true, 1, 0, 0, ShiftKind::Lsl, 0),
        halt(),
    ]);

    assert_eq!(processor.register(1), 0xFFFF_FFFF_FFFF_FFFE);
    assert!(processor.pstate().negative);
    assert!(!processor.pstate().zero);
    assert!(!processor.pstate().carry);
    assert!(processor.pstate().overflow);
}

#[test]
fn signed_overflow_32() {
    let processor = run(&[
        wide_move(WideMoveOp::Movz, false, 0, 0xFFFF, 0),
        wide_move(WideMoveOp::Movk, false, 0, 0x7FFF, 1),
        arith_imm(ArithOp::Adds, false, 1, 0, 1, false),
        halt(),
    ]);
    assert_eq!(processor.register(1), 0x8000_0000);
    assert!(processor.pstate().negative);
    assert!(processor.pstate().overflow);
    assert!(!processor.pstate().carry);
}
