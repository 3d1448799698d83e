use super::*;

#[test]
fn sets_n_and_z() {
    let processor = run(&[
        wide_move(WideMoveOp::Movn, true, 0, 0, 0),
        logic_reg(LogicOp::Ands, true, 1, 0, 0, ShiftKind::Lsl, 0),
        halt(),
    ]);
    assert!(processor.pstate().negative);
    assert!(!processor.pstate().zero);
}

#[test]
fn clears_c_and_v() {
    // first force C=1 via a non-borrowing subs, then ands must clear it
    let processor = run(&[
        wide_move(WideMoveOp::Movz, true, 0, 5, 0),
        arith_imm(ArithOp::Subs, true, constants::ZR, 0, 1, false),
        logic_reg(LogicOp::Ands, true, 1, 0, 0, ShiftKind::Lsl, 0),
        halt(),
    ]);
    assert!(!processor.pstate().carry);
    assert!(!processor.pstate().overflow);
    assert!(!processor.pstate().zero);
}

#[test]
fn zero_result() {
    let processor = run(&[
        wide_move(WideMoveOp::Movz, true, 0, 0xF0, 0),
        wide_move(WideMoveOp::Movz, true, 1, 0x0F, 0),
        logic_reg(LogicOp::Ands, true, 2, 0, 1, ShiftKind::Lsl, 0),
        halt(),
    ]);
    assert!(processor.pstate().zero);
    assert!(!processor.pstate().negative);
}
