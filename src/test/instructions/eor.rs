use super::*;

#[test]
fn toggles_bits() {
    let processor = run(&[
        wide_move(WideMoveOp::Movz, true, 0, 0xFF00, 0),
        wide_move(WideMoveOp::Movz, true, 1, 0x0FF0, 0),
        logic_reg(LogicOp::Eor, true, 2, 0, 1, ShiftKind::Lsl, 0),
        halt(),
    ]);
    assert_eq!(processor.register(2), 0xF0F0);
}

#[test]
fn self_xor_clears() {
    let processor = run(&[
        wide_move(WideMoveOp::Movz, true, 0, 0xABCD, 0),
        logic_reg(LogicOp::Eor, true, 0, 0, 0, ShiftKind::Lsl, 0),
        halt(),
    ]);
    assert_eq!(processor.register(0), 0);
}
