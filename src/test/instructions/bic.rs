use super::*;

#[test]
fn clears_masked_bits() {
    let processor = run(&[
        wide_move(WideMoveOp::Movz, true, 0, 0xFFFF, 0),
        wide_move(WideMoveOp::Movz, true, 1, 0x00FF, 0),
        logic_reg(LogicOp::Bic, true, 2, 0, 1, ShiftKind::Lsl, 0),
        halt(),
    ]);
    assert_eq!(processor.register(2), 0xFF00);
}
