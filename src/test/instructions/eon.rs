use super::*;

#[test]
fn xor_with_inverted_operand() {
    let processor = run(&[
        wide_move(WideMoveOp::Movz, true, 0, 0xFF, 0),
        wide_move(WideMoveOp::Movz, true, 1, 0x0F, 0),
        logic_reg(LogicOp::Eon, true, 2, 0, 1, ShiftKind::Lsl, 0),
        halt(),
    ]);
    assert_eq!(processor.register(2), 0xFF ^ !0x0Fu64);
}
