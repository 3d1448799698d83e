use super::*;

#[test]
fn multiply_add() {
    let processor = run(&[
        wide_move(WideMoveOp::Movz, true, 0, 6, 0),
        wide_move(WideMoveOp::Movz, true, 1, 7, 0),
        wide_move(WideMoveOp::Movz, true, 2, 100, 0),
        mul_reg(true, 3, 0, 1, 2, false),
        halt(),
    ]);
    assert_eq!(processor.register(3), 142);
}

#[test]
fn plain_multiply_via_zr() {
    // the canonical `mul` expansion
    let processor = run(&[
        wide_move(WideMoveOp::Movz, true, 0, 12, 0),
        wide_move(WideMoveOp::Movz, true, 1, 12, 0),
        mul_reg(true, 2, 0, 1, constants::ZR, false),
        halt(),
    ]);
    assert_eq!(processor.register(2), 144);
}

#[test]
fn word_width_wraps() {
    let processor = run(&[
        wide_move(WideMoveOp::Movz, false, 0, 1, 1),
        mul_reg(false, 1, 0, 0, constants::ZR, false),
        halt(),
    ]);
    // 0x10000 squared wraps out of the 32-bit view
    assert_eq!(processor.register(1), 0);
}
