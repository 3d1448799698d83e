use super::*;

#[test]
fn inverts_operand() {
    let processor = run(&[wide_move(WideMoveOp::Movn, true, 0, 0, 0), halt()]);
    assert_eq!(processor.register(0), u64::max_value());
}

#[test]
fn small_negative_constant() {
    // movn x0, #6 is the idiom for -7
    let processor = run(&[wide_move(WideMoveOp::Movn, true, 0, 6, 0), halt()]);
    assert_eq!(processor.register(0) as i64, -7);
}

#[test]
fn word_width_masks() {
    let processor = run(&[wide_move(WideMoveOp::Movn, false, 0, 0, 0), halt()]);
    assert_eq!(processor.register(0), 0xFFFF_FFFF);
}
