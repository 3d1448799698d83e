use super::*;

#[test]
fn plain() {
    let processor = run(&[wide_move(WideMoveOp::Movz, true, 0, 42, 0), halt()]);
    assert_eq!(processor.register(0), 42);
}

#[test]
fn shifted_lane() {
    let processor = run(&[wide_move(WideMoveOp::Movz, true, 0, 0xABCD, 3), halt()]);
    assert_eq!(processor.register(0), 0xABCD_0000_0000_0000);
}

#[test]
fn clears_previous_value() {
    let processor = run(&[
        wide_move(WideMoveOp::Movz, true, 0, 0xFFFF, 0),
        wide_move(WideMoveOp::Movz, true, 0, 1, 1),
        halt(),
    ]);
    assert_eq!(processor.register(0), 1 << 16);
}
