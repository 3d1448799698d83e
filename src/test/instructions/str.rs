use super::*;

#[test]
fn stores_little_endian() {
    let processor = run(&[
        wide_move(WideMoveOp::Movz, true, 0, 0x1234, 0),
        wide_move(WideMoveOp::Movk, true, 0, 0x5678, 1),
        wide_move(WideMoveOp::Movz, true, 1, 0x100, 0),
        sdt_unsigned(false, true, 0, 1, 0),
        halt(),
    ]);
    assert_eq!(
        &processor.memory().data()[0x100..0x108],
        &[0x34, 0x12, 0x78, 0x56, 0, 0, 0, 0]
    );
}

#[test]
fn word_store_writes_low_half() {
    let processor = run(&[
        wide_move(WideMoveOp::Movn, true, 0, 0, 0),
        wide_move(WideMoveOp::Movz, true, 1, 0x100, 0),
        sdt_unsigned(false, false, 0, 1, 0),
        halt(),
    ]);
    assert_eq!(
        &processor.memory().data()[0x100..0x108],
        &[0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0]
    );
}

#[test]
fn pre_index_writes_back() {
    let processor = run(&[
        wide_move(WideMoveOp::Movz, true, 0, 55, 0),
        wide_move(WideMoveOp::Movz, true, 1, 0x100, 0),
        sdt_index(false, true, 0, 1, 8, true),
        halt(),
    ]);
    assert_eq!(processor.memory().data()[0x108], 55);
    assert_eq!(processor.register(1), 0x108);
}

#[test]
fn post_index_writes_back_after_access() {
    let processor = run(&[
        wide_move(WideMoveOp::Movz, true, 0, 66, 0),
        wide_move(WideMoveOp::Movz, true, 1, 0x100, 0),
        sdt_index(false, true, 0, 1, -16, false),
        halt(),
    ]);
    assert_eq!(processor.memory().data()[0x100], 66);
    assert_eq!(processor.register(1), 0x100 - 16);
}

#[test]
fn negative_pre_index() {
    let processor = run(&[
        wide_move(WideMoveOp::Movz, true, 0, 77, 0),
        wide_move(WideMoveOp::Movz, true, 1, 0x100, 0),
        sdt_index(false, true, 0, 1, -8, true),
        halt(),
    ]);
    assert_eq!(processor.memory().data()[0xF8], 77);
    assert_eq!(processor.register(1), 0xF8);
}
