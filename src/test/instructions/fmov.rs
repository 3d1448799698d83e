use super::*;

#[test]
fn general_to_fp_is_a_bit_move() {
    let bits = 2.0f64.to_bits();
    let processor = run(&[
        wide_move(WideMoveOp::Movz, true, 0, 0x4000, 3),
        fmov_to_fp(FpType::Double, 1, 0),
        halt(),
    ]);
    assert_eq!(processor.simd_register(1), bits);
}

#[test]
fn fp_to_general_round_trip() {
    let mut words = load_double(0, 0, -12.75);
    words.push(fmov_from_fp(FpType::Double, 5, 0));
    words.push(halt());

    let processor = run(&words);
    assert_eq!(processor.register(5), (-12.75f64).to_bits());
}

#[test]
fn fp_to_fp_copy() {
    let mut words = load_double(0, 0, 9.5);
    words.push(fp_unary(FpUnary::Fmov, FpType::Double, 3, 0));
    words.push(halt());

    let processor = run(&words);
    assert_eq!(double_in(&processor, 3), 9.5);
}

#[test]
fn single_move_masks_to_32_bits() {
    let mut words = load_single(0, 0, 1.5);
    words.push(fmov_from_fp(FpType::Single, 5, 0));
    words.push(halt());

    let processor = run(&words);
    assert_eq!(processor.register(5), u64::from(1.5f32.to_bits()));
}
