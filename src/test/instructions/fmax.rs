use super::*;

#[test]
fn picks_larger() {
    let mut words = load_double(0, 0, 1.0);
    words.extend(load_double(0, 1, 2.0));
    words.push(fp_arith(FpArith::Fmax, FpType::Double, 2, 0, 1));
    words.push(halt());

    let processor = run(&words);
    assert_eq!(double_in(&processor, 2), 2.0);
}
