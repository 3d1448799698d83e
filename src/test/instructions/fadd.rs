use super::*;

#[test]
fn doubles() {
    let mut words = load_double(0, 0, 1.5);
    words.extend(load_double(0, 1, 2.25));
    words.push(fp_arith(FpArith::Fadd, FpType::Double, 2, 0, 1));
    words.push(halt());

    let processor = run(&words);
    assert_eq!(double_in(&processor, 2), 3.75);
}

#[test]
fn singles() {
    let mut words = load_single(0, 0, 0.5);
    words.extend(load_single(0, 1, 0.25));
    words.push(fp_arith(FpArith::Fadd, FpType::Single, 2, 0, 1));
    words.push(halt());

    let processor = run(&words);
    assert_eq!(single_in(&processor, 2), 0.75);
}
