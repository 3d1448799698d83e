use super::*;

#[test]
fn doubles() {
    let mut words = load_double(0, 0, 5.0);
    words.extend(load_double(0, 1, 1.5));
    words.push(fp_arith(FpArith::Fsub, FpType::Double, 2, 0, 1));
    words.push(halt());

    let processor = run(&words);
    assert_eq!(double_in(&processor, 2), 3.5);
}
