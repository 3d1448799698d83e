use super::*;

#[test]
fn negated_product() {
    let mut words = load_double(0, 0, 3.0);
    words.extend(load_double(0, 1, 2.0));
    words.push(fp_arith(FpArith::Fnmul, FpType::Double, 2, 0, 1));
    words.push(halt());

    let processor = run(&words);
    assert_eq!(double_in(&processor, 2), -6.0);
}
