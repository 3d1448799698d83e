use super::*;

#[test]
fn truncates_toward_zero() {
    let mut words = load_double(0, 0, 2.9);
    words.push(fcvtzs(true, FpType::Double, 1, 0));
    words.push(halt());

    let processor = run(&words);
    assert_eq!(processor.register(1), 2);
}

#[test]
fn negative_truncates_toward_zero() {
    let mut words = load_double(0, 0, -2.5);
    words.push(fcvtzs(true, FpType::Double, 1, 0));
    words.push(halt());

    let processor = run(&words);
    assert_eq!(processor.register(1) as i64, -2);
}

#[test]
fn word_destination() {
    let mut words = load_single(0, 0, 100.5);
    words.push(fcvtzs(false, FpType::Single, 1, 0));
    words.push(halt());

    let processor = run(&words);
    assert_eq!(processor.register(1), 100);
}
