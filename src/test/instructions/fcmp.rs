use super::*;

fn compare(a: f64, b: f64) -> Processor {
    let mut words = load_double(0, 0, a);
    words.extend(load_double(0, 1, b));
    words.push(fcmp(FpType::Double, 0, Some(1)));
    words.push(halt());
    run(&words)
}

#[test]
fn less_sets_negative() {
    let processor = compare(1.0, 2.0);
    assert!(processor.pstate().negative);
    assert!(!processor.pstate().zero);
    assert!(!processor.pstate().carry);
    assert!(!processor.pstate().overflow);
}

#[test]
fn equal_sets_zero() {
    let processor = compare(2.0, 2.0);
    assert!(processor.pstate().zero);
    assert!(!processor.pstate().negative);
}

#[test]
fn greater_clears_both() {
    let processor = compare(3.0, 2.0);
    assert!(!processor.pstate().zero);
    assert!(!processor.pstate().negative);
}

#[test]
fn against_zero_literal() {
    let mut words = load_double(0, 3, 0.0);
    words.push(fcmp(FpType::Double, 3, None));
    words.push(halt());

    let processor = run(&words);
    assert!(processor.pstate().zero);
}

#[test]
fn feeds_conditional_branch() {
    // fcmp then b.lt behaves like an ordinary flag producer
    let mut words = load_double(0, 0, -1.0);
    words.extend(load_double(1, 1, 1.0));
    words.extend_from_slice(&[
        fcmp(FpType::Double, 0, Some(1)),
        branch_cond(Cond::Lt, 2),
        wide_move(WideMoveOp::Movz, true, 2, 1, 0),
        halt(),
    ]);

    let processor = run(&words);
    assert_eq!(processor.register(2), 0);
}
