use super::*;

// Each program follows the same shape: establish flags, branch over a
// marker move, then halt. X1 tells whether the branch was taken.

fn branch_taken(setup: &[Word], cond: Cond) -> bool {
    let mut words = Vec::from(setup);
    words.extend_from_slice(&[
        branch_cond(cond, 2),
        wide_move(WideMoveOp::Movz, true, 1, 1, 0),
        wide_move(WideMoveOp::Movz, true, 2, 2, 0),
        halt(),
    ]);
    let processor = run(&words);
    processor.register(1) == 0
}

fn flags_zero() -> Vec<Word> {
    // subs x0, x0, x0 -> Z=1
    vec![arith_reg(ArithOp::Subs, true, 0, 0, 0, ShiftKind::Lsl, 0)]
}

fn flags_negative() -> Vec<Word> {
    // subs zr, zr, #1 -> N=1, V=0
    vec![arith_imm(ArithOp::Subs, true, constants::ZR, constants::ZR, 1, false)]
}

fn flags_positive() -> Vec<Word> {
    // 5 - 3: Z=0, N=0, V=0
    vec![
        wide_move(WideMoveOp::Movz, true, 0, 5, 0),
        arith_imm(ArithOp::Subs, true, constants::ZR, 0, 3, false),
    ]
}

#[test]
fn eq_taken_on_zero() {
    assert!(branch_taken(&flags_zero(), Cond::Eq));
    assert!(!branch_taken(&flags_positive(), Cond::Eq));
}

#[test]
fn ne_taken_on_non_zero() {
    assert!(branch_taken(&flags_positive(), Cond::Ne));
    assert!(!branch_taken(&flags_zero(), Cond::Ne));
}

#[test]
fn ge_follows_n_equals_v() {
    assert!(branch_taken(&flags_positive(), Cond::Ge));
    assert!(branch_taken(&flags_zero(), Cond::Ge));
    assert!(!branch_taken(&flags_negative(), Cond::Ge));
}

#[test]
fn lt_follows_n_not_equal_v() {
    assert!(branch_taken(&flags_negative(), Cond::Lt));
    assert!(!branch_taken(&flags_positive(), Cond::Lt));
}

#[test]
fn gt_requires_non_zero_too() {
    assert!(branch_taken(&flags_positive(), Cond::Gt));
    assert!(!branch_taken(&flags_zero(), Cond::Gt));
    assert!(!branch_taken(&flags_negative(), Cond::Gt));
}

#[test]
fn le_is_complement_of_gt() {
    assert!(branch_taken(&flags_zero(), Cond::Le));
    assert!(branch_taken(&flags_negative(), Cond::Le));
    assert!(!branch_taken(&flags_positive(), Cond::Le));
}

#[test]
fn al_always_taken() {
    assert!(branch_taken(&flags_zero(), Cond::Al));
    assert!(branch_taken(&flags_negative(), Cond::Al));
}

#[test]
fn untaken_branch_advances_pc_by_four() {
    let mut words = flags_positive();
    words.extend_from_slice(&[branch_cond(Cond::Eq, 2), halt()]);
    let processor = run(&words);
    assert_eq!(processor.program_counter(), words.len() as u64 * 4 - 4);
}

#[test]
fn conditional_branch_selects_second_move() {
    // subs x0, x0, x0; b.eq target; movz x1, #1; target: movz x1, #2
    let processor = run(&[
        arith_reg(ArithOp::Subs, true, 0, 0, 0, ShiftKind::Lsl, 0),
        branch_cond(Cond::Eq, 2),
        wide_move(WideMoveOp::Movz, true, 1, 1, 0),
        wide_move(WideMoveOp::Movz, true, 1, 2, 0),
        halt(),
    ]);
    assert_eq!(processor.register(1), 2);
}

#[test]
fn backward_conditional_branch() {
    // count x0 down from 3 to 0
    let processor = run(&[
        wide_move(WideMoveOp::Movz, true, 0, 3, 0),
        arith_imm(ArithOp::Subs, true, 0, 0, 1, false),
        branch_cond(Cond::Ne, -1),
        halt(),
    ]);
    assert_eq!(processor.register(0), 0);
    assert!(processor.pstate().zero);
}
