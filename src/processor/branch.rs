use num::FromPrimitive;

use super::{condition_holds, Processor, TickResult};
use crate::bits::{get_value, sign_extend};
use crate::instructions::Cond;
use crate::{constants, Word};

// Branches update PC themselves; the driver never adds 4 on top.

pub(super) fn execute(proc: &mut Processor, raw: Word) -> Option<TickResult> {
    let word = u64::from(raw);

    if raw & constants::UNCOND_MASK == constants::UNCOND_BITS {
        let simm26 = sign_extend(
            get_value(word, 0, constants::SIMM26_SIZE),
            constants::SIMM26_SIZE - 1,
        );
        let offset = simm26.wrapping_mul(constants::WORD_BYTES);
        return Some(TickResult::Jump(proc.pc.wrapping_add(offset)));
    }

    if raw & constants::BREG_MASK == constants::BREG_BITS {
        let xn = get_value(word, constants::RN_OFFSET, constants::REG_SIZE) as u32;
        return Some(TickResult::Jump(proc.reg(true, xn)));
    }

    if raw & constants::BCOND_MASK == constants::BCOND_BITS {
        let cond = Cond::from_u64(get_value(word, constants::COND_OFFSET, constants::COND_SIZE))?;
        let target = if condition_holds(cond, &proc.pstate) {
            let simm19 = sign_extend(
                get_value(word, constants::SIMM19_OFFSET, constants::SIMM19_SIZE),
                constants::SIMM19_SIZE - 1,
            );
            proc.pc.wrapping_add(simm19.wrapping_mul(constants::WORD_BYTES))
        } else {
            proc.pc.wrapping_add(constants::WORD_BYTES)
        };
        return Some(TickResult::Jump(target));
    }

    None
}
