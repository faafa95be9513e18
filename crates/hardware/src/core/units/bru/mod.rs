//! Branch resolution unit (BRU).
//!
//! Evaluates the condition of a `cmovXX` or `jXX` instruction against the
//! current condition codes. There is no prediction: with one instruction per
//! cycle the outcome is always known before the PC update.

use crate::core::arch::ConditionCodes;
use crate::isa::Condition;

/// Evaluates `cond` against the flags.
///
/// # Examples
///
/// ```
/// use y86sim_core::core::arch::ConditionCodes;
/// use y86sim_core::core::units::bru::evaluate;
/// use y86sim_core::isa::Condition;
///
/// let cc = ConditionCodes::new(false, true, false); // negative result
/// assert!(evaluate(Condition::L, cc));
/// assert!(!evaluate(Condition::Ge, cc));
/// ```
pub const fn evaluate(cond: Condition, cc: ConditionCodes) -> bool {
    let less = cc.sf ^ cc.of;
    match cond {
        Condition::Always => true,
        Condition::Le => less || cc.zf,
        Condition::L => less,
        Condition::E => cc.zf,
        Condition::Ne => !cc.zf,
        Condition::Ge => !less,
        Condition::G => !less && !cc.zf,
    }
}

/// Evaluates an optional condition; an unrecognized condition code is never taken.
pub const fn evaluate_opt(cond: Option<Condition>, cc: ConditionCodes) -> bool {
    match cond {
        Some(c) => evaluate(c, cc),
        None => false,
    }
}
