pub mod exp_log;
pub mod hyperbolic;
pub mod misc;
pub mod trig;

use crate::eval::Evaluator;

pub const PI: f64 = std::f64::consts::PI;
pub const E: f64 = std::f64::consts::E;
pub const PHI: f64 = 1.61803398874989484820;

/// Registers the default function set and the constants `pi`, `e` and
/// `phi`. Functions outside the default set (`asinh`, `acosh`, `atanh`,
/// `exp2`, `factorial`) stay available for explicit registration.
pub fn register_defaults(evaluator: &mut Evaluator) {
    trig::register(evaluator);
    hyperbolic::register(evaluator);
    exp_log::register(evaluator);
    misc::register(evaluator);

    evaluator.register_constant("pi", PI);
    evaluator.register_constant("e", E);
    evaluator.register_constant("phi", PHI);
}
