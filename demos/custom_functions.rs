use evalix_rs::functions::{hyperbolic, misc, PI};
use evalix_rs::Evaluator;

fn main() {
    pretty_env_logger::init();

    let mut evaluator = Evaluator::with_builtins();

    // Library functions outside the default set.
    evaluator.register_function("atanh", hyperbolic::atanh);
    evaluator.register_function("factorial", misc::factorial);

    // Host-defined function and constant.
    evaluator.register_function("double", |x| Ok(x * 2.0));
    evaluator.register_constant("tau", 2.0 * PI);

    for expr in [
        "atanh(0.5)",
        "factorial(5)",
        "double(21)",
        "cos(tau)",
        "atanh(1)",
    ] {
        match evaluator.evaluate(expr) {
            Ok(value) => println!("{expr} = {value}"),
            Err(err) => println!("{expr} -> {err}"),
        }
    }
}
