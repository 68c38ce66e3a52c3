use evalix_rs::Evaluator;

fn main() {
    pretty_env_logger::init();

    let evaluator = Evaluator::with_builtins();

    for expr in [
        "2 + 2 * 3",
        "sin(pi / 2)",
        "sqrt(144)",
        "ln(e^2)",
        "2^3^2",
        "10 % 3",
        "1 / 0",
    ] {
        match evaluator.evaluate(expr) {
            Ok(value) => println!("{expr} = {value}"),
            Err(err) => println!("{expr} -> {err}"),
        }
    }
}
