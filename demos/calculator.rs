use verbly::{App, ConsoleInterface, DispatchError, UserInterface};

fn main() {
    let mut app = App::new("calculator").about("Integer & float arithmetic.");

    app.command("sum", "Add two integers.")
        .option("a", "The first operand.")
        .option("b", "The second operand.")
        .handler(|context| {
            let a: i64 = context.get("a")?;
            let b: i64 = context.get("b")?;
            println!("{}", a + b);
            Ok(())
        });

    app.command("div", "Divide two numbers.")
        .option("numerator", "")
        .option("denominator", "")
        .option("precision", "Decimal places to show (default: 2).")
        .handler(|context| {
            let numerator: f64 = context.get("numerator")?;
            let denominator: f64 = context.get("denominator")?;
            let precision: usize = context.get_or::<u32>("precision", 2) as usize;

            if denominator == 0.0 {
                return Err(DispatchError::handler("Cannot divide by zero."));
            }

            println!("{:.precision$}", numerator / denominator);
            Ok(())
        });

    // Registered without a handler: dispatching it reports an error.
    app.command("mod", "Not implemented yet.");

    if let Err(error) = app.run_env() {
        ConsoleInterface::default().print_error(error.to_string());
        std::process::exit(1);
    }
}
