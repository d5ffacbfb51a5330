use verbly::{App, ConsoleInterface, UserInterface};

fn main() {
    let mut app = App::new("hello")
        .about("Greet somebody, a few times over.")
        .version("0.1.0");

    app.command("greet", "Say hello.")
        .option("name", "Who to greet.")
        .option("times", "How many greetings (default: 1).")
        .option("shout", "Greet in capitals.")
        .handler(|context| {
            let name: String = context.get("name")?;
            let times: u32 = context.get_or("times", 1);
            let greeting = if context.get::<bool>("shout")? {
                format!("HELLO, {}!", name.to_uppercase())
            } else {
                format!("Hello, {name}.")
            };

            for _ in 0..times {
                println!("{greeting}");
            }

            Ok(())
        });

    if let Err(error) = app.run_env() {
        ConsoleInterface::default().print_error(error.to_string());
        std::process::exit(1);
    }
}
