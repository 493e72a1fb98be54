use k6_scenario_runner::prelude::{init, run};

fn main() {
    let cli = init();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(1);
        }
    }
}
