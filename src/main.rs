use anger::window::{run, RunOptions};

fn main() {
    if let Err(e) = run(RunOptions::default()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
