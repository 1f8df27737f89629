use std::io;
use std::process;
use std::env;

use rlox::Rlox;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let mut rlox = Rlox::new(Box::new(io::stdout()));

    match args.len() {
        n if n > 2 => {
            eprintln!("Usage: rlox [script]");
            process::exit(64);
        },
        2 => {
            if let Err(error) = rlox.run_file(&args[1]) {
                eprintln!("{error}");
                process::exit(74);
            }
        },
        _ => {
            if let Err(error) = rlox.run_prompt() {
                eprintln!("{error}");
                process::exit(74);
            }
        },
    }
}
