use std::{env, process};

use pebble_lang::Pebble;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut pebble = Pebble::new();

    match args.len() {
        n if n > 2 => {
            println!("Usage: pebble [script]");
            process::exit(64);
        }
        2 => pebble.run_file(&args[1]),
        _ => pebble_lang::repl::run(&mut pebble),
    }
}
