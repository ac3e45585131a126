mod args;

use std::process;

use clap::Parser;

use args::Args;
use opcode_config::Config;
use opcode_config::logger::{enable_debug, init_logger};

fn main() {
    let args = Args::parse();

    let Ok(_) = init_logger(args.log_level) else {
        println!("Failed to initialize logger");
        process::exit(64);
    };

    let mut config = match Config::new() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            process::exit(70);
        }
    };

    if !config.load(args.options.as_slice()) {
        print!("{}", config.help_text());
        process::exit(64);
    }

    if config.debug() {
        enable_debug();
    }

    log::debug!("Output file: {}", config.output_file());
    log::debug!("BinDiff results: {}", config.bin_diff());
    log::debug!("Opcode file: {}", config.opcode());

    println!("output={}", config.output_file());
    println!("bindiff={}", config.bin_diff());
    println!("opcode={}", config.opcode());
}
