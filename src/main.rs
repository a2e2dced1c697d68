use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = rsa_varlen::cli::app::run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
