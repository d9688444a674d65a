mod cli;

use fanbrick::error::FanbrickError;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        if let FanbrickError::Validation(reason) = &e {
            eprintln!("{}", reason.hint());
        }
        std::process::exit(1);
    }
}
