use std::io;
use std::process::ExitCode;

use domain_guard::stream;

fn main() -> ExitCode {
    let stdin = io::stdin();
    let stdout = io::stdout();
    match stream::run(stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("domain-guard: {}", err);
            ExitCode::FAILURE
        }
    }
}
