use std::process::ExitCode;

fn main() -> ExitCode {
    match netmeg::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
