use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = smart_notes::run() {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
