use std::process::ExitCode;

fn main() -> ExitCode {
    malsites::run()
}
