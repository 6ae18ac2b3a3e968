use std::process::ExitCode;

fn main() -> ExitCode {
    match archgate_cli::run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("[!] FATAL: {}", e);
            ExitCode::from(archgate_cli::EXIT_FATAL)
        }
    }
}
