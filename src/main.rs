use std::process::ExitCode;

/// Exit status for configuration errors (sysexits `EX_CONFIG`).
const EXIT_CONFIG: u8 = 78;

/// Exit status for all other failures (sysexits `EX_DATAERR`).
const EXIT_DATA_ERR: u8 = 65;

fn main() -> ExitCode {
    match img2segy::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_configuration_error() {
                ExitCode::from(EXIT_CONFIG)
            } else {
                ExitCode::from(EXIT_DATA_ERR)
            }
        }
    }
}
