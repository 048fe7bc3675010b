use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use act2a2p::converter::convert_file;

/// Convert an Adobe Color Table palette (e.g. from colodore.com) into an
/// Apple II .a2p palette.
#[derive(Parser)]
#[command(name = "act2a2p", version, about)]
struct Args {
    /// Input .act palette file (Adobe Color Table)
    #[arg(
        short = 'f',
        long = "file",
        visible_alias = "filename",
        value_name = "FILE"
    )]
    file: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match convert_file(&args.file) {
        Ok(output) => {
            println!("Apple II palette file saved as: {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
