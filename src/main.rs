//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::process::ExitCode;

use hufftext::compression::compress::compress;
use hufftext::compression::decompress::decompress;
use hufftext::tools::cli::{huffopts_init, Mode};

use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() -> ExitCode {
    // Available log levels are Error, Warn, Info, Debug, Trace.
    // Log to stderr so encoded output on stdout stays clean.
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Could not start the logger: {}", e);
    }

    // Narrows the level set above to what the user asked for.
    let options = huffopts_init();

    //----- Figure how what we need to do and go do it
    let result = match options.op_mode {
        Mode::Encode => compress(&options).map_err(|e| e.to_string()),
        Mode::Decode => decompress(&options).map_err(|e| e.to_string()),
    };

    match result {
        Ok(()) => {
            info!("Done.");
            ExitCode::SUCCESS
        }
        Err(msg) => {
            error!("{}: {}", options.file.display(), msg);
            ExitCode::FAILURE
        }
    }
}
