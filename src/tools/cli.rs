use std::path::{Path, PathBuf};
use std::{fmt::Display, fmt::Formatter};

use clap::Parser;
use log::{info, LevelFilter};

/// Suffix added to encoded files.
pub const ENCODED_SUFFIX: &str = "huf";
/// Suffix added to decoded files when the input has no `.huf` suffix to strip.
pub const DECODED_SUFFIX: &str = "out";

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Errors => LevelFilter::Error,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

/// Encode or Decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define the two output channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    File(PathBuf),
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::File(path) => write!(f, "{}", path.display()),
            Output::Stdout => write!(f, "stdout"),
        }
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    name = "hufftext",
    version,
    about = "Huffman text codec with a plain-text frequency header",
    long_about = "
    Encodes a file as a header line of \"<symbol> <count>\" pairs followed by a line
    of '0' and '1' characters. Decoding rebuilds the same tree from the header alone."
)]
pub struct Args {
    /// Filename of file to process
    #[clap()]
    filename: PathBuf,

    /// Encode the input file (default)
    #[clap(short = 'z', long = "encode", conflicts_with = "decode")]
    encode: bool,

    /// Decode the input file
    #[clap(short = 'd', long = "decode")]
    decode: bool,

    /// Write the result to this file instead of the default name
    #[clap(short = 'o', long = "output", conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Send output to the terminal
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Force overwriting output file
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Be verbose (a 2nd -v gives more)
    #[clap(short = 'v', long = "verbose", parse(from_occurrences))]
    verbose: u8,

    /// Suppress everything but the result
    #[clap(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,
}

/// Resolved options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffOpts {
    /// Name of file to read for input
    pub file: PathBuf,
    /// Encode/Decode
    pub op_mode: Mode,
    /// Location where output is sent
    pub output: Output,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new(file: impl Into<PathBuf>, op_mode: Mode) -> Self {
        let file = file.into();
        let output = Output::File(default_output(&file, op_mode));
        Self {
            file,
            op_mode,
            output,
            force_overwrite: false,
            verbose: Verbosity::Errors,
        }
    }

    /// Put command line information from CLAP into our internal structure.
    pub fn from_args(args: Args) -> Self {
        let op_mode = if args.decode { Mode::Decode } else { Mode::Encode };
        let mut opts = HuffOpts::new(args.filename, op_mode);
        if args.stdout {
            opts.output = Output::Stdout;
        } else if let Some(path) = args.output {
            opts.output = Output::File(path);
        }
        opts.force_overwrite = args.force;
        opts.verbose = match (args.quiet, args.verbose) {
            (true, _) => Verbosity::Quiet,
            (false, 0) => Verbosity::Errors,
            (false, 1) => Verbosity::Warnings,
            (false, 2) => Verbosity::Info,
            (false, 3) => Verbosity::Debug,
            _ => Verbosity::Trace,
        };
        opts
    }
}

/// Encoding appends `.huf`. Decoding strips `.huf`, or appends `.out` when there
/// is nothing to strip.
pub fn default_output(file: &Path, op_mode: Mode) -> PathBuf {
    let mut name = file.as_os_str().to_owned();
    match op_mode {
        Mode::Encode => {
            name.push(".");
            name.push(ENCODED_SUFFIX);
            PathBuf::from(name)
        }
        Mode::Decode => {
            if file.extension().map_or(false, |ext| ext == ENCODED_SUFFIX) {
                file.with_extension("")
            } else {
                name.push(".");
                name.push(DECODED_SUFFIX);
                PathBuf::from(name)
            }
        }
    }
}

/// Read the command line, set the log level and report the resolved options.
pub fn huffopts_init() -> HuffOpts {
    let opts = HuffOpts::from_args(Args::parse());
    log::set_max_level(opts.verbose.level_filter());

    info!("---- Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    info!("Getting input from the file {}", opts.file.display());
    info!("Sending output to {}", opts.output);
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    info!("---- Initialization End ----\n");
    opts
}
