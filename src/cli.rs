use clap::Parser;
use std::path::PathBuf;

/// rot - a customizable substitution cipher
///
/// Rotates line-oriented text by a configurable shift. A shift of 0
/// (the default) selects ROT47 over the full printable-ASCII span;
/// shifts 1-25 select Caesar-style letter rotation.
#[derive(Parser, Debug)]
#[command(name = "rot")]
#[command(about = "A customizable substitution cipher (ROT-N and ROT47)")]
#[command(version)]
pub struct Cli {
    /// Input file to rotate (reads standard input when omitted or "-")
    pub input: Option<PathBuf>,

    /// Write rotated text to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Amount each character is shifted (0 selects ROT47)
    #[arg(short = 'n', long = "num", default_value_t = 0, allow_negative_numbers = true)]
    pub num: i32,

    /// Print a table of every rotation of each input line
    #[arg(short, long)]
    pub list: bool,

    /// Truncate a named output file instead of appending to it
    #[arg(long)]
    pub truncate: bool,

    /// Emit advisory trace output on standard error
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }

    /// The input path to open, with `-` meaning standard input.
    pub fn input_path(&self) -> Option<&std::path::Path> {
        self.input
            .as_deref()
            .filter(|p| p.as_os_str() != "-")
    }
}
