use clap::{Parser, ValueEnum};

#[derive(Parser, Debug, Default)]
#[command(
    name = "strcalc",
    version,
    about = "Sum a delimiter-separated list of numbers, or explain what is wrong with it"
)]
pub struct Cli {
    /// Input to calculate; read from stdin when omitted
    pub input: Option<String>,

    #[arg(long, value_enum, help = "Output format [env: STRCALC_FORMAT] [default: text]")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Tracing filter directive [env: STRCALC_LOG] [default: warn]")]
    pub log: Option<String>,

    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help = "Turn \\n and \\\\ in the input into a newline and a backslash [env: STRCALC_UNESCAPE]"
    )]
    pub unescape: Option<bool>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
