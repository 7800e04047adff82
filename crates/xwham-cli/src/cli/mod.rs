mod commands;
mod helpers;
mod logging;

use clap::Parser;
use std::io;
use xwham_core::domain::WhamError;

pub fn run_from_env() -> i32 {
    let args = std::env::args().skip(1).collect::<Vec<_>>();

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            let diagnostic = error.as_wham_error();
            eprintln!("{}", diagnostic.diagnostic_line());
            eprintln!("{}", diagnostic.fatal_exit_line());
            diagnostic.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("xwham".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();

    let cli = match Cli::try_parse_from(&full_args) {
        Ok(cli) => cli,
        Err(err) => {
            return match err.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    print!("{}", err);
                    Ok(0)
                }
                _ => Err(CliError::Usage(err.to_string())),
            };
        }
    };

    logging::init(cli.batch.verbose);
    let stdin = io::stdin();
    let stdout = io::stdout();
    commands::run_batch_command(cli.batch, &mut stdin.lock(), &mut stdout.lock())
}

#[derive(Parser)]
#[command(
    name = "xwham",
    version,
    about = "Extract radius and potential-energy columns from MD logs into WHAM tables"
)]
struct Cli {
    #[command(flatten)]
    batch: commands::BatchArgs,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(WhamError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_wham_error(&self) -> WhamError {
        match self {
            Self::Usage(message) => WhamError::input_validation("INPUT.CLI_USAGE", message.trim_end()),
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => WhamError::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}

impl From<WhamError> for CliError {
    fn from(error: WhamError) -> Self {
        Self::Compute(error)
    }
}
