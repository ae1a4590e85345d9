use clap::Parser;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tokenscope::app::App;
use tokenscope::error::load_file_safe;
use tokenscope::logging::{self, LogTarget};
use tokenscope::ui::TuiManager;
use tokenscope::{render_plain, Config};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "tokenscope", about = "Split text on a delimiter and classify the pieces")]
struct Cli {
    /// Text file to tokenize (loaded into the editor in interactive mode)
    file: Option<PathBuf>,

    /// Print the report to stdout instead of opening the interactive UI
    #[arg(long)]
    plain: bool,

    /// Segment delimiter character
    #[arg(long)]
    delimiter: Option<char>,

    /// Path to config file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(delimiter) = cli.delimiter {
        config.delimiter = delimiter;
    }

    let plain = cli.plain || !io::stdin().is_terminal();
    let target = if plain {
        LogTarget::Stderr
    } else {
        LogTarget::FileOnly
    };
    logging::init(&config, target)?;
    info!(delimiter = %config.delimiter, plain, "starting tokenscope");

    if plain {
        return run_plain(&cli, &config);
    }

    let mut app = App::new(&config);
    if let Some(path) = &cli.file {
        app.set_input(load_file_safe(path)?);
    }

    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}

fn run_plain(cli: &Cli, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let text = match &cli.file {
        Some(path) => load_file_safe(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let output = render_plain(&text, config.delimiter, config.separator_width);
    print!("{}", output.stdout);
    if output.exit_code != 0 {
        std::process::exit(output.exit_code);
    }
    Ok(())
}
