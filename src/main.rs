use anyhow::Result;
use clap::Parser;

use bikeshare_explorer::cli::{Cli, ColorChoice};
use bikeshare_explorer::formatting::FormattingConfig;
use bikeshare_explorer::session::Session;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let formatting = create_formatting_config(&cli);
    formatting.apply();

    Session::new(cli.data_dir, formatting).run()
}

// --plain wins over --color; otherwise an explicit --color choice wins over
// the NO_COLOR/CLICOLOR environment.
fn create_formatting_config(cli: &Cli) -> FormattingConfig {
    if cli.plain {
        FormattingConfig::plain()
    } else {
        match cli.color {
            ColorChoice::Auto => FormattingConfig::from_env(),
            explicit => FormattingConfig::new(explicit.into()),
        }
    }
}
