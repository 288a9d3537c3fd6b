use log::error;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::io;
use structopt::StructOpt;
use structopt_flags::LogLevel;

use random_walk::app::WalkApp;
use random_walk::cli::Opt;

fn main() {
    let opt = Opt::from_args();

    if let Some(shell) = opt.completions {
        Opt::clap().gen_completions_to("random-walk", shell, &mut io::stdout());
        return;
    }

    if TermLogger::init(
        opt.verbose.get_level_filter(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Failed to initialise logging");
    }

    let result = opt
        .to_app_config()
        .map_err(Into::into)
        .and_then(|config| WalkApp::new(config).run());

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}
