use clap::Parser;
use bluepill_report::cli::commands::{cmd_print, error_chain, exit_status};
use bluepill_report::cli::config::{Cli, load_config, resolve_options};
use bluepill_report::trace::logger::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Resolve settings: CLI > config > defaults
    let config = load_config(cli.config.as_deref());
    let options = resolve_options(&cli, &config);

    let outcome = cmd_print(&cli.xml_file, &options);
    if let Err(e) = &outcome {
        eprintln!("error: {}", error_chain(e));
    }

    let status = exit_status(&outcome, options.fail_on_errors);
    if status != 0 {
        std::process::exit(status);
    }
}
