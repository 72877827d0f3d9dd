use clap::ArgMatches;
use colored::Colorize;
use commands::command_argument_builder;
use geotrace::handlers::{
    handle_countries, handle_interactive, handle_ip, handle_phone, log_level,
};
use geotrace_core::print_banner;

mod commands;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Logs go to stderr so reports on stdout stay clean
    tracing_subscriber::fmt()
        .with_max_level(log_level(verbosity(&chosen_command)))
        .with_writer(std::io::stderr)
        .init();

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    if chosen_command.subcommand().is_none() {
        // No subcommand provided, just show the banner
        return;
    }

    let result = match chosen_command.subcommand() {
        Some(("phone", primary_command)) => handle_phone(primary_command).await,
        Some(("ip", primary_command)) => handle_ip(primary_command).await,
        Some(("countries", _)) => {
            handle_countries();
            Ok(())
        }
        Some(("interactive", primary_command)) => handle_interactive(primary_command).await,
        _ => unreachable!("clap should ensure we don't get here"),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}

/// `-v` may be given before or after the subcommand
fn verbosity(matches: &ArgMatches) -> u8 {
    let sub = matches
        .subcommand()
        .map(|(_, sub)| sub.get_count("verbose"))
        .unwrap_or(0);
    sub.max(matches.get_count("verbose"))
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
