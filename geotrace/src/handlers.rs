use anyhow::{anyhow, bail, Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use geotrace_core::country;
use geotrace_core::map::build_map;
use geotrace_core::model::{IpInfo, PhoneInfo};
use geotrace_core::phone::{validate_phone_number, NumberDirectory, PrefixTable};
use geotrace_core::report::{
    ip_text_report, phone_text_report, render_ip_report, render_phone_report, report_file_name,
    save_report, timestamp_now, ReportFormat, ReportKind,
};
use geotrace_core::session::Session;
use geotrace_core::Mappable;
use geotrace_lookup::{build_client, lookup_phone, Geocoder, IpLocator, LookupConfig};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::Level;

/// Log level for the number of `-v` flags given
pub fn log_level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Build the lookup configuration from the global flags (clap fills env/defaults)
pub fn lookup_config(args: &ArgMatches) -> LookupConfig {
    let mut config = LookupConfig::new();
    if let Some(url) = args.get_one::<String>("geocoder-url") {
        config = config.with_geocoder_url(url.as_str());
    }
    if let Some(url) = args.get_one::<String>("ip-api-url") {
        config = config.with_ip_api_url(url.as_str());
    }
    if let Some(agent) = args.get_one::<String>("user-agent") {
        config = config.with_user_agent(agent.as_str());
    }
    if let Some(secs) = args.get_one::<u64>("timeout") {
        config = config.with_timeout(Duration::from_secs(*secs));
    }
    config
}

/// Accept a selector name ("USA"), a full country name or a bare dialing code ("91", "+44")
pub fn resolve_dialing_code(country_or_code: &str) -> Result<String> {
    let value = country_or_code.trim();
    if let Some(code) = country::dialing_code(value) {
        return Ok(code.to_string());
    }
    if let Some(entry) = country::all()
        .iter()
        .find(|c| c.description.eq_ignore_ascii_case(value))
    {
        return Ok(entry.dialing_code.to_string());
    }

    let digits = value.trim_start_matches('+');
    if !digits.is_empty() && digits.len() <= 3 && digits.chars().all(|c| c.is_ascii_digit()) {
        return Ok(digits.to_string());
    }

    Err(anyhow!(
        "Unknown country '{}'. Run `geotrace countries` for the list",
        value
    ))
}

/// Load whichever prefix data files were given; missing ones stay empty
pub fn load_directory(
    carriers: Option<&PathBuf>,
    regions: Option<&PathBuf>,
    time_zones: Option<&PathBuf>,
) -> Result<NumberDirectory> {
    let load = |path: Option<&PathBuf>| -> Result<PrefixTable> {
        match path {
            Some(path) => {
                let expanded = expand_path(&path.to_string_lossy());
                PrefixTable::load(&expanded).with_context(|| {
                    format!("Failed to load prefix data from {}", expanded.display())
                })
            }
            None => Ok(PrefixTable::new()),
        }
    };

    Ok(NumberDirectory::new()
        .with_carriers(load(carriers)?)
        .with_regions(load(regions)?)
        .with_time_zones(load(time_zones)?))
}

/// Prefix data named by the global `--carrier-data`/`--region-data`/`--timezone-data` flags
pub fn directory_from_args(args: &ArgMatches) -> Result<NumberDirectory> {
    load_directory(
        args.get_one::<PathBuf>("carrier-data"),
        args.get_one::<PathBuf>("region-data"),
        args.get_one::<PathBuf>("timezone-data"),
    )
}

pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

/// Where a report goes: the given file, or a generated name inside the given directory
pub fn resolve_output_path(
    raw: &str,
    kind: ReportKind,
    key: &str,
    timestamp: &str,
    format: ReportFormat,
) -> PathBuf {
    let path = expand_path(raw);
    if path.is_dir() {
        path.join(report_file_name(kind, key, timestamp, format))
    } else {
        path
    }
}

/// Validate, then enrich. Invalid numbers abort before any network call.
pub async fn phone_lookup(
    raw: &str,
    country_or_code: &str,
    directory: &NumberDirectory,
    geocoder: &Geocoder,
) -> Result<(String, PhoneInfo)> {
    let code = resolve_dialing_code(country_or_code)?;
    let validation = validate_phone_number(raw, &code)?;
    if !validation.is_valid {
        bail!(
            "Invalid phone number format: {}. Please check and try again",
            validation.number
        );
    }
    let info = lookup_phone(&validation.number, directory, geocoder).await?;
    Ok((validation.number, info))
}

/// Locate an address, keyed by what the user typed rather than the provider's echo
pub async fn ip_lookup(raw: &str, locator: &IpLocator) -> Result<(String, IpInfo)> {
    let address = raw.trim().to_string();
    let info = locator.lookup(&address).await?;
    Ok((address, info))
}

fn spinner(message: &str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(message.to_string());
    Ok(spinner)
}

fn print_divider() {
    println!("{}", "═".repeat(60).bright_blue().bold());
}

fn print_field(label: &str, value: &str) {
    println!("  {:<18} {}", format!("{}:", label).blue(), value.bright_white());
}

fn print_phone_info(number: &str, info: &PhoneInfo) {
    print_divider();
    println!("{}", format!("  PHONE NUMBER {}", number).bright_white().bold());
    print_divider();
    print_field("Formatted", &info.formatted_number);
    print_field("Valid", if info.is_valid { "Yes" } else { "No" });
    print_field("Type", info.number_type.label());
    print_field("Country", &info.country);
    print_field("State", &info.state);
    print_field("District", &info.district);
    print_field("City", &info.city);
    print_field("Carrier", &info.carrier);
    print_field("Timezone", &info.timezone);
    if let Some(coordinates) = info.coordinates {
        print_field("Coordinates", &coordinates.to_string());
    }
    println!();
}

fn print_ip_info(info: &IpInfo) {
    print_divider();
    println!("{}", format!("  IP ADDRESS {}", info.ip).bright_white().bold());
    print_divider();
    print_field("ISP", &info.isp);
    print_field("Organization", &info.org);
    print_field("ASN", &info.asn);
    print_field("Country", &info.country);
    print_field("Region", &info.region);
    print_field("City", &info.city);
    print_field("Postal", &info.postal);
    print_field("Timezone", &info.timezone);
    if let Some(coordinates) = info.coordinates {
        print_field("Coordinates", &coordinates.to_string());
    }
    println!();
}

/// Persist (or print) a rendered report according to `--format` / `--output`
fn emit_report(
    content: Vec<u8>,
    output: Option<&String>,
    kind: ReportKind,
    key: &str,
    timestamp: &str,
    format: ReportFormat,
) -> Result<()> {
    let path = match output {
        Some(raw) => resolve_output_path(raw, kind, key, timestamp, format),
        None if format == ReportFormat::Pdf => {
            PathBuf::from(report_file_name(kind, key, timestamp, format))
        }
        None => {
            if format == ReportFormat::Json {
                println!("{}", String::from_utf8_lossy(&content));
            }
            return Ok(());
        }
    };

    write_with_parents(&content, &path)?;
    println!(
        "{} Report saved: {}",
        "✓".green().bold(),
        path.display().to_string().bright_white()
    );
    Ok(())
}

fn emit_map<T: Mappable>(subject: &T, output: Option<&String>) -> Result<()> {
    let Some(raw) = output else {
        return Ok(());
    };
    match build_map(subject) {
        Some(map) => {
            let path = expand_path(raw);
            write_with_parents(map.to_html().as_bytes(), &path)?;
            println!(
                "{} Map saved: {}",
                "✓".green().bold(),
                path.display().to_string().bright_white()
            );
        }
        None => println!(
            "{} No coordinates available, map not written",
            "⚠".yellow().bold()
        ),
    }
    Ok(())
}

fn report_format(args: &ArgMatches) -> Result<ReportFormat> {
    let raw = args
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");
    ReportFormat::from_str(raw).ok_or_else(|| anyhow!("Unsupported report format '{}'", raw))
}

pub async fn handle_phone(args: &ArgMatches) -> Result<()> {
    let number = args
        .get_one::<String>("NUMBER")
        .ok_or_else(|| anyhow!("A phone number is required"))?;
    let country = args
        .get_one::<String>("country")
        .map(String::as_str)
        .unwrap_or(country::DEFAULT_COUNTRY);
    let format = report_format(args)?;

    let directory = directory_from_args(args)?;
    let config = lookup_config(args);
    let geocoder = Geocoder::from_config(build_client(&config)?, &config)?;

    let spinner = spinner("Analyzing phone number...")?;
    let result = phone_lookup(number, country, &directory, &geocoder).await;
    spinner.finish_and_clear();
    let (number, info) = result?;

    let timestamp = timestamp_now();
    print_phone_info(&number, &info);
    if format == ReportFormat::Text && args.get_one::<String>("output").is_none() {
        print!("{}", phone_text_report(&info, &timestamp));
    }
    let content = render_phone_report(&info, &timestamp, format)?;
    emit_report(
        content,
        args.get_one::<String>("output"),
        ReportKind::Phone,
        &number,
        &timestamp,
        format,
    )?;
    emit_map(&info, args.get_one::<String>("map"))
}

pub async fn handle_ip(args: &ArgMatches) -> Result<()> {
    let address = args
        .get_one::<String>("ADDRESS")
        .ok_or_else(|| anyhow!("An IP address is required"))?;
    let format = report_format(args)?;

    let config = lookup_config(args);
    let locator = IpLocator::from_config(build_client(&config)?, &config)?;

    let spinner = spinner("Looking up IP address...")?;
    let result = ip_lookup(address, &locator).await;
    spinner.finish_and_clear();
    let (address, info) = result?;

    let timestamp = timestamp_now();
    print_ip_info(&info);
    if format == ReportFormat::Text && args.get_one::<String>("output").is_none() {
        print!("{}", ip_text_report(&info, &timestamp));
    }
    let content = render_ip_report(&info, &timestamp, format)?;
    emit_report(
        content,
        args.get_one::<String>("output"),
        ReportKind::Ip,
        &address,
        &timestamp,
        format,
    )?;
    emit_map(&info, args.get_one::<String>("map"))
}

pub fn handle_countries() {
    print_divider();
    println!("{}", "  SUPPORTED COUNTRIES".bright_white().bold());
    print_divider();
    for entry in country::all() {
        println!(
            "  {:<28} {:>5}  {}",
            entry.name.bright_white(),
            format!("+{}", entry.dialing_code).cyan(),
            entry.region.dimmed()
        );
    }
    println!();
    println!(
        "{} Default country: {}",
        "ℹ".blue(),
        country::DEFAULT_COUNTRY.bright_white()
    );
}

/// One line typed at the interactive prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// `phone [country...] <number>`; the country defaults when omitted
    Phone { country: String, number: String },
    Ip(String),
    History,
    Report(String),
    Help,
    Quit,
    Empty,
}

pub fn parse_repl_line(line: &str) -> Result<ReplCommand, String> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(ReplCommand::Empty);
    };
    let rest: Vec<&str> = words.collect();

    match command.to_lowercase().as_str() {
        "phone" | "p" => match rest.split_last() {
            Some((number, country)) => Ok(ReplCommand::Phone {
                country: if country.is_empty() {
                    country::DEFAULT_COUNTRY.to_string()
                } else {
                    country.join(" ")
                },
                number: number.to_string(),
            }),
            None => Err("Usage: phone [country] <number>".to_string()),
        },
        "ip" => match rest.as_slice() {
            [address] => Ok(ReplCommand::Ip(address.to_string())),
            _ => Err("Usage: ip <address>".to_string()),
        },
        "history" | "h" => Ok(ReplCommand::History),
        "report" | "r" => match rest.as_slice() {
            [key] => Ok(ReplCommand::Report(key.to_string())),
            _ => Err("Usage: report <number or address>".to_string()),
        },
        "help" | "?" => Ok(ReplCommand::Help),
        "quit" | "exit" | "q" => Ok(ReplCommand::Quit),
        other => Err(format!("Unknown command '{}'. Type 'help' for commands", other)),
    }
}

fn print_repl_help() {
    println!("{}", "Commands:".bright_blue().bold());
    println!(
        "  {}  look up a number (country defaults to {})",
        "phone [country] <number>".cyan(),
        country::DEFAULT_COUNTRY
    );
    println!("  {}             look up an IP address", "ip <address>".cyan());
    println!("  {}                  list recent searches", "history".cyan());
    println!("  {}         show the cached report for a search", "report <key>".cyan());
    println!("  {}                     leave", "quit".cyan());
}

fn print_history(session: &Session) {
    println!("{}", "Recent phone searches".bright_blue().bold());
    if session.phone_history.is_empty() {
        println!("  {}", "No recent phone searches".dimmed());
    }
    for number in session.phone_history.iter() {
        println!("  📞 {}", number);
    }
    println!("{}", "Recent IP searches".bright_blue().bold());
    if session.ip_history.is_empty() {
        println!("  {}", "No recent IP searches".dimmed());
    }
    for ip in session.ip_history.iter() {
        println!("  🌐 {}", ip);
    }
}

fn prompt(msg: &str) -> io::Result<Option<String>> {
    print!("{} ", msg.bright_cyan().bold());
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

pub async fn handle_interactive(args: &ArgMatches) -> Result<()> {
    let config = lookup_config(args);
    let client = build_client(&config)?;
    let geocoder = Geocoder::from_config(client.clone(), &config)?;
    let locator = IpLocator::from_config(client, &config)?;
    let directory = directory_from_args(args)?;
    let mut session = Session::new();

    print_repl_help();
    println!();

    while let Some(line) = prompt("geotrace>")? {
        let command = match parse_repl_line(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{} {}", "✗".red().bold(), e);
                continue;
            }
        };

        match command {
            ReplCommand::Empty => {}
            ReplCommand::Quit => break,
            ReplCommand::Help => print_repl_help(),
            ReplCommand::History => print_history(&session),
            ReplCommand::Report(key) => match session.report(&key) {
                Some(report) => print!("{}", report),
                None => println!("{} No report cached for '{}'", "✗".red().bold(), key),
            },
            ReplCommand::Phone { country, number } => {
                match phone_lookup(&number, &country, &directory, &geocoder).await {
                    Ok((number, info)) => {
                        print_phone_info(&number, &info);
                        session.record_phone(&number, phone_text_report(&info, &timestamp_now()));
                    }
                    Err(e) => println!("{} {}", "✗".red().bold(), e),
                }
            }
            ReplCommand::Ip(address) => match ip_lookup(&address, &locator).await {
                Ok((address, info)) => {
                    print_ip_info(&info);
                    session.record_ip(&address, ip_text_report(&info, &timestamp_now()));
                }
                Err(e) => println!("{} {}", "✗".red().bold(), e),
            },
        }
    }

    println!("{} Bye", "✓".green().bold());
    Ok(())
}

/// Write bytes to a path, creating parent directories first
pub fn write_with_parents(content: &[u8], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    save_report(content, path).with_context(|| format!("Failed to write {}", path.display()))
}
