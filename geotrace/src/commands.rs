use crate::CLAP_STYLING;
use clap::{arg, command};
use geotrace_core::country::DEFAULT_COUNTRY;
use geotrace_lookup::config::{
    DEFAULT_GEOCODER_URL, DEFAULT_IP_API_URL, DEFAULT_USER_AGENT,
};
use std::path::PathBuf;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("geotrace")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("geotrace")
        .styles(CLAP_STYLING)
        .arg(
            arg!(-q --"quiet" "Suppress banner and non-essential output")
                .required(false)
                .global(true),
        )
        .arg(
            arg!(-v --"verbose" "Increase log verbosity (-v info, -vv debug, -vvv trace)")
                .required(false)
                .action(clap::ArgAction::Count)
                .global(true),
        )
        .arg(
            arg!(--"geocoder-url" <URL>)
                .required(false)
                .help("Base URL of the Nominatim-compatible geocoding service")
                .env("GEOTRACE_GEOCODER_URL")
                .default_value(DEFAULT_GEOCODER_URL)
                .global(true),
        )
        .arg(
            arg!(--"ip-api-url" <URL>)
                .required(false)
                .help("Base URL of the ipapi.co-compatible IP geolocation service")
                .env("GEOTRACE_IP_API_URL")
                .default_value(DEFAULT_IP_API_URL)
                .global(true),
        )
        .arg(
            arg!(--"timeout" <SECONDS>)
                .required(false)
                .help("Request timeout in seconds")
                .value_parser(clap::value_parser!(u64))
                .env("GEOTRACE_TIMEOUT")
                .default_value("10")
                .global(true),
        )
        .arg(
            arg!(--"user-agent" <AGENT>)
                .required(false)
                .help("User-Agent header sent with every request")
                .env("GEOTRACE_USER_AGENT")
                .default_value(DEFAULT_USER_AGENT)
                .global(true),
        )
        .arg(
            arg!(--"carrier-data" <PATH>)
                .required(false)
                .help("Carrier prefix file in libphonenumber 'digits|name' format")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            arg!(--"region-data" <PATH>)
                .required(false)
                .help("Region prefix file in libphonenumber 'digits|name' format")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            arg!(--"timezone-data" <PATH>)
                .required(false)
                .help("Timezone prefix file in libphonenumber 'digits|zone&zone' format")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .subcommand_required(false)
        .subcommand(
            command!("phone")
                .about("Look up the origin, carrier and timezone of a phone number")
                .arg(
                    arg!(<NUMBER>)
                        .required(true)
                        .help("The phone number, local or with a leading +<code>"),
                )
                .arg(
                    arg!(-c --"country" <COUNTRY>)
                        .required(false)
                        .help("Country name or dialing code used when the number has no + prefix")
                        .default_value(DEFAULT_COUNTRY),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json, pdf")
                        .value_parser(["text", "json", "pdf"])
                        .default_value("text"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save report to a file or directory (default: display to screen)"),
                )
                .arg(
                    arg!(--"map" <PATH>)
                        .required(false)
                        .help("Write an HTML map of the approximate location"),
                ),
        )
        .subcommand(
            command!("ip")
                .about("Look up the location and network owner of an IP address")
                .arg(
                    arg!(<ADDRESS>)
                        .required(true)
                        .help("IPv4 or IPv6 address"),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json, pdf")
                        .value_parser(["text", "json", "pdf"])
                        .default_value("text"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save report to a file or directory (default: display to screen)"),
                )
                .arg(
                    arg!(--"map" <PATH>)
                        .required(false)
                        .help("Write an HTML map of the approximate location"),
                ),
        )
        .subcommand(command!("countries").about("List the supported countries and dialing codes"))
        .subcommand(
            command!("interactive")
                .about("Start an interactive prompt that keeps a history of recent searches"),
        )
}
