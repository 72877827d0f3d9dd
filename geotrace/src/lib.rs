// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

pub use handlers::{
    directory_from_args, ip_lookup, load_directory, log_level, lookup_config, parse_repl_line, phone_lookup,
    resolve_dialing_code, resolve_output_path, ReplCommand,
};
