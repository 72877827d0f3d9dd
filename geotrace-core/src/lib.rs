pub mod country;
pub mod error;
pub mod map;
pub mod model;
pub mod pdf;
pub mod phone;
pub mod report;
pub mod session;

pub use error::{PhoneError, ReportError};
pub use map::{build_map, LocationMap, Mappable};
pub use model::{Coordinates, IpInfo, Location, NumberType, PhoneInfo};
pub use phone::{NumberDirectory, PrefixTable};
pub use session::{RecentList, Session};

use colored::Colorize;

pub fn print_banner() {
    let banner = r#"
   ____            _____
  / ___| ___  ___ |_   _| __ __ _  ___ ___
 | |  _ / _ \/ _ \  | || '__/ _` |/ __/ _ \
 | |_| |  __/ (_) | | || | | (_| | (_|  __/
  \____|\___|\___/  |_||_|  \__,_|\___\___|
"#;
    println!("{}", banner.bright_cyan().bold());
    println!(
        "  {} {}\n",
        "phone & IP origin lookup".bright_white(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
}
