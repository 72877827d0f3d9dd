// Country selector data: display name, dialing code, region id and time zones

/// Country preselected when the user does not pick one
pub const DEFAULT_COUNTRY: &str = "India";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// Name shown in the selector
    pub name: &'static str,
    /// Dialing code without the leading `+`
    pub dialing_code: &'static str,
    /// ISO 3166-1 alpha-2 region id
    pub region: &'static str,
    /// English description of the region, used for numbers parsed into it
    pub description: &'static str,
    /// IANA time zones, most populous first
    pub time_zones: &'static [&'static str],
}

const fn entry(
    name: &'static str,
    dialing_code: &'static str,
    region: &'static str,
    description: &'static str,
    time_zones: &'static [&'static str],
) -> Country {
    Country {
        name,
        dialing_code,
        region,
        description,
        time_zones,
    }
}

static COUNTRIES: &[Country] = &[
    entry("Afghanistan", "93", "AF", "Afghanistan", &["Asia/Kabul"]),
    entry("Albania", "355", "AL", "Albania", &["Europe/Tirane"]),
    entry("Algeria", "213", "DZ", "Algeria", &["Africa/Algiers"]),
    entry("Andorra", "376", "AD", "Andorra", &["Europe/Andorra"]),
    entry("Angola", "244", "AO", "Angola", &["Africa/Luanda"]),
    entry("Argentina", "54", "AR", "Argentina", &["America/Buenos_Aires"]),
    entry("Armenia", "374", "AM", "Armenia", &["Asia/Yerevan"]),
    entry(
        "Australia",
        "61",
        "AU",
        "Australia",
        &[
            "Australia/Sydney",
            "Australia/Melbourne",
            "Australia/Brisbane",
            "Australia/Perth",
            "Australia/Adelaide",
            "Australia/Hobart",
            "Australia/Darwin",
        ],
    ),
    entry("Austria", "43", "AT", "Austria", &["Europe/Vienna"]),
    entry("Azerbaijan", "994", "AZ", "Azerbaijan", &["Asia/Baku"]),
    entry("Bahrain", "973", "BH", "Bahrain", &["Asia/Bahrain"]),
    entry("Bangladesh", "880", "BD", "Bangladesh", &["Asia/Dhaka"]),
    entry("Belarus", "375", "BY", "Belarus", &["Europe/Minsk"]),
    entry("Belgium", "32", "BE", "Belgium", &["Europe/Brussels"]),
    entry("Bhutan", "975", "BT", "Bhutan", &["Asia/Thimphu"]),
    entry("Bolivia", "591", "BO", "Bolivia", &["America/La_Paz"]),
    entry(
        "Brazil",
        "55",
        "BR",
        "Brazil",
        &[
            "America/Sao_Paulo",
            "America/Manaus",
            "America/Recife",
            "America/Belem",
        ],
    ),
    entry("Bulgaria", "359", "BG", "Bulgaria", &["Europe/Sofia"]),
    entry(
        "Canada",
        "1",
        "CA",
        "Canada",
        &[
            "America/Toronto",
            "America/Vancouver",
            "America/Edmonton",
            "America/Winnipeg",
            "America/Halifax",
            "America/St_Johns",
        ],
    ),
    entry("Chile", "56", "CL", "Chile", &["America/Santiago"]),
    entry("China", "86", "CN", "China", &["Asia/Shanghai"]),
    entry("Colombia", "57", "CO", "Colombia", &["America/Bogota"]),
    entry("Costa Rica", "506", "CR", "Costa Rica", &["America/Costa_Rica"]),
    entry("Croatia", "385", "HR", "Croatia", &["Europe/Zagreb"]),
    entry("Cuba", "53", "CU", "Cuba", &["America/Havana"]),
    entry("Cyprus", "357", "CY", "Cyprus", &["Asia/Nicosia"]),
    entry("Czech Republic", "420", "CZ", "Czech Republic", &["Europe/Prague"]),
    entry("Denmark", "45", "DK", "Denmark", &["Europe/Copenhagen"]),
    entry("Egypt", "20", "EG", "Egypt", &["Africa/Cairo"]),
    entry("Estonia", "372", "EE", "Estonia", &["Europe/Tallinn"]),
    entry("Finland", "358", "FI", "Finland", &["Europe/Helsinki"]),
    entry("France", "33", "FR", "France", &["Europe/Paris"]),
    entry("Germany", "49", "DE", "Germany", &["Europe/Berlin"]),
    entry("Greece", "30", "GR", "Greece", &["Europe/Athens"]),
    entry("Hong Kong", "852", "HK", "Hong Kong", &["Asia/Hong_Kong"]),
    entry("Hungary", "36", "HU", "Hungary", &["Europe/Budapest"]),
    entry("India", "91", "IN", "India", &["Asia/Calcutta"]),
    entry(
        "Indonesia",
        "62",
        "ID",
        "Indonesia",
        &["Asia/Jakarta", "Asia/Makassar", "Asia/Jayapura"],
    ),
    entry("Iran", "98", "IR", "Iran", &["Asia/Tehran"]),
    entry("Iraq", "964", "IQ", "Iraq", &["Asia/Baghdad"]),
    entry("Ireland", "353", "IE", "Ireland", &["Europe/Dublin"]),
    entry("Israel", "972", "IL", "Israel", &["Asia/Jerusalem"]),
    entry("Italy", "39", "IT", "Italy", &["Europe/Rome"]),
    entry("Japan", "81", "JP", "Japan", &["Asia/Tokyo"]),
    entry("Jordan", "962", "JO", "Jordan", &["Asia/Amman"]),
    entry(
        "Kazakhstan",
        "7",
        "KZ",
        "Kazakhstan",
        &["Asia/Almaty", "Asia/Aqtobe"],
    ),
    entry("Kenya", "254", "KE", "Kenya", &["Africa/Nairobi"]),
    entry("Kuwait", "965", "KW", "Kuwait", &["Asia/Kuwait"]),
    entry("Latvia", "371", "LV", "Latvia", &["Europe/Riga"]),
    entry("Lebanon", "961", "LB", "Lebanon", &["Asia/Beirut"]),
    entry("Libya", "218", "LY", "Libya", &["Africa/Tripoli"]),
    entry("Malaysia", "60", "MY", "Malaysia", &["Asia/Kuala_Lumpur"]),
    entry("Maldives", "960", "MV", "Maldives", &["Indian/Maldives"]),
    entry(
        "Mexico",
        "52",
        "MX",
        "Mexico",
        &["America/Mexico_City", "America/Tijuana", "America/Cancun"],
    ),
    entry("Netherlands", "31", "NL", "Netherlands", &["Europe/Amsterdam"]),
    entry("New Zealand", "64", "NZ", "New Zealand", &["Pacific/Auckland"]),
    entry("Nigeria", "234", "NG", "Nigeria", &["Africa/Lagos"]),
    entry("North Korea", "850", "KP", "North Korea", &["Asia/Pyongyang"]),
    entry("Norway", "47", "NO", "Norway", &["Europe/Oslo"]),
    entry("Oman", "968", "OM", "Oman", &["Asia/Muscat"]),
    entry("Pakistan", "92", "PK", "Pakistan", &["Asia/Karachi"]),
    entry(
        "Palestine",
        "970",
        "PS",
        "Palestinian Territories",
        &["Asia/Gaza", "Asia/Hebron"],
    ),
    entry("Peru", "51", "PE", "Peru", &["America/Lima"]),
    entry("Philippines", "63", "PH", "Philippines", &["Asia/Manila"]),
    entry("Poland", "48", "PL", "Poland", &["Europe/Warsaw"]),
    entry(
        "Portugal",
        "351",
        "PT",
        "Portugal",
        &["Europe/Lisbon", "Atlantic/Azores"],
    ),
    entry("Qatar", "974", "QA", "Qatar", &["Asia/Qatar"]),
    entry("Romania", "40", "RO", "Romania", &["Europe/Bucharest"]),
    entry(
        "Russia",
        "7",
        "RU",
        "Russia",
        &[
            "Europe/Moscow",
            "Asia/Yekaterinburg",
            "Asia/Novosibirsk",
            "Asia/Vladivostok",
        ],
    ),
    entry("Saudi Arabia", "966", "SA", "Saudi Arabia", &["Asia/Riyadh"]),
    entry("Serbia", "381", "RS", "Serbia", &["Europe/Belgrade"]),
    entry("Singapore", "65", "SG", "Singapore", &["Asia/Singapore"]),
    entry("South Africa", "27", "ZA", "South Africa", &["Africa/Johannesburg"]),
    entry("South Korea", "82", "KR", "South Korea", &["Asia/Seoul"]),
    entry("Spain", "34", "ES", "Spain", &["Europe/Madrid", "Atlantic/Canary"]),
    entry("Sri Lanka", "94", "LK", "Sri Lanka", &["Asia/Colombo"]),
    entry("Sweden", "46", "SE", "Sweden", &["Europe/Stockholm"]),
    entry("Switzerland", "41", "CH", "Switzerland", &["Europe/Zurich"]),
    entry("Syria", "963", "SY", "Syria", &["Asia/Damascus"]),
    entry("Taiwan", "886", "TW", "Taiwan", &["Asia/Taipei"]),
    entry("Thailand", "66", "TH", "Thailand", &["Asia/Bangkok"]),
    entry("Turkey", "90", "TR", "Turkey", &["Europe/Istanbul"]),
    entry("UAE", "971", "AE", "United Arab Emirates", &["Asia/Dubai"]),
    entry("UK", "44", "GB", "United Kingdom", &["Europe/London"]),
    entry(
        "USA",
        "1",
        "US",
        "United States",
        &[
            "America/New_York",
            "America/Chicago",
            "America/Denver",
            "America/Los_Angeles",
            "America/Anchorage",
            "Pacific/Honolulu",
        ],
    ),
    entry("Ukraine", "380", "UA", "Ukraine", &["Europe/Kiev"]),
    entry("Vietnam", "84", "VN", "Vietnam", &["Asia/Saigon"]),
    entry("Yemen", "967", "YE", "Yemen", &["Asia/Aden"]),
    entry("Zimbabwe", "263", "ZW", "Zimbabwe", &["Africa/Harare"]),
];

/// Every selectable country, in selector order
pub fn all() -> &'static [Country] {
    COUNTRIES
}

/// Case-insensitive lookup by display name
pub fn by_name(name: &str) -> Option<&'static Country> {
    let name = name.trim();
    COUNTRIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Lookup by ISO region id ("IN", "us", ...)
pub fn by_region(region: &str) -> Option<&'static Country> {
    let region = region.trim();
    COUNTRIES
        .iter()
        .find(|c| c.region.eq_ignore_ascii_case(region))
}

pub fn dialing_code(name: &str) -> Option<&'static str> {
    by_name(name).map(|c| c.dialing_code)
}
