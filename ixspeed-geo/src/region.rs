use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// world region (UN M49 macro region) of a country.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Africa,
    Americas,
    Antarctica,
    Asia,
    Europe,
    Oceania,
    Unknown,
}

impl Region {
    /// classifies an ISO 3166-1 alpha-2 country code. codes are matched
    /// case-insensitively and common non-ISO aliases ("UK", "EL") are accepted;
    /// anything unrecognized is [`Region::Unknown`].
    pub fn from_country_code(code: &str) -> Region {
        let code = code.trim().to_ascii_uppercase();
        match canonical_code(&code) {
            "DZ" | "AO" | "BJ" | "BW" | "BF" | "BI" | "CV" | "CM" | "CF" | "TD" | "KM" | "CG"
            | "CD" | "CI" | "DJ" | "EG" | "GQ" | "ER" | "SZ" | "ET" | "GA" | "GM" | "GH" | "GN"
            | "GW" | "IO" | "KE" | "LS" | "LR" | "LY" | "MG" | "MW" | "ML" | "MR" | "MU" | "YT"
            | "MA" | "MZ" | "NA" | "NE" | "NG" | "RE" | "RW" | "SH" | "ST" | "SN" | "SC" | "SL"
            | "SO" | "ZA" | "SS" | "SD" | "TF" | "TZ" | "TG" | "TN" | "UG" | "EH" | "ZM"
            | "ZW" => Region::Africa,
            "AI" | "AG" | "AR" | "AW" | "BS" | "BB" | "BZ" | "BM" | "BO" | "BQ" | "BV" | "BR"
            | "CA" | "KY" | "CL" | "CO" | "CR" | "CU" | "CW" | "DM" | "DO" | "EC" | "SV" | "FK"
            | "GF" | "GL" | "GD" | "GP" | "GT" | "GY" | "HT" | "HN" | "JM" | "MQ" | "MX" | "MS"
            | "NI" | "PA" | "PY" | "PE" | "PR" | "BL" | "KN" | "LC" | "MF" | "PM" | "VC" | "SX"
            | "GS" | "SR" | "TT" | "TC" | "US" | "UM" | "UY" | "VE" | "VG" | "VI" => {
                Region::Americas
            }
            "AQ" => Region::Antarctica,
            "AF" | "AM" | "AZ" | "BH" | "BD" | "BT" | "BN" | "KH" | "CN" | "CY" | "GE" | "HK"
            | "IN" | "ID" | "IR" | "IQ" | "IL" | "JP" | "JO" | "KZ" | "KW" | "KG" | "LA" | "LB"
            | "MO" | "MY" | "MV" | "MN" | "MM" | "NP" | "KP" | "OM" | "PK" | "PS" | "PH" | "QA"
            | "SA" | "SG" | "KR" | "LK" | "SY" | "TW" | "TJ" | "TH" | "TL" | "TR" | "TM" | "AE"
            | "UZ" | "VN" | "YE" => Region::Asia,
            "AX" | "AL" | "AD" | "AT" | "BY" | "BE" | "BA" | "BG" | "HR" | "CZ" | "DK" | "EE"
            | "FO" | "FI" | "FR" | "DE" | "GI" | "GR" | "GG" | "VA" | "HU" | "IS" | "IE" | "IM"
            | "IT" | "JE" | "XK" | "LV" | "LI" | "LT" | "LU" | "MT" | "MD" | "MC" | "ME" | "NL"
            | "MK" | "NO" | "PL" | "PT" | "RO" | "RU" | "SM" | "RS" | "SK" | "SI" | "ES" | "SJ"
            | "SE" | "CH" | "UA" | "GB" => Region::Europe,
            "AS" | "AU" | "CX" | "CC" | "CK" | "FJ" | "PF" | "GU" | "HM" | "KI" | "MH" | "FM"
            | "NR" | "NC" | "NZ" | "NU" | "NF" | "MP" | "PW" | "PG" | "PN" | "WS" | "SB" | "TK"
            | "TO" | "TV" | "VU" | "WF" => Region::Oceania,
            _ => Region::Unknown,
        }
    }
}

/// maps exceptionally reserved and transitional codes to their ISO 3166-1 code.
fn canonical_code(code: &str) -> &str {
    match code {
        "UK" => "GB",
        "EL" => "GR",
        "FX" => "FR",
        "AN" => "CW",
        _ => code,
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Region::Africa => "Africa",
            Region::Americas => "Americas",
            Region::Antarctica => "Antarctica",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::Oceania => "Oceania",
            Region::Unknown => "Unknown",
        };
        write!(f, "{s}")
    }
}
