//! Static lookup tables shipped with the listing export: numeric country
//! codes, currency labels with their USD conversion rates, and the hex
//! rating colors the upstream service attaches to each row.
//!
//! The tables are fixed at build time. Country and rating-color misses are
//! typed errors surfaced once at load time; a currency miss is not an
//! error, the caller records the converted amount as absent instead.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("unknown country code {0}")]
    UnknownCountryCode(i64),
    #[error("unknown rating color code '{0}'")]
    UnknownRatingColor(String),
}

const COUNTRIES: &[(i64, &str)] = &[
    (1, "India"),
    (14, "Australia"),
    (30, "Brazil"),
    (37, "Canada"),
    (94, "Indonesia"),
    (148, "New Zealand"),
    (162, "Philippines"),
    (166, "Qatar"),
    (184, "Singapore"),
    (189, "South Africa"),
    (191, "Sri Lanka"),
    (208, "Turkey"),
    (214, "United Arab Emirates"),
    (215, "England"),
    (216, "United States of America"),
];

const USD_RATES: &[(&str, f64)] = &[
    ("Botswana Pula(P)", 0.018),
    ("Brazilian Real(R$)", 0.20),
    ("Dollar($)", 1.0),
    ("Emirati Diram(AED)", 0.27),
    ("Indian Rupees(Rs.)", 0.012),
    ("Indonesian Rupiah(IDR)", 0.000067),
    ("NewZealand($)", 0.62),
    ("Pounds(£)", 1.24),
    ("Qatari Rial(QR)", 0.27),
    ("Rand(R)", 0.053),
    ("Sri Lankan Rupee(LKR)", 0.0033),
    ("Turkish Lira(TL)", 0.050),
];

// Two codes intentionally share "darkred"; the source export uses both.
const RATING_COLORS: &[(&str, &str)] = &[
    ("3F7E00", "darkgreen"),
    ("5BA829", "green"),
    ("9ACD32", "lightgreen"),
    ("CDD614", "orange"),
    ("FFBA00", "red"),
    ("CBCBC8", "darkred"),
    ("FF7800", "darkred"),
];

pub fn country_of(code: i64) -> Result<&'static str, ReferenceError> {
    COUNTRIES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
        .ok_or(ReferenceError::UnknownCountryCode(code))
}

pub fn usd_rate_of(currency: &str) -> Option<f64> {
    USD_RATES
        .iter()
        .find(|(label, _)| *label == currency)
        .map(|(_, rate)| *rate)
}

pub fn color_name_of(code: &str) -> Result<&'static str, ReferenceError> {
    RATING_COLORS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
        .ok_or_else(|| ReferenceError::UnknownRatingColor(code.to_string()))
}
