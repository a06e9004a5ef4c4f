//! Bank issuers accepted by the iDEAL family of payment methods.

use serde::Serialize;

/// A bank the gateway knows by its BIC-like code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Issuer {
    pub name: &'static str,
    pub code: &'static str,
}

/// Issuer as exposed to the checkout, with its logo resolved to a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedIssuer {
    pub name: String,
    pub code: String,
    pub img: String,
}

impl Issuer {
    pub const fn new(name: &'static str, code: &'static str) -> Self {
        Self { name, code }
    }

    /// Asset name of the issuer logo, without extension.
    pub fn image_name(&self) -> String {
        format!("ico-{}", self.code)
    }
}

pub const IDEAL_ISSUERS: &[Issuer] = &[
    Issuer::new("ABN AMRO", "ABNANL2A"),
    Issuer::new("ASN Bank", "ASNBNL21"),
    Issuer::new("Bunq Bank", "BUNQNL2A"),
    Issuer::new("ING", "INGBNL2A"),
    Issuer::new("Knab Bank", "KNABNL2H"),
    Issuer::new("Rabobank", "RABONL2U"),
    Issuer::new("RegioBank", "RBRBNL21"),
    Issuer::new("SNS Bank", "SNSBNL2A"),
    Issuer::new("Triodos Bank", "TRIONL2U"),
    Issuer::new("Van Lanschot", "FVLBNL22"),
    Issuer::new("Handelsbanken", "HANDNL2A"),
    Issuer::new("Revolut", "REVOLT21"),
];

/// Codes are compared exactly; the gateway rejects lowercase BICs.
pub fn find_issuer<'a>(catalog: &'a [Issuer], code: &str) -> Option<&'a Issuer> {
    catalog.iter().find(|issuer| issuer.code == code)
}
