//! Syntactic classification of address strings.
//!
//! The grammar is deliberately narrower and looser in places than
//! [`std::net::IpAddr`]'s parser: octets may carry leading zeros (`010.0.0.1`),
//! a `%zone` suffix is only accepted on the `fe80:` link-local form, and an
//! embedded IPv4 tail is only accepted after `::`, `::ffff:`, `::ffff:0:` or
//! one to four groups followed by `::`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// One octet, 0-255, with up to two leading zeros.
const V4_OCTET: &str = "(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)";

/// Octet as accepted inside an IPv6 address (no leading zeros).
const V6_EMBEDDED_OCTET: &str = "(?:25[0-5]|(?:2[0-4]|1?[0-9])?[0-9])";

const HEX_GROUP: &str = "[0-9a-fA-F]{1,4}";

static IPV4: OnceLock<Regex> = OnceLock::new();
static IPV6: OnceLock<Regex> = OnceLock::new();

/// Version of an address, or `Invalid`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressClass {
    /// Dotted-quad IPv4 address
    #[serde(rename = "IPv4")]
    V4,
    /// Colon-hex IPv6 address in one of the accepted forms
    #[serde(rename = "IPv6")]
    V6,
    /// Neither
    Invalid,
}

impl AddressClass {
    /// Returns the display label (`IPv4`, `IPv6` or `Invalid`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V4 => "IPv4",
            Self::V6 => "IPv6",
            Self::Invalid => "Invalid",
        }
    }

    /// Returns true for IPv4 and IPv6
    #[must_use]
    pub const fn is_valid(self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

impl std::fmt::Display for AddressClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn ipv4_regex() -> &'static Regex {
    IPV4.get_or_init(|| {
        let pattern = format!(r"^(?:{V4_OCTET}\.){{3}}{V4_OCTET}$");
        Regex::new(&pattern).expect("IPv4 grammar is a valid regex")
    })
}

fn ipv6_regex() -> &'static Regex {
    IPV6.get_or_init(|| {
        let h = HEX_GROUP;
        let v4 = format!(r"(?:{V6_EMBEDDED_OCTET}\.){{3}}{V6_EMBEDDED_OCTET}");
        let forms = [
            // 1:2:3:4:5:6:7:8
            format!("(?:{h}:){{7}}{h}"),
            // 1:: through 1:2:3:4:5:6:7::
            format!("(?:{h}:){{1,7}}:"),
            // groups on both sides of the elision
            format!("(?:{h}:){{1,6}}:{h}"),
            format!("(?:{h}:){{1,5}}(?::{h}){{1,2}}"),
            format!("(?:{h}:){{1,4}}(?::{h}){{1,3}}"),
            format!("(?:{h}:){{1,3}}(?::{h}){{1,4}}"),
            format!("(?:{h}:){{1,2}}(?::{h}){{1,5}}"),
            format!("{h}:(?::{h}){{1,6}}"),
            // ::2:3 ... and ::
            format!(":(?:(?::{h}){{1,7}}|:)"),
            // link-local with zone index
            "fe80:(?::[0-9a-fA-F]{0,4}){0,4}%[0-9a-zA-Z]+".to_string(),
            // ::a.b.c.d, ::ffff:a.b.c.d, ::ffff:0:a.b.c.d
            format!("::(?:ffff(?::0{{1,4}})?:)?{v4}"),
            // 64:ff9b::a.b.c.d
            format!("(?:{h}:){{1,4}}:{v4}"),
        ];
        let pattern = format!("^(?:{})$", forms.join("|"));
        Regex::new(&pattern).expect("IPv6 grammar is a valid regex")
    })
}

/// Classify `input` as IPv4, IPv6 or invalid.
///
/// IPv4 is checked first, so no string is ever reported as both. The input
/// is matched as given; callers trim user input themselves.
pub fn classify(input: &str) -> AddressClass {
    if ipv4_regex().is_match(input) {
        AddressClass::V4
    } else if ipv6_regex().is_match(input) {
        AddressClass::V6
    } else {
        AddressClass::Invalid
    }
}

/// Returns true if `input` is an IPv4 or IPv6 address
pub fn is_valid(input: &str) -> bool {
    classify(input).is_valid()
}
