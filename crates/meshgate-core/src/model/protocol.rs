// ── Protocol policy types ──
//
// The access policy for one transport protocol: a mode plus optional
// port restrictions. Port lists are carried as the literal tokens the
// user wrote ("80", "82-83"); `PortSpec` is the parsed form the
// validator checks them against. The service receives the tokens
// verbatim and is the authority on de-duplication and overlap.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Access mode for one transport protocol.
///
/// Wire strings are `ALLOW_ALL`, `RESTRICTED`, `DENY_ALL`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyMode {
    AllowAll,
    Restricted,
    DenyAll,
}

// ── PortSpec ────────────────────────────────────────────────────────

/// A parsed port token: a single port or an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortSpec {
    Single(u16),
    Range(u16, u16),
}

/// Why a port token failed to parse. Every variant names the offending
/// token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortSpecError {
    #[error("port \"{0}\" is not a number or a low-high range")]
    Malformed(String),

    #[error("port \"{0}\" is outside the range 1-65535")]
    OutOfRange(String),

    #[error("port range \"{0}\" has start greater than end")]
    Inverted(String),
}

impl FromStr for PortSpec {
    type Err = PortSpecError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.split_once('-') {
            Some((low, high)) => {
                let low = parse_port(low, token)?;
                let high = parse_port(high, token)?;
                if low > high {
                    return Err(PortSpecError::Inverted(token.to_owned()));
                }
                Ok(Self::Range(low, high))
            }
            None => Ok(Self::Single(parse_port(token, token)?)),
        }
    }
}

impl fmt::Display for PortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(port) => write!(f, "{port}"),
            Self::Range(low, high) => write!(f, "{low}-{high}"),
        }
    }
}

/// Parse one side of a token as a port number in [1, 65535].
///
/// Parses through `u32` first so that an over-large value ("70000") is
/// reported as out-of-range rather than malformed.
fn parse_port(raw: &str, token: &str) -> Result<u16, PortSpecError> {
    let value: u32 = raw
        .parse()
        .map_err(|_| PortSpecError::Malformed(token.to_owned()))?;
    if value == 0 {
        return Err(PortSpecError::OutOfRange(token.to_owned()));
    }
    u16::try_from(value).map_err(|_| PortSpecError::OutOfRange(token.to_owned()))
}

// ── ProtocolPolicy ──────────────────────────────────────────────────

/// Access policy for one transport protocol on a resource.
///
/// `ports` distinguishes "no port list supplied" (`None`) from an
/// explicitly empty RESTRICTED list (`Some` of empty): the latter is a
/// valid, deliberately narrow state in which no ports are currently
/// permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolPolicy {
    pub mode: PolicyMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<Vec<String>>,
}

impl ProtocolPolicy {
    pub fn allow_all() -> Self {
        Self {
            mode: PolicyMode::AllowAll,
            ports: None,
        }
    }

    pub fn deny_all() -> Self {
        Self {
            mode: PolicyMode::DenyAll,
            ports: None,
        }
    }

    pub fn restricted<I, S>(ports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mode: PolicyMode::Restricted,
            ports: Some(ports.into_iter().map(Into::into).collect()),
        }
    }

    /// Port tokens, treating an absent list as empty.
    pub fn port_tokens(&self) -> &[String] {
        self.ports.as_deref().unwrap_or_default()
    }
}

// ── ProtocolsConfig ─────────────────────────────────────────────────

/// Protocol restrictions for a resource.
///
/// `Default` mirrors the service default policy: both protocols wide
/// open and ICMP permitted. A resource configured without a protocols
/// block behaves exactly like one carrying this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolsConfig {
    pub allow_icmp: bool,
    pub tcp: ProtocolPolicy,
    pub udp: ProtocolPolicy,
}

impl Default for ProtocolsConfig {
    fn default() -> Self {
        Self {
            allow_icmp: true,
            tcp: ProtocolPolicy::allow_all(),
            udp: ProtocolPolicy::allow_all(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn port_spec_parses_singles_and_ranges() {
        assert_eq!("80".parse::<PortSpec>().unwrap(), PortSpec::Single(80));
        assert_eq!(
            "82-83".parse::<PortSpec>().unwrap(),
            PortSpec::Range(82, 83)
        );
        assert_eq!(
            "1-65535".parse::<PortSpec>().unwrap(),
            PortSpec::Range(1, 65535)
        );
    }

    #[test]
    fn port_spec_display_round_trips() {
        assert_eq!(PortSpec::Single(443).to_string(), "443");
        assert_eq!(PortSpec::Range(82, 83).to_string(), "82-83");
    }

    #[test]
    fn port_spec_rejects_malformed_tokens() {
        for token in ["", "abc", "80-", "-80", "1-2-3", " 80"] {
            assert!(
                matches!(
                    token.parse::<PortSpec>(),
                    Err(PortSpecError::Malformed(_))
                ),
                "token {token:?} should be malformed"
            );
        }
    }

    #[test]
    fn port_spec_rejects_out_of_range() {
        assert_eq!(
            "0".parse::<PortSpec>(),
            Err(PortSpecError::OutOfRange("0".into()))
        );
        assert_eq!(
            "65536".parse::<PortSpec>(),
            Err(PortSpecError::OutOfRange("65536".into()))
        );
        assert_eq!(
            "1-70000".parse::<PortSpec>(),
            Err(PortSpecError::OutOfRange("1-70000".into()))
        );
    }

    #[test]
    fn port_spec_rejects_inverted_range() {
        assert_eq!(
            "83-82".parse::<PortSpec>(),
            Err(PortSpecError::Inverted("83-82".into()))
        );
    }

    #[test]
    fn policy_mode_wire_strings() {
        assert_eq!(PolicyMode::AllowAll.to_string(), "ALLOW_ALL");
        assert_eq!(
            "RESTRICTED".parse::<PolicyMode>().unwrap(),
            PolicyMode::Restricted
        );
        assert!("OPEN".parse::<PolicyMode>().is_err());
    }

    #[test]
    fn default_config_is_the_service_default() {
        let config = ProtocolsConfig::default();
        assert!(config.allow_icmp);
        assert_eq!(config.tcp.mode, PolicyMode::AllowAll);
        assert!(config.udp.ports.is_none());
    }
}
