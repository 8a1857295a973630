// ── Protocol policy validator ──
//
// Pure, local consistency checks on a protocol configuration, run
// before anything is sent to the service. A config that fails here
// never reaches the wire.

use std::fmt;

use crate::error::CoreError;
use crate::model::{PolicyMode, PortSpec, ProtocolPolicy, ProtocolsConfig};

/// Accumulated validator diagnostics.
///
/// Never partial: every rule failure in the config is present, so the
/// user sees all problems at once instead of fixing them one by one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn messages(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationErrors> for CoreError {
    fn from(err: ValidationErrors) -> Self {
        CoreError::Validation { errors: err.0 }
    }
}

/// Check a protocol configuration for internal consistency.
///
/// Rules, per protocol:
/// - ports are only allowed with the RESTRICTED mode;
/// - every port token must parse as a single port in [1, 65535] or a
///   `low-high` range with both ends in range and `low <= high`.
///
/// Duplicate or overlapping port entries are deliberately accepted: the
/// service is the authority on de-duplication. Group ids are never
/// checked locally -- only the service can tell a valid id from a dead
/// one, so bad ids surface when the create/update call is made.
pub fn validate(protocols: &ProtocolsConfig) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();
    check_policy("tcp", &protocols.tcp, &mut errors);
    check_policy("udp", &protocols.udp, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

fn check_policy(protocol: &str, policy: &ProtocolPolicy, errors: &mut Vec<String>) {
    let ports = policy.port_tokens();
    if policy.mode != PolicyMode::Restricted && !ports.is_empty() {
        errors.push(format!(
            "{protocol}: ports are not allowed with mode {}",
            policy.mode
        ));
    }
    for token in ports {
        if let Err(e) = token.parse::<PortSpec>() {
            errors.push(format!("{protocol}: {e}"));
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(tcp: ProtocolPolicy, udp: ProtocolPolicy) -> ProtocolsConfig {
        ProtocolsConfig {
            allow_icmp: true,
            tcp,
            udp,
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&ProtocolsConfig::default()).is_ok());
    }

    #[test]
    fn restricted_with_ports_is_valid() {
        let config = config(
            ProtocolPolicy::restricted(["80", "82-83"]),
            ProtocolPolicy::allow_all(),
        );
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn restricted_with_empty_port_list_is_valid() {
        // "No ports currently permitted" -- narrow, but deliberate.
        let config = config(
            ProtocolPolicy::restricted(Vec::<String>::new()),
            ProtocolPolicy::allow_all(),
        );
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn allow_all_with_ports_is_rejected() {
        let mut tcp = ProtocolPolicy::allow_all();
        tcp.ports = Some(vec!["80".into()]);
        let err = validate(&config(tcp, ProtocolPolicy::allow_all())).unwrap_err();
        assert_eq!(
            err.messages(),
            ["tcp: ports are not allowed with mode ALLOW_ALL"]
        );
    }

    #[test]
    fn deny_all_with_ports_is_rejected() {
        let mut udp = ProtocolPolicy::deny_all();
        udp.ports = Some(vec!["53".into()]);
        let err = validate(&config(ProtocolPolicy::allow_all(), udp)).unwrap_err();
        assert_eq!(
            err.messages(),
            ["udp: ports are not allowed with mode DENY_ALL"]
        );
    }

    #[test]
    fn boundary_ports_are_valid() {
        let config = config(
            ProtocolPolicy::restricted(["1", "65535", "1-65535"]),
            ProtocolPolicy::allow_all(),
        );
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn out_of_range_tokens_name_the_token() {
        let config = config(
            ProtocolPolicy::restricted(["0", "65536"]),
            ProtocolPolicy::allow_all(),
        );
        let err = validate(&config).unwrap_err();
        assert_eq!(
            err.messages(),
            [
                "tcp: port \"0\" is outside the range 1-65535",
                "tcp: port \"65536\" is outside the range 1-65535",
            ]
        );
    }

    #[test]
    fn inverted_range_is_rejected() {
        let config = config(
            ProtocolPolicy::restricted(["83-82"]),
            ProtocolPolicy::allow_all(),
        );
        let err = validate(&config).unwrap_err();
        assert_eq!(
            err.messages(),
            ["tcp: port range \"83-82\" has start greater than end"]
        );
    }

    #[test]
    fn duplicates_and_overlaps_are_permitted() {
        // The service is the de-duplication authority.
        let config = config(
            ProtocolPolicy::restricted(["80", "80", "79-81"]),
            ProtocolPolicy::allow_all(),
        );
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn all_failures_are_collected() {
        let mut tcp = ProtocolPolicy::deny_all();
        tcp.ports = Some(vec!["80".into(), "abc".into()]);
        let udp = ProtocolPolicy::restricted(["0"]);
        let err = validate(&config(tcp, udp)).unwrap_err();
        assert_eq!(
            err.messages(),
            [
                "tcp: ports are not allowed with mode DENY_ALL",
                "tcp: port \"abc\" is not a number or a low-high range",
                "udp: port \"0\" is outside the range 1-65535",
            ]
        );
    }

    #[test]
    fn display_joins_messages() {
        let udp = ProtocolPolicy::restricted(["0", "abc"]);
        let err = validate(&config(ProtocolPolicy::allow_all(), udp)).unwrap_err();
        assert!(err.to_string().contains("; "));
    }
}
