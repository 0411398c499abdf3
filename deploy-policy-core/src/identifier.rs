//! Codec for the opaque `repository:environment:branchPolicyId` identifier.

use crate::error::{ControllerError, ControllerResult};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

const DELIMITER: char = ':';

// Expected field labels, carried in decode diagnostics.
const LEFT: &str = "repository";
const CENTER: &str = "environment";
const RIGHT: &str = "branchPolicyId";

/// Everything except RFC 3986 unreserved characters. Environment names are
/// escaped with this set so they are safe both as a URL path segment and as
/// the middle component of the identifier (`:` itself gets escaped).
const ENVIRONMENT_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode an environment name for use as a URL path segment and as
/// an identifier component.
pub fn escape_environment(name: &str) -> String {
    utf8_percent_encode(name, ENVIRONMENT_SEGMENT).to_string()
}

/// Recover the declared environment name from its escaped form.
pub fn unescape_environment(escaped: &str) -> ControllerResult<String> {
    percent_decode_str(escaped)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| ControllerError::InvalidEnvironment {
            value: escaped.to_string(),
        })
}

/// Composite identity of a deployment branch policy.
///
/// The environment is held in its escaped form; it doubles as a URL path
/// segment when addressing the remote API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceId {
    pub repository: String,
    pub environment: String,
    pub policy_id: u64,
}

impl ResourceId {
    /// Build an identifier, rejecting components that contain the delimiter
    /// and would make the encoded token ambiguous to decode.
    pub fn new(
        repository: impl Into<String>,
        environment: impl Into<String>,
        policy_id: u64,
    ) -> ControllerResult<Self> {
        let repository = repository.into();
        let environment = environment.into();
        if repository.contains(DELIMITER) {
            return Err(ControllerError::DelimiterInComponent {
                field: LEFT,
                value: repository,
            });
        }
        if environment.contains(DELIMITER) {
            return Err(ControllerError::DelimiterInComponent {
                field: CENTER,
                value: environment,
            });
        }
        Ok(Self {
            repository,
            environment,
            policy_id,
        })
    }

    /// Join the three components into the opaque token `a:b:c`.
    pub fn encode(&self) -> String {
        format!(
            "{}{DELIMITER}{}{DELIMITER}{}",
            self.repository, self.environment, self.policy_id
        )
    }

    /// Split an opaque token back into its three components.
    ///
    /// The split is limited to three pieces, so a stray delimiter can only
    /// end up in the trailing component, where the numeric parse rejects it.
    pub fn decode(token: &str) -> ControllerResult<Self> {
        let parts: Vec<&str> = token.splitn(3, DELIMITER).collect();
        let [repository, environment, policy_id] = parts.as_slice() else {
            return Err(ControllerError::MalformedIdentifier {
                id: token.to_string(),
                left: LEFT,
                center: CENTER,
                right: RIGHT,
            });
        };
        let policy_id = policy_id
            .parse::<u64>()
            .map_err(|_| ControllerError::InvalidPolicyId {
                value: (*policy_id).to_string(),
            })?;
        Ok(Self {
            repository: (*repository).to_string(),
            environment: (*environment).to_string(),
            policy_id,
        })
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_joins_components() {
        let id = ResourceId::new("r1", "test", 99).expect("valid components");
        assert_eq!(id.encode(), "r1:test:99");
        assert_eq!(id.to_string(), "r1:test:99");
    }

    #[test]
    fn test_decode_round_trip() {
        let id = ResourceId::new("repo", "prod%20east", 42).expect("valid components");
        assert_eq!(ResourceId::decode(&id.encode()).expect("should decode"), id);
    }

    #[test]
    fn test_decode_too_few_parts() {
        let err = ResourceId::decode("repo:42").expect_err("should fail");
        assert!(matches!(err, ControllerError::MalformedIdentifier { .. }));
        // Diagnostics carry the expected field labels.
        assert!(err
            .to_string()
            .contains("repository:environment:branchPolicyId"));

        let err = ResourceId::decode("repo").expect_err("should fail");
        assert!(matches!(err, ControllerError::MalformedIdentifier { .. }));
    }

    #[test]
    fn test_decode_non_numeric_policy_id() {
        let err = ResourceId::decode("repo:env:abc").expect_err("should fail");
        assert!(matches!(err, ControllerError::InvalidPolicyId { .. }));
    }

    #[test]
    fn test_decode_extra_delimiter_lands_in_policy_id() {
        // splitn keeps "4:2" together as the third piece; the numeric parse
        // then rejects it.
        let err = ResourceId::decode("repo:env:4:2").expect_err("should fail");
        assert!(matches!(
            err,
            ControllerError::InvalidPolicyId { ref value } if value == "4:2"
        ));
    }

    #[test]
    fn test_new_rejects_delimiter_in_repository() {
        let err = ResourceId::new("re:po", "env", 1).expect_err("should fail");
        assert!(matches!(
            err,
            ControllerError::DelimiterInComponent { field: "repository", .. }
        ));
    }

    #[test]
    fn test_new_rejects_delimiter_in_environment() {
        let err = ResourceId::new("repo", "en:v", 1).expect_err("should fail");
        assert!(matches!(
            err,
            ControllerError::DelimiterInComponent { field: "environment", .. }
        ));
    }

    #[test]
    fn test_escape_environment() {
        assert_eq!(escape_environment("test"), "test");
        assert_eq!(escape_environment("prod east"), "prod%20east");
        assert_eq!(escape_environment("a/b:c"), "a%2Fb%3Ac");
    }

    #[test]
    fn test_unescape_environment_round_trip() {
        for name in ["test", "prod east", "a/b:c", "unicode-ü"] {
            assert_eq!(
                unescape_environment(&escape_environment(name)).expect("should decode"),
                name
            );
        }
    }
}
