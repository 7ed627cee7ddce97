//! Property-based tests for backend URL resolution.
//!
//! Local hosts resolve to plain HTTP only in development; every other
//! combination resolves to HTTPS. The host is never altered.

use proptest::prelude::*;
use spendzen_core::config::{resolve_backend_url, AppMode};

// =============================================================================
// Generators
// =============================================================================

/// Generates a dotted quad with 1-3 digit octets, optionally with a port.
fn arb_ipv4_host() -> impl Strategy<Value = String> {
    (
        proptest::array::uniform4("[0-9]{1,3}"),
        proptest::option::of(0u32..100_000),
    )
        .prop_map(|(octets, port)| {
            let host = octets.join(".");
            match port {
                Some(port) => format!("{}:{}", host, port),
                None => host,
            }
        })
}

/// Generates anything starting with `localhost`.
fn arb_localhost() -> impl Strategy<Value = String> {
    "[a-z0-9.:-]{0,12}".prop_map(|suffix| format!("localhost{}", suffix))
}

/// Generates a DNS-style name that is neither local nor an IPv4 literal.
fn arb_named_host() -> impl Strategy<Value = String> {
    (
        "[a-k][a-z]{2,10}",
        "[a-z]{2,6}",
        proptest::option::of(1u32..65_536),
    )
        .prop_map(|(name, tld, port)| match port {
            Some(port) => format!("{}.{}:{}", name, tld, port),
            None => format!("{}.{}", name, tld),
        })
}

fn arb_local_host() -> impl Strategy<Value = String> {
    prop_oneof![arb_ipv4_host(), arb_localhost()]
}

fn arb_mode() -> impl Strategy<Value = AppMode> {
    prop_oneof![Just(AppMode::Development), Just(AppMode::Production)]
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Local hosts use HTTP in development.
    #[test]
    fn prop_local_hosts_in_development_use_http(host in arb_local_host()) {
        prop_assert_eq!(
            resolve_backend_url(AppMode::Development, &host),
            format!("http://{}", host)
        );
    }

    /// Production never downgrades to HTTP.
    #[test]
    fn prop_production_always_uses_https(
        host in prop_oneof![arb_local_host(), arb_named_host()]
    ) {
        prop_assert_eq!(
            resolve_backend_url(AppMode::Production, &host),
            format!("https://{}", host)
        );
    }

    /// Named hosts use HTTPS in either mode.
    #[test]
    fn prop_named_hosts_use_https(host in arb_named_host(), mode in arb_mode()) {
        prop_assert_eq!(resolve_backend_url(mode, &host), format!("https://{}", host));
    }

    /// An octet longer than three digits is not an IPv4 literal.
    #[test]
    fn prop_long_octets_are_not_local(
        octets in proptest::array::uniform3("[0-9]{1,3}"),
        long in "[0-9]{4,6}"
    ) {
        let host = format!("{}.{}", octets.join("."), long);
        prop_assert_eq!(
            resolve_backend_url(AppMode::Development, &host),
            format!("https://{}", host)
        );
    }
}
