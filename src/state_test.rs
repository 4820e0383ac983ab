use rand::Rng;

use super::test_helpers::*;

#[test]
fn same_seed_gives_same_sequence() {
    let a = test_app_state(7);
    let b = test_app_state(7);
    let xs: Vec<u32> = (0..8).map(|_| a.with_rng_mut(|r| r.random())).collect();
    let ys: Vec<u32> = (0..8).map(|_| b.with_rng_mut(|r| r.random())).collect();
    assert_eq!(xs, ys);
}

#[test]
fn clones_share_rng_and_limiter() {
    let a = test_app_state(1);
    let b = a.clone();
    let first: u64 = a.with_rng_mut(|r| r.random());
    let second: u64 = b.with_rng_mut(|r| r.random());

    let fresh = test_app_state(1);
    let expected: Vec<u64> = (0..2).map(|_| fresh.with_rng_mut(|r| r.random())).collect();
    assert_eq!(vec![first, second], expected);
}

#[test]
fn limiter_uses_configured_limits() {
    let limits = crate::config::RateLimitConfig { per_client_limit: 1, ..Default::default() };
    let state = test_app_state_with_limits(0, limits);
    let ip = std::net::IpAddr::from([127, 0, 0, 1]);
    assert!(state.rate_limiter.check_and_record(ip).is_ok());
    assert!(state.rate_limiter.check_and_record(ip).is_err());
}

#[test]
fn uptime_is_non_negative() {
    let state = test_app_state(0);
    assert!(state.uptime_secs() >= 0.0);
}
