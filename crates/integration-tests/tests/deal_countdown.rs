//! Deal pricing and the countdown ticker as a front end would drive them.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use fresh_farm_storefront::{Countdown, Deal, StorefrontConfig, spawn_countdown};

#[test]
fn deal_of_the_day_figures() {
    let deal = Deal::of_the_day();
    assert_eq!(deal.price().display(), "$3.00");
    assert_eq!(deal.original().display(), "$5.00");
    assert_eq!(deal.discount_percent(), 40);
    assert_eq!(deal.review_count, 128);
    assert_eq!(deal.countdown.to_string(), "10:45:30");
}

#[tokio::test(start_paused = true)]
async fn configured_countdown_runs_to_zero() {
    let config = StorefrontConfig::from_lookup(|key| match key {
        "FRESH_FARM_DEAL_COUNTDOWN" => Some("0:0:3".to_string()),
        "FRESH_FARM_TICK_MS" => Some("100".to_string()),
        _ => None,
    })
    .unwrap();
    let deal = config.deal();

    let handle = spawn_countdown(deal.countdown, config.tick);
    let mut rx = handle.subscribe();

    let mut seen = Vec::new();
    while rx.changed().await.is_ok() {
        seen.push(rx.borrow_and_update().to_string());
    }
    assert_eq!(seen, ["00:00:02", "00:00:01", "00:00:00"]);
    assert!(handle.current().is_expired());
}

#[tokio::test(start_paused = true)]
async fn cancelled_countdown_stops_publishing() {
    let handle = spawn_countdown(Countdown::new(1, 0, 0), Duration::from_secs(1));
    let mut rx = handle.subscribe();

    tokio::time::sleep(Duration::from_millis(2500)).await;
    assert_eq!(*rx.borrow_and_update(), Countdown::new(0, 59, 58));

    handle.cancel();
    // The sender is dropped with the aborted task
    assert!(rx.changed().await.is_err());
    assert_eq!(*rx.borrow(), Countdown::new(0, 59, 58));
}
