//! Deterministic fixture datasets.

use crate::{MockDataset, MockSourceBuilder};

/// 2024-01-01T00:00:00Z in nanoseconds.
pub const JAN_2024_NS: i64 = 1_704_067_200 * 1_000_000_000;
/// One hour in nanoseconds.
pub const HOUR_NS: i64 = 3_600 * 1_000_000_000;
/// Number of hourly rows in the trade fixtures.
pub const TRADE_ROWS: i64 = 48;

fn hourly(rows: i64, f: impl Fn(i64) -> f64) -> Vec<(i64, f64)> {
    (0..rows).map(|i| (JAN_2024_NS + i * HOUR_NS, f(i))).collect()
}

#[allow(clippy::cast_precision_loss)]
fn btc_price(i: i64) -> f64 {
    42_000.0 + 25.0 * i as f64 + [0.0, 40.0, -15.0, 10.0, -30.0][(i % 5) as usize]
}

/// Standard catalog used across tests and demos.
///
/// - `BTCUSDT/trades`: `price`, `volume` (hourly, 48 rows)
/// - `ETHUSDT/trades`: `price` (tracks BTC one hour later), `volume`
/// - `BTCUSDT/funding-rate`: `rate` (every 8 hours)
/// - `SOLUSDT/trades`: `price` with only non-finite values
/// - `TOY/example`: `a` and `b` at timestamps 100, 200, 300
/// - `EMPTY`: an instrument with no categories
pub(crate) fn standard() -> MockSourceBuilder {
    #[allow(clippy::cast_precision_loss)]
    let volume = |i: i64| 100.0 + ((i * 37) % 11) as f64;
    MockSourceBuilder::new()
        .dataset(
            "BTCUSDT",
            "trades",
            MockDataset::new()
                .column("price", hourly(TRADE_ROWS, btc_price))
                .column("volume", hourly(TRADE_ROWS, volume)),
        )
        .dataset(
            "ETHUSDT",
            "trades",
            MockDataset::new()
                .column(
                    "price",
                    hourly(TRADE_ROWS, |i| {
                        if i == 0 { 2_200.0 } else { btc_price(i - 1) / 19.0 }
                    }),
                )
                .column("volume", hourly(TRADE_ROWS, |i| volume(i + 3))),
        )
        .dataset(
            "BTCUSDT",
            "funding-rate",
            MockDataset::new().column(
                "rate",
                (0..TRADE_ROWS / 8)
                    .map(|i| {
                        #[allow(clippy::cast_precision_loss)]
                        let r = 0.0001 * (1 + i % 3) as f64;
                        (JAN_2024_NS + i * 8 * HOUR_NS, r)
                    })
                    .collect(),
            ),
        )
        .dataset(
            "SOLUSDT",
            "trades",
            MockDataset::new().column(
                "price",
                hourly(4, |i| if i % 2 == 0 { f64::NAN } else { f64::INFINITY }),
            ),
        )
        .dataset(
            "TOY",
            "example",
            MockDataset::new()
                .column("a", vec![(100, 1.0), (200, 2.0), (300, 3.0)])
                .column("b", vec![(100, 10.0), (200, 20.0), (300, 30.0)]),
        )
        .instrument("EMPTY")
}
