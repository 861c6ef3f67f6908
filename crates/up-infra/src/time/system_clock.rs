use up_core::ports::ClockPort;

/// Wall clock backed by chrono.
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_ms_is_recent() {
        let now = SystemClock.now_ms();
        // 2020-01-01 as a floor; anything earlier means a broken clock.
        assert!(now > 1_577_836_800_000);
    }
}
