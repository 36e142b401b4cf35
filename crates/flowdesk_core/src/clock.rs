//! Wall-clock helpers for ids and completion stamps.

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Milliseconds since the Unix epoch.
pub fn now_epoch_ms() -> i128 {
    epoch_ms(OffsetDateTime::now_utc())
}

/// Current UTC time as an RFC 3339 string.
pub fn now_rfc3339() -> String {
    let now = OffsetDateTime::now_utc();
    now.format(&Rfc3339)
        .unwrap_or_else(|_| epoch_ms(now).to_string())
}

fn epoch_ms(at: OffsetDateTime) -> i128 {
    at.unix_timestamp_nanos() / 1_000_000
}

#[cfg(test)]
mod tests {
    use super::{epoch_ms, now_epoch_ms, now_rfc3339};
    use time::format_description::well_known::Rfc3339;
    use time::OffsetDateTime;

    #[test]
    fn rfc3339_output_parses_back() {
        let stamp = now_rfc3339();
        assert!(OffsetDateTime::parse(&stamp, &Rfc3339).is_ok());
    }

    #[test]
    fn epoch_ms_is_after_2020() {
        assert!(now_epoch_ms() > 1_577_836_800_000);
    }

    #[test]
    fn ids_and_stamps_share_one_clock() {
        let before = now_epoch_ms();
        let stamp = OffsetDateTime::parse(&now_rfc3339(), &Rfc3339).unwrap();
        let after = now_epoch_ms();
        let stamped = epoch_ms(stamp);
        assert!(before <= stamped && stamped <= after);
    }
}
