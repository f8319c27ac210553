/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a short human-quotable order reference.
///
/// Layout: `P-` + base36 milliseconds since 2024-01-01 UTC + 2 random
/// digits. Time-ordered with a small random tail, like the snowflake
/// IDs used elsewhere, but compact enough to dictate over the phone
/// and to paste into a bank-transfer concept line. Collisions are
/// possible and accepted; fulfillment is human-mediated.
pub fn order_number() -> String {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let ts = (now_millis() - EPOCH_MS).max(0);
    let tail: u32 = rand::thread_rng().gen_range(0..100);
    format!("P-{}{:02}", to_base36(ts), tail)
}

fn to_base36(mut value: i64) -> String {
    const DIGITS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize] as char);
        value /= 36;
    }
    out.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base36_round_trip() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "Z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(36 * 36 + 1), "101");
    }

    #[test]
    fn test_order_number_shape() {
        let n = order_number();
        assert!(n.starts_with("P-"));
        // base36 timestamp + 2 digit tail
        assert!(n.len() > 4);
        assert!(n[2..].chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
