/// Last representable minute of a day (23:59).
pub const LAST_MINUTE: i64 = 1439;

/// Format a minute-of-day as `HH:MM`, clamped to `00:00..=23:59`.
pub fn minutes_to_time(minute: i64) -> String {
    let clamped = minute.clamp(0, LAST_MINUTE);
    format!("{:02}:{:02}", clamped / 60, clamped % 60)
}

/// Same as [`minutes_to_time`], rounding fractional minutes first.
pub fn minutes_to_time_f64(minute: f64) -> String {
    if minute.is_nan() {
        return minutes_to_time(0);
    }
    // Saturating cast keeps infinities inside i64 before the clamp.
    minutes_to_time(minute.round() as i64)
}

/// Parse a strict `HH:MM` string into a minute-of-day.
pub fn time_to_minutes(value: &str) -> Option<u32> {
    let (hours, minutes) = value.trim().split_once(':')?;
    if hours.len() != 2 || minutes.len() != 2 {
        return None;
    }
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(s: &str) -> i64 {
        i64::from(time_to_minutes(s).expect("well-formed time"))
    }

    #[test]
    fn formats_day_boundaries() {
        assert_eq!(minutes_to_time(0), "00:00");
        assert_eq!(minutes_to_time(1439), "23:59");
        assert_eq!(minutes_to_time(9 * 60 + 5), "09:05");
    }

    #[test]
    fn clamps_out_of_range_minutes() {
        assert_eq!(minutes_to_time(-5), "00:00");
        assert_eq!(minutes_to_time(1500), "23:59");
        assert_eq!(minutes_to_time(i64::MIN), "00:00");
        assert_eq!(minutes_to_time(i64::MAX), "23:59");
    }

    #[test]
    fn rounds_fractional_minutes() {
        assert_eq!(minutes_to_time_f64(89.6), "01:30");
        assert_eq!(minutes_to_time_f64(89.4), "01:29");
        assert_eq!(minutes_to_time_f64(-0.4), "00:00");
        assert_eq!(minutes_to_time_f64(f64::NAN), "00:00");
        assert_eq!(minutes_to_time_f64(f64::INFINITY), "23:59");
    }

    #[test]
    fn output_is_always_well_formed_and_decodes_to_clamped_value() {
        for m in (-120..1600).step_by(7) {
            let s = minutes_to_time(m);
            assert_eq!(s.len(), 5, "{s}");
            assert!(s.chars().enumerate().all(|(i, c)| if i == 2 {
                c == ':'
            } else {
                c.is_ascii_digit()
            }));
            assert_eq!(decode(&s), m.clamp(0, LAST_MINUTE));
        }
    }

    #[test]
    fn parses_strict_times_only() {
        assert_eq!(time_to_minutes("07:30"), Some(450));
        assert_eq!(time_to_minutes(" 18:00 "), Some(1080));
        assert_eq!(time_to_minutes("7:30"), None);
        assert_eq!(time_to_minutes("24:00"), None);
        assert_eq!(time_to_minutes("12:60"), None);
        assert_eq!(time_to_minutes("noon"), None);
    }
}
