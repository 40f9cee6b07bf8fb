#[cfg(all(feature = "web"))]
pub fn pad2(n: i32) -> String {
    if n < 10 {
        format!("0{}", n)
    } else {
        n.to_string()
    }
}

#[cfg(all(feature = "web"))]
fn js_date(ts: &str) -> Option<js_sys::Date> {
    use js_sys::Date;
    let d = Date::new(&wasm_bindgen::JsValue::from_str(ts));
    if d.get_time().is_nan() {
        None
    } else {
        Some(d)
    }
}

#[cfg(all(feature = "web"))]
pub fn format_local(ts: &str) -> String {
    let Some(d) = js_date(ts) else {
        return ts.to_string();
    };
    let day = d.get_date() as i32;
    let month = (d.get_month() as i32) + 1;
    let year = d.get_full_year() as i32;
    let hour = d.get_hours() as i32;
    let minute = d.get_minutes() as i32;
    format!(
        "{}.{}.{} {}:{}",
        pad2(day),
        pad2(month),
        year,
        pad2(hour),
        pad2(minute)
    )
}

#[cfg(all(feature = "web"))]
pub fn format_time_of_day(ts: &str) -> String {
    let Some(d) = js_date(ts) else {
        return ts.to_string();
    };
    format!(
        "{}:{}:{}",
        pad2(d.get_hours() as i32),
        pad2(d.get_minutes() as i32),
        pad2(d.get_seconds() as i32)
    )
}

/// Accepts RFC 3339 as well as the naive ISO form the service emits
/// (`2024-05-01T10:20:30.123456`, no offset).
#[cfg(all(not(feature = "web"), any(feature = "server", test)))]
fn parse_timestamp(ts: &str) -> Option<chrono::NaiveDateTime> {
    use chrono::{DateTime, Local, NaiveDateTime};
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

#[cfg(all(not(feature = "web"), any(feature = "server", test)))]
pub fn format_local(ts: &str) -> String {
    parse_timestamp(ts)
        .map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
        .unwrap_or_else(|| ts.to_string())
}

#[cfg(all(not(feature = "web"), any(feature = "server", test)))]
pub fn format_time_of_day(ts: &str) -> String {
    parse_timestamp(ts)
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| ts.to_string())
}

#[cfg(not(any(feature = "web", feature = "server", test)))]
pub fn format_local(ts: &str) -> String {
    ts.to_string()
}

#[cfg(not(any(feature = "web", feature = "server", test)))]
pub fn format_time_of_day(ts: &str) -> String {
    ts.to_string()
}

/// Price as the service sent it, e.g. `₹123.45` or `₹100`.
pub fn format_rupees(price: f64) -> String {
    format!("₹{}", price)
}

pub fn format_rupees_fixed(price: f64) -> String {
    format!("₹{:.2}", price)
}

/// Compact axis label: no trailing zeros, at most two decimals.
pub fn format_axis_value(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(all(test, not(feature = "web")))]
mod tests {
    use super::*;

    #[test]
    fn rupees_keep_natural_precision() {
        assert_eq!(format_rupees(123.45), "₹123.45");
        assert_eq!(format_rupees(100.0), "₹100");
    }

    #[test]
    fn rupees_fixed_use_two_decimals() {
        assert_eq!(format_rupees_fixed(123.4), "₹123.40");
        assert_eq!(format_rupees_fixed(99.999), "₹100.00");
    }

    #[test]
    fn naive_service_timestamps_are_formatted() {
        assert_eq!(format_local("2024-05-01T10:20:30.123456"), "01.05.2024 10:20");
        assert_eq!(format_time_of_day("2024-05-01T10:20:30.123456"), "10:20:30");
        assert_eq!(format_time_of_day("2024-05-01T08:05:09"), "08:05:09");
        assert_eq!(format_time_of_day("2024-05-01 23:59:00"), "23:59:00");
    }

    #[test]
    fn unparsable_timestamps_pass_through() {
        assert_eq!(format_local("yesterday"), "yesterday");
        assert_eq!(format_time_of_day(""), "");
    }

    #[test]
    fn axis_values_are_compact() {
        assert_eq!(format_axis_value(0.0), "0");
        assert_eq!(format_axis_value(50.0), "50");
        assert_eq!(format_axis_value(12.5), "12.5");
        assert_eq!(format_axis_value(0.25), "0.25");
    }
}
