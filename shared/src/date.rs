//! 日期工具模块
//!
//! 预约相关的日期都以 `YYYY-MM-DD` 字符串在前后端之间传输：
//! - `DateWindow`: 可选日期区间（新建预约、改期）
//! - `today()`: 当前本地日期，wasm 下取自 `js_sys::Date`

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// 传输用日期格式
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// 展示用日期格式，如 `18 Oct 2026`
pub const DISPLAY_DATE_FORMAT: &str = "%-d %b %Y";

/// 新建预约最多可提前的天数
pub const BOOKING_WINDOW_DAYS: i64 = 3;

// =========================================================
// DateWindow - 可选日期区间
// =========================================================

/// 闭区间 `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateWindow {
    /// 新建预约：今天 ~ 今天+3
    pub fn booking(today: NaiveDate) -> Self {
        Self {
            min: today,
            max: today + Duration::days(BOOKING_WINDOW_DAYS),
        }
    }

    /// 改期：明天 ~ 今天+3
    pub fn reschedule(today: NaiveDate) -> Self {
        Self {
            min: today + Duration::days(1),
            max: today + Duration::days(BOOKING_WINDOW_DAYS),
        }
    }

    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min <= date && date <= self.max
    }

    /// `<input type="date" min=..>` 使用的字符串
    pub fn min_str(&self) -> String {
        self.min.format(WIRE_DATE_FORMAT).to_string()
    }

    pub fn max_str(&self) -> String {
        self.max.format(WIRE_DATE_FORMAT).to_string()
    }
}

/// 解析 `YYYY-MM-DD`，也接受带时间部分的 ISO 字符串
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, WIRE_DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(dt) = value.parse::<chrono::DateTime<chrono::FixedOffset>>() {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// 格式化为展示日期，无法解析时原样返回
pub fn format_display_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        None => value.to_string(),
    }
}

/// 当前本地日期
#[cfg(target_arch = "wasm32")]
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// 当前本地日期
#[cfg(not(target_arch = "wasm32"))]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, WIRE_DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_booking_window_includes_today_and_three_days_ahead() {
        let w = DateWindow::booking(d("2026-10-18"));
        assert!(w.contains(d("2026-10-18")));
        assert!(w.contains(d("2026-10-21")));
        assert!(!w.contains(d("2026-10-22")));
        assert!(!w.contains(d("2026-10-17")));
        assert_eq!(w.min_str(), "2026-10-18");
        assert_eq!(w.max_str(), "2026-10-21");
    }

    #[test]
    fn test_reschedule_window_starts_tomorrow() {
        let w = DateWindow::reschedule(d("2026-12-30"));
        assert!(!w.contains(d("2026-12-30")));
        assert!(w.contains(d("2026-12-31")));
        assert_eq!(w.max_str(), "2027-01-02");
    }

    #[test]
    fn test_display_date() {
        assert_eq!(format_display_date("2026-10-08"), "8 Oct 2026");
        assert_eq!(format_display_date("2026-10-18T09:30:00"), "18 Oct 2026");
        assert_eq!(format_display_date("2026-10-18T09:30:00Z"), "18 Oct 2026");
        assert_eq!(format_display_date("soon"), "soon");
    }
}
