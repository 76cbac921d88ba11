use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, TimeZone, Timelike};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Local midnight of a calendar day. When midnight does not exist locally
/// (DST switch at 00:00) the naive value is read as UTC.
pub fn local_midnight(date: NaiveDate) -> DateTime<Local> {
    let naive = date.and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&naive)
        .earliest()
        .unwrap_or_else(|| Local.from_utc_datetime(&naive))
}

/// Day identity used by the store.
pub fn day_key(date: NaiveDate) -> i64 {
    local_midnight(date).timestamp_millis()
}

/// Milliseconds elapsed since the (wall clock) start of the timestamp's day.
pub fn time_of_day_ms(ts: &DateTime<Local>) -> i64 {
    let t = ts.time();
    t.num_seconds_from_midnight() as i64 * 1000 + (t.nanosecond() / 1_000_000) as i64
}

/// Token based formatter: `dd MM yyyy HH mm ss zzz`. A missing date formats
/// as an empty string.
pub fn format_date(date: Option<&DateTime<Local>>, pattern: &str) -> String {
    let Some(d) = date else {
        return String::new();
    };

    let mut out = pattern.to_string();

    if out.contains("dd") {
        out = out.replace("dd", &format!("{:02}", d.day()));
    }
    if out.contains("MM") {
        out = out.replace("MM", &format!("{:02}", d.month()));
    }
    if out.contains("yyyy") {
        out = out.replace("yyyy", &format!("{:04}", d.year()));
    }
    if out.contains("HH") {
        out = out.replace("HH", &format!("{:02}", d.hour()));
    }
    if out.contains("mm") {
        out = out.replace("mm", &format!("{:02}", d.minute()));
    }
    if out.contains("ss") {
        out = out.replace("ss", &format!("{:02}", d.second()));
    }
    if out.contains("zzz") {
        out = out.replace("zzz", &(d.nanosecond() / 1_000_000).to_string());
    }

    out
}

/// Same tokens for a plain calendar day (time tokens render as midnight).
pub fn format_day(date: NaiveDate, pattern: &str) -> String {
    format_date(Some(&local_midnight(date)), pattern)
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

pub fn weekday_name(date: NaiveDate) -> &'static str {
    use chrono::Weekday::*;

    match date.weekday() {
        Mon => "Monday",
        Tue => "Tuesday",
        Wed => "Wednesday",
        Thu => "Thursday",
        Fri => "Friday",
        Sat => "Saturday",
        Sun => "Sunday",
    }
}
