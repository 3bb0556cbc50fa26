pub(crate) fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub(crate) fn usd(value: u64) -> String {
    format!("${}", thousands(value))
}

pub(crate) fn miles(value: u32) -> String {
    format!("{value} mi")
}

pub(crate) fn mph(value: u32) -> String {
    format!("{value} mph")
}

/// Whole seconds keep one decimal place (`4.0s`); others print as stored (`1.99s`).
pub(crate) fn seconds(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}s")
    } else {
        format!("{value}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1_000), "1,000");
        assert_eq!(thousands(38_990), "38,990");
        assert_eq!(thousands(1_234_567), "1,234,567");
        assert_eq!(usd(99_990), "$99,990");
    }

    #[test]
    fn formats_units() {
        assert_eq!(miles(272), "272 mi");
        assert_eq!(mph(125), "125 mph");
        assert_eq!(seconds(5.8), "5.8s");
        assert_eq!(seconds(4.0), "4.0s");
        assert_eq!(seconds(1.99), "1.99s");
    }
}
