//! Display Formatting
//!
//! Number formatting shared by counters, charts and pricing.

/// Format an integer with comma thousands separators (`1250` -> `"1,250"`)
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Prefix plus grouped integer (`"$"`, `125000` -> `"$125,000"`)
pub fn prefixed(prefix: &str, value: u64) -> String {
    format!("{}{}", prefix, group_thousands(value))
}

/// Dollar price with two decimals (`49.9` -> `"$49.90"`)
pub fn price(value: f64) -> String {
    format!("${:.2}", value)
}

/// Raw chart value as plain text: integral values print without a fraction
pub fn chart_value(value: f64) -> String {
    format!("{}", value)
}

/// Escape text for inclusion in HTML/SVG markup
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(45), "45");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1250), "1,250");
        assert_eq!(group_thousands(125000), "125,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_prefixed() {
        assert_eq!(prefixed("$", 125000), "$125,000");
        assert_eq!(prefixed("", 342), "342");
    }

    #[test]
    fn test_price() {
        assert_eq!(price(49.9), "$49.90");
        assert_eq!(price(0.0), "$0.00");
    }

    #[test]
    fn test_chart_value() {
        assert_eq!(chart_value(10000.0), "10000");
        assert_eq!(chart_value(12.5), "12.5");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"Tom\" & 'Jerry'</b>"),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }
}
