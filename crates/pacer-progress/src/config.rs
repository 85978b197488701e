use indicatif::{BinaryBytes, DecimalBytes, HumanCount};

/// Display settings for one progress bar.
///
/// Every acquisition takes its own value; nothing is read from process-wide
/// defaults, so two bars configured the same way always render the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressConfig {
    pub desc: Option<String>,
    pub total: Option<u64>,
    pub unit: String,
    pub unit_scale: bool,
    pub unit_divisor: u64,
    pub bar_format: Option<String>,
    pub leave: bool,
    pub ascii: bool,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            desc: None,
            total: None,
            unit: "it".to_string(),
            unit_scale: false,
            unit_divisor: 1000,
            bar_format: None,
            leave: true,
            ascii: false,
        }
    }
}

impl ProgressConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    pub fn total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn unit_scale(mut self, unit_scale: bool) -> Self {
        self.unit_scale = unit_scale;
        self
    }

    /// Divisor used between scaled magnitudes. Only 1000 and 1024 are
    /// distinguished; anything other than 1024 scales decimally.
    pub fn unit_divisor(mut self, unit_divisor: u64) -> Self {
        self.unit_divisor = unit_divisor;
        self
    }

    pub fn bar_format(mut self, bar_format: impl Into<String>) -> Self {
        self.bar_format = Some(bar_format.into());
        self
    }

    /// Keep the finished bar on screen (`true`) or clear it (`false`).
    pub fn leave(mut self, leave: bool) -> Self {
        self.leave = leave;
        self
    }

    pub fn ascii(mut self, ascii: bool) -> Self {
        self.ascii = ascii;
        self
    }

    /// Fills in `total` only when the caller has not declared one.
    pub fn or_total(mut self, total: Option<u64>) -> Self {
        if self.total.is_none() {
            self.total = total;
        }
        self
    }

    fn is_bytes(&self) -> bool {
        self.unit_scale && self.unit == "B"
    }

    /// Renders a count the way `{n_fmt}` and `{total_fmt}` show it.
    pub fn format_count(&self, n: u64) -> String {
        if !self.unit_scale {
            return n.to_string();
        }
        if self.is_bytes() {
            if self.unit_divisor == 1024 {
                BinaryBytes(n).to_string()
            } else {
                DecimalBytes(n).to_string()
            }
        } else {
            HumanCount(n).to_string()
        }
    }

    /// Renders a throughput the way `{rate_fmt}` shows it.
    pub fn format_rate(&self, per_sec: f64) -> String {
        if !per_sec.is_finite() || per_sec <= 0.0 {
            return format!("?{}/s", self.unit);
        }
        if self.is_bytes() {
            format!("{}/s", self.format_count(per_sec as u64))
        } else {
            format!("{per_sec:.2}{}/s", self.unit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProgressConfig::new();
        assert_eq!(config.unit, "it");
        assert_eq!(config.unit_divisor, 1000);
        assert!(config.leave);
        assert!(!config.unit_scale);
        assert!(config.total.is_none());
    }

    #[test]
    fn test_or_total_keeps_declared_total() {
        let config = ProgressConfig::new().total(10).or_total(Some(99));
        assert_eq!(config.total, Some(10));

        let config = ProgressConfig::new().or_total(Some(99));
        assert_eq!(config.total, Some(99));
    }

    #[test]
    fn test_unscaled_count_is_raw() {
        let config = ProgressConfig::new().unit("file");
        assert_eq!(config.format_count(1234567), "1234567");
    }

    #[test]
    fn test_binary_byte_scaling() {
        let config = ProgressConfig::new()
            .unit("B")
            .unit_scale(true)
            .unit_divisor(1024);
        assert_eq!(config.format_count(10 * 1024 * 1024), "10.00 MiB");
    }

    #[test]
    fn test_decimal_byte_scaling() {
        let config = ProgressConfig::new().unit("B").unit_scale(true);
        assert_eq!(config.format_count(2_000_000), "2.00 MB");
    }

    #[test]
    fn test_rate_unknown_before_first_sample() {
        let config = ProgressConfig::new().unit("file");
        assert_eq!(config.format_rate(0.0), "?file/s");
        assert_eq!(config.format_rate(f64::NAN), "?file/s");
    }

    #[test]
    fn test_rate_with_unit() {
        let config = ProgressConfig::new();
        assert_eq!(config.format_rate(12.5), "12.50it/s");
    }
}
