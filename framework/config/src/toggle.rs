/// A string setting that can be switched off by a sentinel value.
///
/// Used for the duration and time-unit fields, which the pipeline disables by
/// exporting an empty string, `disabled`, `none`, `null` or a zero value with
/// an optional unit suffix such as `0` or `0.0s`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    Disabled,
    Enabled(String),
}

impl Toggle {
    pub fn parse(raw: Option<&str>) -> Self {
        let value = raw.map(str::trim).unwrap_or("");
        if value.is_empty() {
            return Toggle::Disabled;
        }
        if matches!(
            value.to_ascii_lowercase().as_str(),
            "disabled" | "none" | "null"
        ) {
            return Toggle::Disabled;
        }
        if is_zero_with_optional_unit(value) {
            return Toggle::Disabled;
        }
        Toggle::Enabled(value.to_string())
    }

    pub fn enabled(&self) -> bool {
        matches!(self, Toggle::Enabled(_))
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Toggle::Disabled => None,
            Toggle::Enabled(value) => Some(value),
        }
    }
}

/// True for strings like `0`, `0.0` or `0.0s`: a zero numeric prefix followed
/// by nothing but an alphabetic unit.
fn is_zero_with_optional_unit(value: &str) -> bool {
    let numeric_end = value
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(numeric_end);
    if number.is_empty() || !unit.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    number.parse::<f64>().map(|n| n == 0.0).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sentinels_disable_the_setting() {
        for sentinel in ["", "  ", "disabled", "DISABLED", "none", "null", "0", "0.0s", "0m"] {
            assert_eq!(
                Toggle::parse(Some(sentinel)),
                Toggle::Disabled,
                "{sentinel:?} should disable"
            );
        }
        assert_eq!(Toggle::parse(None), Toggle::Disabled);
    }

    #[test]
    fn real_values_stay_enabled() {
        assert_eq!(
            Toggle::parse(Some("5m")),
            Toggle::Enabled("5m".to_string())
        );
        assert_eq!(
            Toggle::parse(Some(" 10s ")),
            Toggle::Enabled("10s".to_string())
        );
        // Not a plain zero-with-unit shape, so it is kept as-is.
        assert_eq!(
            Toggle::parse(Some("0h30m")),
            Toggle::Enabled("0h30m".to_string())
        );
    }
}
