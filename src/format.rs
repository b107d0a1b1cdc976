use serde_json::Value;

/// Stand-in for any value that is absent or unusable.
pub const PLACEHOLDER: &str = "-";

const MILLION: f64 = 1_000_000.0;

/// Formats a share count, abbreviating millions: `12000000` becomes `"12 M"`
/// (with a narrow no-break space).
pub fn fmt_num(value: Option<&Value>) -> String {
    let number = match value {
        None | Some(Value::Null) => return PLACEHOLDER.into(),
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) if text == "0" => return PLACEHOLDER.into(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    let Some(number) = number.filter(|n| n.is_finite() && *n != 0.0) else {
        return PLACEHOLDER.into();
    };

    if number.abs() >= MILLION {
        format!("{:.0}\u{202f}M", number / MILLION)
    } else {
        format!("{number:.0}")
    }
}

/// Formats the offering price. Ranges such as `"18-21"` pass through, single
/// prices get a dollar sign.
pub fn price_range(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) if text.contains('-') => text.clone(),
        Some(Value::String(text)) if text.is_empty() => PLACEHOLDER.into(),
        Some(Value::String(text)) => format!("${text}"),
        Some(Value::Number(number)) => format!("${number}"),
        _ => PLACEHOLDER.into(),
    }
}
