/// Форматирует число с разделителями тысяч (точками)
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Количество улова: тысячи через точку, один знак после запятой
pub fn format_quantity(value: f64) -> String {
    let tenths = (value.abs() * 10.0).round() as u64;
    let sign = if value < 0.0 && tenths > 0 { "-" } else { "" };
    let whole = format_number(tenths / 10);
    match tenths % 10 {
        0 => format!("{}{}", sign, whole),
        frac => format!("{}{},{}", sign, whole, frac),
    }
}

/// Доля в процентах, как на карточках отчёта ("30,2%")
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_quantity(value))
}
