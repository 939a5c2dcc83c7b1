//! Форматирование денежных и процентных значений

/// Форматирует число с разделителем тысяч (пробел) и указанным количеством
/// знаков после запятой
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        _ => format!("{:.2}", value),
    };

    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    // Пробел каждые 3 цифры с конца целой части, минус не отделяется
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(' ');
        }
        result.push(*c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Денежная сумма: группировка по тысячам, без дробной части
pub fn format_amount(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Процент: ровно два знака после запятой, без группировки
pub fn format_percent(value: f64) -> String {
    format!("{:.2}", value)
}

/// Потолок скидки в сообщении об ошибке: без хвостовых нулей
pub fn format_limit(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(12_345_678.0), "12 345 678");
        assert_eq!(format_amount(1_234.0), "1 234");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(-1_234_567.0), "-1 234 567");
    }

    #[test]
    fn test_format_amount_rounds_fraction() {
        assert_eq!(format_amount(7_666_666.67), "7 666 667");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(7.0), "7.00");
        assert_eq!(format_percent(7.125), "7.13");
        assert_eq!(format_percent(0.0), "0.00");
    }

    #[test]
    fn test_format_limit() {
        assert_eq!(format_limit(5.0), "5");
        assert_eq!(format_limit(2.5), "2.5");
        assert_eq!(format_limit(0.75), "0.75");
    }
}
