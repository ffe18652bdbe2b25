//! 通用工具函数

/// 将长度文本解析为毫米数值
///
/// 允许前后空白和单个小数逗号；空文本、非数字以及非有限值返回 `None`。
pub fn parse_length(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = if trimmed.matches(',').count() == 1 && !trimmed.contains('.') {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };

    normalized.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// 四舍五入（0.5 向上取整）
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("10"), Some(10.0));
        assert_eq!(parse_length(" 3.5 "), Some(3.5));
        assert_eq!(parse_length("12,5"), Some(12.5));
        assert_eq!(parse_length("-2"), Some(-2.0));
        assert_eq!(parse_length(""), None);
        assert_eq!(parse_length("   "), None);
        assert_eq!(parse_length("abc"), None);
        assert_eq!(parse_length("1,2,3"), None);
        assert_eq!(parse_length("1.000,5"), None);
        assert_eq!(parse_length("inf"), None);
        assert_eq!(parse_length("NaN"), None);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(30.0), 30.0);
        assert_eq!(round_half_up(12.5), 13.0);
        assert_eq!(round_half_up(12.49), 12.0);
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(0.0), 0.0);
    }
}
