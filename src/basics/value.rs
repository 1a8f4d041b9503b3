/// Either a piece of text or a number.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

/// Text maps to its length in UTF-16 code units, numbers are doubled.
pub fn process_value(value: impl Into<Value>) -> f64 {
    match value.into() {
        Value::Text(text) => text.encode_utf16().count() as f64,
        Value::Number(n) => n * 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_length() {
        assert_eq!(process_value("hello"), 5.0);
        assert_eq!(process_value(String::new()), 0.0);
        // UTF-16 units, not bytes
        assert_eq!(process_value("héllo"), 5.0);
    }

    #[test]
    fn test_astral_char_counts_two_units() {
        assert_eq!(process_value("😀"), 2.0);
        assert_eq!(process_value("a😀b"), 4.0);
    }

    #[test]
    fn test_number_doubled() {
        assert_eq!(process_value(10), 20.0);
        assert_eq!(process_value(-1.5), -3.0);
        assert_eq!(process_value(Value::Number(0.0)), 0.0);
    }
}
