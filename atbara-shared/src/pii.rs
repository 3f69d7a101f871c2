use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Wrapper for passenger and card data that must never reach the logs.
///
/// `Debug` and `Display` both print a fixed mask, so a stray `tracing::info!("{:?}", passenger)`
/// stays clean. Serialization still emits the real value because confirmations and
/// ticket views need it.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Masked<T>(pub T);

const MASK: &str = "********";

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}

impl<T> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    pub fn expose(&self) -> &T {
        &self.0
    }
}

impl Masked<String> {
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Mask everything but the last four characters (`************3456`)
    pub fn tail(&self) -> String {
        let chars: Vec<char> = self.0.chars().filter(|c| !c.is_whitespace()).collect();
        let keep = chars.len().min(4);
        let hidden = chars.len() - keep;
        let mut out = "*".repeat(hidden);
        out.extend(&chars[hidden..]);
        out
    }
}

impl From<&str> for Masked<String> {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Masked<String> {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_and_display_are_masked() {
        let id = Masked::from("P1234567");
        assert_eq!(format!("{:?}", id), "********");
        assert_eq!(format!("{}", id), "********");
        assert_eq!(id.expose(), "P1234567");
    }

    #[test]
    fn test_serialization_keeps_value() {
        let phone = Masked::from("+249 123 456 789");
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"+249 123 456 789\"");
    }

    #[test]
    fn test_tail_keeps_last_four() {
        let card = Masked::from("1234 5678 9012 3456");
        assert_eq!(card.tail(), "************3456");
        assert_eq!(Masked::from("12").tail(), "12");
    }
}
