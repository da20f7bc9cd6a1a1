use serde::Deserialize;

use super::TransportError;

/// Identifier as Unisender serializes it: usually a JSON number, occasionally
/// a decimal string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum TransportId {
    Number(u64),
    Text(String),
}

impl TransportId {
    pub(crate) fn into_u64(self) -> Result<u64, TransportError> {
        match self {
            Self::Number(value) => Ok(value),
            Self::Text(value) => value
                .trim()
                .parse()
                .map_err(|_| TransportError::InvalidId { value }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let id: TransportId = serde_json::from_str("42").unwrap();
        assert_eq!(id.into_u64().unwrap(), 42);

        let id: TransportId = serde_json::from_str(r#""42""#).unwrap();
        assert_eq!(id.into_u64().unwrap(), 42);

        let id: TransportId = serde_json::from_str(r#""forty-two""#).unwrap();
        assert!(matches!(
            id.into_u64().unwrap_err(),
            TransportError::InvalidId { .. }
        ));
    }
}
