//! Response Envelope
//!
//! Every successful endpoint returns `{"data": ...}`; the error
//! counterpart (`{"error": ...}`) lives in `error::conversions`.

use serde::{Deserialize, Serialize};

/// Success envelope wrapping the payload under a `data` key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Data<T> {
    pub data: T,
}

impl<T> Data<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let body = serde_json::to_value(Data::new("token123")).unwrap();
        assert_eq!(body, serde_json::json!({ "data": "token123" }));
    }

    #[test]
    fn test_envelope_list() {
        let body = serde_json::to_value(Data::new(Vec::<u32>::new())).unwrap();
        assert_eq!(body, serde_json::json!({ "data": [] }));
    }
}
