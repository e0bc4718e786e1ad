use serde::{Deserialize, Serialize};

/// Domain model for a purchase receipt submitted for scoring.
///
/// Every scalar field is kept as the raw text the client sent. Parsing
/// happens inside the scoring rules, which need the literal strings.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}

/// A single line item of a receipt.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

/// The points awarded to a processed receipt, keyed by its generated id.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub id: String,
    pub points: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_receipt() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [{"shortDescription": "Mountain Dew 12PK", "price": "6.49"}],
            "total": "6.49"
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(receipt.items[0].short_description, "Mountain Dew 12PK");
        assert_eq!(receipt.items[0].price, "6.49");
    }

    #[test]
    fn rejects_receipt_with_missing_fields() {
        let json = r#"{"retailer": "Target", "items": []}"#;
        assert!(serde_json::from_str::<Receipt>(json).is_err());
    }
}
