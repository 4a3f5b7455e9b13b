use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog record. Immutable after the catalog is loaded.
///
/// Serialized with camelCase keys, the shape the bundled data file and the
/// persisted cart share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    pub id: u32,
    pub name: String,
    pub active_ingredient: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_ingredient_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    // Legacy field, present in older data sets only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// One medicine in the quote-request cart, with the requested quantity.
///
/// The medicine fields are flattened so a stored line reads as
/// `{ ...medicine, "quantity": n, "addedAt": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    #[serde(flatten)]
    pub medicine: Medicine,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    pub fn new(medicine: Medicine) -> Self {
        Self {
            medicine,
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    pub fn id(&self) -> u32 {
        self.medicine.id
    }
}

/// Who is asking for the quote. Fixed set, matching the request form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum UserType {
    /// Patient or a relative of a patient
    PatientRelative,
    /// Physician or other healthcare professional
    HealthcareProfessional,
    /// Pharmacist
    Pharmacist,
    /// Wholesaler or merchant
    Wholesaler,
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            UserType::PatientRelative => "Patient / relative",
            UserType::HealthcareProfessional => "Healthcare professional",
            UserType::Pharmacist => "Pharmacist",
            UserType::Wholesaler => "Wholesaler / merchant",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_line_serializes_flat() {
        let medicine = Medicine {
            id: 7,
            name: "Parol".into(),
            active_ingredient: "Parasetamol".into(),
            active_ingredient_description: None,
            packaging: Some("500 MG 20 TABLETS".into()),
            manufacturer: None,
            country: None,
            category: None,
        };
        let line = CartLine::new(medicine);

        let value = serde_json::to_value(&line).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["activeIngredient"], "Parasetamol");
        assert_eq!(value["quantity"], 1);
        assert!(value.get("manufacturer").is_none());
    }

    #[test]
    fn cart_line_roundtrips() {
        let medicine = Medicine {
            id: 1,
            name: "ZIAGEN".into(),
            active_ingredient: "ABACAVIR".into(),
            active_ingredient_description: Some("Antiretroviral.".into()),
            packaging: Some("300 MG 60 FILM-COATED TABLETS".into()),
            manufacturer: Some("GLAXOSMITHKLINE".into()),
            country: Some("CANADA".into()),
            category: None,
        };
        let mut line = CartLine::new(medicine);
        line.quantity = 4;

        let json = serde_json::to_string(&line).unwrap();
        let parsed: CartLine = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, line);
    }
}
