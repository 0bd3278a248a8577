//! Nutrition data model exchanged with the search endpoints.
//!
//! All types are immutable value objects built by deserializing a service
//! response. Every field except [`NutritionInfo::food_name`] may be absent, and
//! absence means "unknown", never zero.

use super::envelope::{ErrorEnvelope, ResponseStatus};
use serde::{Deserialize, Serialize};

/// Placeholder shown on result cards for a missing nutrient value.
pub const MISSING_VALUE: &str = "N/A";

/// Per-serving nutrient amounts, each independently optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proteins: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbohydrates: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
}

/// Nutrient selector with its display label and unit suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nutrient {
    Calories,
    Energy,
    Proteins,
    Carbohydrates,
    Salt,
    Sodium,
}

impl Nutrient {
    /// Order used by the detail view.
    pub const ALL: [Self; 6] = [
        Self::Calories,
        Self::Energy,
        Self::Proteins,
        Self::Carbohydrates,
        Self::Salt,
        Self::Sodium,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Calories => "Calories",
            Self::Energy => "Energy",
            Self::Proteins => "Proteins",
            Self::Carbohydrates => "Carbohydrates",
            Self::Salt => "Salt",
            Self::Sodium => "Sodium",
        }
    }

    /// Unit suffix appended directly after the value.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Calories => " kcal",
            Self::Energy => " kJ",
            Self::Proteins | Self::Carbohydrates | Self::Salt => "g",
            Self::Sodium => "mg",
        }
    }
}

impl NutrientDetails {
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Energy => self.energy,
            Nutrient::Proteins => self.proteins,
            Nutrient::Carbohydrates => self.carbohydrates,
            Nutrient::Salt => self.salt,
            Nutrient::Sodium => self.sodium,
        }
    }
}

/// One food item as described by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionInfo {
    pub food_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrients: Option<NutrientDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origins: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<String>,
}

impl NutritionInfo {
    /// Creates an item carrying only a name.
    #[must_use]
    pub fn named(food_name: impl Into<String>) -> Self {
        Self {
            food_name: food_name.into(),
            nutrients: None,
            allergens: None,
            brand: None,
            categories: None,
            image_url: None,
            ingredients_text: None,
            origins: None,
            product_code: None,
            serving_size: None,
        }
    }

    /// Returns the nutrient value, if known.
    #[must_use]
    pub fn nutrient(&self, nutrient: Nutrient) -> Option<f64> {
        self.nutrients.as_ref().and_then(|n| n.get(nutrient))
    }

    /// Formats a nutrient for a result card, using [`MISSING_VALUE`] when unknown.
    ///
    /// The unit is only appended to known values.
    #[must_use]
    pub fn card_value(&self, nutrient: Nutrient, unit: &str) -> String {
        self.nutrient(nutrient)
            .map_or_else(|| MISSING_VALUE.to_string(), |v| format!("{}{unit}", format_amount(v)))
    }

    /// General detail rows as `(label, value)`, skipping absent or empty fields.
    #[must_use]
    pub fn detail_rows(&self) -> Vec<(&'static str, String)> {
        let allergens = self
            .allergens
            .as_ref()
            .filter(|list| !list.is_empty())
            .map(|list| list.join(", "));

        [
            ("Serving Size", self.serving_size.clone()),
            ("Brand", self.brand.clone()),
            ("Categories", self.categories.clone()),
            ("Ingredients", self.ingredients_text.clone()),
            ("Allergens", allergens),
            ("Origins", self.origins.clone()),
            ("Product Code", self.product_code.clone()),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.filter(|v| !v.is_empty()).map(|v| (label, v)))
        .collect()
    }

    /// Nutrient rows as `(label, value with unit)`, skipping unknown nutrients.
    ///
    /// Returns an empty list when the item carries no nutrient block.
    #[must_use]
    pub fn nutrient_rows(&self) -> Vec<(&'static str, String)> {
        let Some(nutrients) = &self.nutrients else {
            return vec![];
        };
        Nutrient::ALL
            .iter()
            .filter_map(|&n| {
                nutrients
                    .get(n)
                    .map(|v| (n.label(), format!("{}{}", format_amount(v), n.unit())))
            })
            .collect()
    }

    /// Whether two items describe the same logical product.
    ///
    /// Product codes decide when both are present; otherwise names are compared
    /// case-insensitively.
    #[must_use]
    pub fn is_same_item(&self, other: &Self) -> bool {
        match (&self.product_code, &other.product_code) {
            (Some(a), Some(b)) => a == b,
            _ => self.food_name.trim().eq_ignore_ascii_case(other.food_name.trim()),
        }
    }
}

/// Formats an amount without a trailing `.0` for whole numbers.
fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Envelope returned by the text and barcode search endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionResponse {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<NutritionInfo>,
    #[serde(default)]
    pub alternatives: Vec<NutritionInfo>,
}

impl NutritionResponse {
    /// Returns the primary match, unless the envelope is an error.
    ///
    /// Payload carried by an error envelope is never usable.
    #[must_use]
    pub fn usable_data(&self) -> Option<&NutritionInfo> {
        if self.status.is_error() {
            None
        } else {
            self.data.as_ref()
        }
    }

    /// Returns the alternatives with any duplicate of the primary match removed.
    ///
    /// Empty for error envelopes.
    #[must_use]
    pub fn alternatives_excluding_primary(&self) -> Vec<NutritionInfo> {
        if self.status.is_error() {
            return vec![];
        }
        let primary = self.data.as_ref();
        self.alternatives
            .iter()
            .filter(|alt| primary.map_or(true, |p| !p.is_same_item(alt)))
            .cloned()
            .collect()
    }
}

impl ErrorEnvelope for NutritionResponse {
    fn from_failure_message(message: String) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: Some(message),
            data: None,
            alternatives: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn banana() -> NutritionInfo {
        NutritionInfo {
            nutrients: Some(NutrientDetails {
                calories: Some(89.0),
                proteins: Some(1.1),
                sodium: Some(1.0),
                ..NutrientDetails::default()
            }),
            allergens: Some(vec!["latex".into(), "pollen".into()]),
            serving_size: Some("100g".into()),
            product_code: Some("0001".into()),
            origins: None,
            ..NutritionInfo::named("Banana")
        }
    }

    #[test]
    fn minimal_item_parses_with_only_a_name() {
        let item: NutritionInfo = serde_json::from_value(json!({"food_name": "Banana"})).unwrap();
        assert_eq!(item, NutritionInfo::named("Banana"));
    }

    #[test]
    fn null_and_absent_optionals_are_both_unknown() {
        let item: NutritionInfo =
            serde_json::from_value(json!({"food_name": "Tea", "image_url": null, "origins": null}))
                .unwrap();
        assert!(item.image_url.is_none());
        assert!(item.origins.is_none());
    }

    #[test]
    fn full_response_survives_the_wire() {
        let response = NutritionResponse {
            status: ResponseStatus::Partial,
            message: Some("only some fields".into()),
            data: Some(banana()),
            alternatives: vec![NutritionInfo::named("Plantain")],
        };
        let wire = serde_json::to_string(&response).unwrap();
        let back: NutritionResponse = serde_json::from_str(&wire).unwrap();
        assert_eq!(back, response);
    }

    #[test]
    fn sparse_values_survive_the_wire() {
        let minimal = NutritionInfo::named("Banana");
        let wire = serde_json::to_value(&minimal).unwrap();
        assert_eq!(wire, json!({"food_name": "Banana"}));
        assert_eq!(serde_json::from_value::<NutritionInfo>(wire).unwrap(), minimal);

        let mut partial = NutritionInfo::named("Oat drink");
        partial.nutrients = Some(NutrientDetails { sodium: Some(40.0), ..NutrientDetails::default() });
        partial.allergens = Some(vec![]);
        let back: NutritionInfo =
            serde_json::from_str(&serde_json::to_string(&partial).unwrap()).unwrap();
        assert_eq!(back, partial);

        let no_data = NutritionResponse {
            status: ResponseStatus::Error,
            message: Some("Error 404: Food not found".into()),
            data: None,
            alternatives: vec![],
        };
        let back: NutritionResponse =
            serde_json::from_str(&serde_json::to_string(&no_data).unwrap()).unwrap();
        assert_eq!(back, no_data);
    }

    #[test]
    fn absent_alternatives_default_to_empty() {
        let response: NutritionResponse =
            serde_json::from_value(json!({"status": "success", "data": {"food_name": "Banana"}}))
                .unwrap();
        assert!(response.alternatives.is_empty());
    }

    #[test]
    fn error_envelope_payload_is_never_usable() {
        let response: NutritionResponse = serde_json::from_value(json!({
            "status": "error",
            "message": "boom",
            "data": {"food_name": "Ghost"},
            "alternatives": [{"food_name": "Ghost 2"}]
        }))
        .unwrap();
        assert!(response.usable_data().is_none());
        assert!(response.alternatives_excluding_primary().is_empty());
    }

    #[test]
    fn alternatives_drop_duplicates_of_primary() {
        let response = NutritionResponse {
            status: ResponseStatus::Success,
            message: None,
            data: Some(banana()),
            alternatives: vec![
                NutritionInfo::named("banana"),
                NutritionInfo { product_code: Some("0001".into()), ..NutritionInfo::named("Other") },
                NutritionInfo::named("Plantain"),
            ],
        };
        let names: Vec<_> = response
            .alternatives_excluding_primary()
            .into_iter()
            .map(|i| i.food_name)
            .collect();
        assert_eq!(names, vec!["Plantain"]);
    }

    #[test]
    fn distinct_product_codes_are_different_items_even_with_same_name() {
        let a = NutritionInfo { product_code: Some("1".into()), ..NutritionInfo::named("Milk") };
        let b = NutritionInfo { product_code: Some("2".into()), ..NutritionInfo::named("Milk") };
        assert!(!a.is_same_item(&b));
    }

    #[test]
    fn card_values_fall_back_to_placeholder() {
        let item = banana();
        assert_eq!(item.card_value(Nutrient::Calories, ""), "89");
        assert_eq!(item.card_value(Nutrient::Proteins, "g"), "1.1g");
        assert_eq!(item.card_value(Nutrient::Carbohydrates, "g"), MISSING_VALUE);
        assert_eq!(NutritionInfo::named("x").card_value(Nutrient::Calories, ""), MISSING_VALUE);
    }

    #[test]
    fn detail_rows_skip_unknown_fields_and_join_allergens() {
        let rows = banana().detail_rows();
        assert_eq!(
            rows,
            vec![
                ("Serving Size", "100g".to_string()),
                ("Allergens", "latex, pollen".to_string()),
                ("Product Code", "0001".to_string()),
            ]
        );
    }

    #[test]
    fn nutrient_rows_use_units_and_skip_unknowns() {
        let rows = banana().nutrient_rows();
        assert_eq!(
            rows,
            vec![
                ("Calories", "89 kcal".to_string()),
                ("Proteins", "1.1g".to_string()),
                ("Sodium", "1mg".to_string()),
            ]
        );
        assert!(NutritionInfo::named("x").nutrient_rows().is_empty());
    }
}
