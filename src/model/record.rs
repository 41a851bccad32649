use crate::model::date::AwfulDate;

use serde::Deserialize;

/// Crop information.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Crop {
    /// The unique identifier for the crop.
    pub id: i64,
    /// The name of the crop.
    pub name: String,
    /// Four-character crop code.
    pub code: String,
    /// Notes about the crop.
    pub notes: String,
}

/// Pest information.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Pest {
    /// The unique PICOL identifier for the pest.
    pub id: i64,
    /// The name of the pest.
    pub name: String,
    /// The four- or five-character pest code.
    pub code: String,
    /// Notes about the pest.
    pub notes: String,
}

/// Pesticide ingredient information.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Ingredient {
    /// The unique PICOL identifier for the ingredient.
    pub id: i64,
    /// The name of the ingredient.
    pub name: String,
    /// Six-digit ingredient code. Leading zeros are significant, so this is
    /// kept as a string.
    pub code: String,
    /// Notes about the ingredient.
    pub notes: String,
    /// Resistance information about the ingredient. An empty `Code` marks the
    /// sentinel "no resistance" entry.
    pub resistance: Resistance,
}

/// Resistance information.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Resistance {
    /// The unique PICOL identifier for the resistance.
    pub id: i64,
    /// Four-character source code.
    pub source: String,
    /// Alphanumeric resistance code.
    pub code: String,
    /// The method of action for the resistance.
    pub method_of_action: String,
}

/// Registrant information.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Registrant {
    /// The unique PICOL identifier for the registrant.
    pub id: i64,
    /// The name of the registrant.
    pub name: String,
    /// The registrant's website.
    pub website: String,
}

/// Pesticide type information.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct PesticideType {
    /// The unique PICOL identifier for the pesticide type.
    pub id: i64,
    /// The name of the pesticide type.
    pub name: String,
    /// The three- or four-character pesticide type code.
    pub code: String,
}

/// A state registration record.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct StateRecord {
    /// The unique PICOL identifier for the state record.
    pub id: i64,
    /// The PICOL identifier for the state.
    pub state_id: i64,
    /// The name of the state.
    pub name: String,
    /// The agency identifier.
    pub agency_id: String,
    /// The version of the state registration.
    pub version: String,
    /// The registration year.
    pub year: i32,
    /// Approved for use on cannabis production under WA I-502.
    #[serde(rename = "I502")]
    pub i502: bool,
    /// Approved for use on industrial hemp production under WA ESSB 6206.
    pub essb6206: bool,
}

/// Pesticide label information.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Label {
    /// The unique PICOL identifier for the pesticide label.
    pub id: i64,
    /// The name of the label.
    pub name: String,
    /// The EPA number.
    pub epa_number: String,
    /// The intended user of the pesticide.
    pub intended_user: String,
    /// Ingredients in the pesticide.
    pub ingredients: Vec<Ingredient>,
    /// The type(s) of this pesticide.
    pub pesticide_types: Vec<PesticideType>,
    /// The registrant of the pesticide.
    pub registrant: Registrant,
    /// The specialized local need (SLN) registration number.
    pub sln: String,
    /// The name of the specialized local need (SLN).
    pub sln_name: String,
    /// The SLN expiration.
    pub sln_expiration: Option<AwfulDate>,
    /// State records related to the pesticide.
    pub state_records: Vec<StateRecord>,
    /// Supplemental code.
    pub supplemental: String,
    /// The name of the supplemental.
    pub supplemental_name: String,
    /// The supplemental expiration.
    pub supplemental_expiration: Option<AwfulDate>,
    /// The formulation code.
    pub formulation: String,
    /// The signal word.
    pub signal_word: String,
    /// Intended usage.
    pub usage: String,
    /// Whether the label is OMRI-certified organic.
    pub organic: Option<bool>,
    /// Whether the label has an Endangered Species Act (ESA) notice.
    pub esa_notice: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn test_ingredient_decodes_nested_resistance() {
        let document = r#"{
            "Id": 17,
            "Name": "2,4-D",
            "Code": "000030",
            "Resistance": {"Id": 4, "Source": "HRAC", "Code": "O", "MethodOfAction": "Synthetic auxins"}
        }"#;
        let ingredient: Ingredient = serde_json::from_str(document).unwrap();
        assert_eq!(ingredient.id, 17);
        assert_eq!(ingredient.code, "000030");
        assert!(ingredient.notes.is_empty());
        assert_eq!(ingredient.resistance.id, 4);
        assert_eq!(ingredient.resistance.code, "O");
    }

    #[rstest]
    fn test_ingredient_missing_resistance_is_sentinel() {
        let ingredient: Ingredient =
            serde_json::from_str(r#"{"Id": 3, "Name": "Sulfur", "Code": "000001"}"#).unwrap();
        assert_eq!(ingredient.resistance, Resistance::default());
        assert!(ingredient.resistance.code.is_empty());
    }

    #[rstest]
    fn test_label_decodes_optional_dates() {
        let document = r#"{
            "Id": 100,
            "Name": "Example 2EC",
            "IntendedUser": "Commercial",
            "SlnExpiration": "12/31/27",
            "StateRecords": [{"Id": 1, "StateId": 1, "Name": "Washington", "Year": 2027, "I502": true}]
        }"#;
        let label: Label = serde_json::from_str(document).unwrap();
        let expiration = label.sln_expiration.unwrap();
        assert_eq!((expiration.year(), expiration.month(), expiration.day()), (2027, 12, 31));
        assert_eq!(label.supplemental_expiration, None);
        assert_eq!(label.organic, None);
        assert!(label.state_records[0].i502);
        assert!(!label.state_records[0].essb6206);
    }
}
