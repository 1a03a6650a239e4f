use serde::{Deserialize, Serialize};

use crate::numeric_id;

numeric_id!(
    /// Backend id of an LED screen
    ScreenId
);

// ============================================================================
// Enums
// ============================================================================

/// Where the screen is installed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ScreenType {
    #[default]
    #[serde(rename = "IN_DOOR")]
    InDoor,
    #[serde(rename = "OUT_DOOR")]
    OutDoor,
}

impl ScreenType {
    pub const ALL: [ScreenType; 2] = [ScreenType::InDoor, ScreenType::OutDoor];

    /// Value sent over the wire (multipart fields and query strings)
    pub fn code(&self) -> &'static str {
        match self {
            ScreenType::InDoor => "IN_DOOR",
            ScreenType::OutDoor => "OUT_DOOR",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScreenType::InDoor => "Indoor",
            ScreenType::OutDoor => "Outdoor",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

/// How the screen surface is assembled.
///
/// `Module` screens are built from cabinets that each carry a module batch,
/// `Cabinet` screens are described by their cabinets alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Solution {
    #[default]
    Cabinet,
    Module,
}

impl Solution {
    pub const ALL: [Solution; 2] = [Solution::Cabinet, Solution::Module];

    pub fn code(&self) -> &'static str {
        match self {
            Solution::Cabinet => "Cabinet",
            Solution::Module => "Module",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}

// ============================================================================
// Read models
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cabinet {
    #[serde(default)]
    pub id: Option<i64>,
    pub quantity: u32,
    pub height: f64,
    pub width: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    #[serde(default)]
    pub id: Option<i64>,
    pub quantity: u32,
    pub height: f64,
    pub width: f64,
    pub batch_number: String,
}

/// Screen as returned by `GET /screens` and `GET /screens/:id`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    pub id: ScreenId,
    pub name: String,
    pub screen_type: ScreenType,
    #[serde(default)]
    pub location: String,
    pub height: f64,
    pub width: f64,
    pub solution: Solution,
    #[serde(default)]
    pub screen_fan: Option<String>,
    #[serde(default)]
    pub power_supply_type: Option<String>,
    #[serde(default)]
    pub power_supply_qty: Option<u32>,
    #[serde(default)]
    pub receiving_card_type: Option<String>,
    #[serde(default)]
    pub receiving_card_qty: Option<u32>,
    #[serde(default)]
    pub cabinets: Vec<Cabinet>,
    #[serde(default)]
    pub modules: Vec<Module>,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Scalar part of the screen creation request.
///
/// Sent as flat multipart fields (see [`CreateScreenForm::to_fields`]); the
/// three files travel as separate parts alongside these.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateScreenForm {
    pub name: String,
    pub screen_type: ScreenType,
    pub location: String,
    pub height: f64,
    pub width: f64,
    pub solution: Solution,
    pub screen_fan: String,
    pub power_supply_type: String,
    pub power_supply_qty: u32,
    pub power_supply_spare_qty: u32,
    pub receiving_card_type: String,
    pub receiving_card_qty: u32,
    pub receiving_card_spare_qty: u32,
}

/// Multipart part names of the three attached files
pub const CONNECTION_FILE_FIELD: &str = "connectionFile";
pub const CONFIG_FILE_FIELD: &str = "configFile";
pub const VERSION_FILE_FIELD: &str = "versionFile";

impl CreateScreenForm {
    /// Flat `(field, value)` pairs in the order they are appended to the form
    pub fn to_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("screenType", self.screen_type.code().to_string()),
            ("location", self.location.clone()),
            ("height", self.height.to_string()),
            ("width", self.width.to_string()),
            ("solution", self.solution.code().to_string()),
            ("screenFan", self.screen_fan.clone()),
            ("powerSupplyType", self.power_supply_type.clone()),
            ("powerSupplyQty", self.power_supply_qty.to_string()),
            ("powerSupplySpareQty", self.power_supply_spare_qty.to_string()),
            ("receivingCardType", self.receiving_card_type.clone()),
            ("receivingCardQty", self.receiving_card_qty.to_string()),
            ("receivingCardSpareQty", self.receiving_card_spare_qty.to_string()),
        ]
    }
}

/// Body of `POST /cabin`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCabinetDto {
    pub quantity: u32,
    pub height: f64,
    pub width: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Body of `POST /module`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateModuleDto {
    pub quantity: u32,
    pub height: f64,
    pub width: f64,
    pub batch_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_use_backend_codes() {
        assert_eq!(serde_json::to_string(&ScreenType::OutDoor).unwrap(), "\"OUT_DOOR\"");
        assert_eq!(serde_json::to_string(&Solution::Module).unwrap(), "\"Module\"");
        assert_eq!(ScreenType::from_code("IN_DOOR"), Some(ScreenType::InDoor));
        assert_eq!(Solution::from_code("module"), None);
    }

    #[test]
    fn cabinet_dto_renames_kind_to_type() {
        let dto = CreateCabinetDto {
            quantity: 2,
            height: 0.5,
            width: 1.0,
            kind: "Die-cast".into(),
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["type"], "Die-cast");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn module_dto_uses_camel_case_batch_number() {
        let dto = CreateModuleDto {
            quantity: 4,
            height: 0.25,
            width: 0.25,
            batch_number: "B-17".into(),
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["batchNumber"], "B-17");
    }

    #[test]
    fn screen_form_fields_are_flat_scalars() {
        let form = CreateScreenForm {
            name: "Lobby".into(),
            screen_type: ScreenType::OutDoor,
            height: 2.5,
            width: 4.0,
            solution: Solution::Module,
            power_supply_qty: 3,
            ..Default::default()
        };
        let fields = form.to_fields();
        let get = |k: &str| fields.iter().find(|(f, _)| *f == k).map(|(_, v)| v.clone());
        assert_eq!(get("screenType").as_deref(), Some("OUT_DOOR"));
        assert_eq!(get("solution").as_deref(), Some("Module"));
        assert_eq!(get("height").as_deref(), Some("2.5"));
        assert_eq!(get("powerSupplyQty").as_deref(), Some("3"));
        assert_eq!(fields.len(), 13);
    }

    #[test]
    fn screen_tolerates_missing_optional_fields() {
        let raw = r#"{"id":3,"name":"Mall","screenType":"IN_DOOR","height":1.0,"width":2.0,"solution":"Cabinet"}"#;
        let screen: Screen = serde_json::from_str(raw).unwrap();
        assert_eq!(screen.id, ScreenId(3));
        assert!(screen.cabinets.is_empty());
        assert_eq!(screen.location, "");
    }
}
