//! Draft of a screen under construction.
//!
//! Numeric inputs keep the raw text the user typed; parsing happens in
//! `validation` so a half-typed value never loses characters.

use contracts::domain::a001_screen::aggregate::{
    ScreenType, Solution, CONFIG_FILE_FIELD, CONNECTION_FILE_FIELD, VERSION_FILE_FIELD,
};
use std::fmt;

/// Stable identity of a cabinet entry, never reused within one draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CabinetKey(pub u32);

impl fmt::Display for CabinetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type, quantity and spare quantity of one hardware part
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartDraft {
    pub kind: String,
    pub qty: String,
    pub spare_qty: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileSlot {
    Connection,
    Config,
    Version,
}

impl FileSlot {
    pub const ALL: [FileSlot; 3] = [FileSlot::Connection, FileSlot::Config, FileSlot::Version];

    /// Key of the inline error under the picker
    pub fn error_key(&self) -> &'static str {
        match self {
            FileSlot::Connection => "connection_file",
            FileSlot::Config => "config_file",
            FileSlot::Version => "version_file",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FileSlot::Connection => "Connection file",
            FileSlot::Config => "Config file",
            FileSlot::Version => "Version file",
        }
    }

    /// Multipart part name
    pub fn part_name(&self) -> &'static str {
        match self {
            FileSlot::Connection => CONNECTION_FILE_FIELD,
            FileSlot::Config => CONFIG_FILE_FIELD,
            FileSlot::Version => VERSION_FILE_FIELD,
        }
    }
}

/// Names of the picked files; the `File` handles live in the view model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenFiles {
    pub connection: Option<String>,
    pub config: Option<String>,
    pub version: Option<String>,
}

impl ScreenFiles {
    pub fn get(&self, slot: FileSlot) -> Option<&str> {
        match slot {
            FileSlot::Connection => self.connection.as_deref(),
            FileSlot::Config => self.config.as_deref(),
            FileSlot::Version => self.version.as_deref(),
        }
    }

    pub fn set(&mut self, slot: FileSlot, name: Option<String>) {
        let target = match slot {
            FileSlot::Connection => &mut self.connection,
            FileSlot::Config => &mut self.config,
            FileSlot::Version => &mut self.version,
        };
        *target = name;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleDraft {
    pub quantity: String,
    pub height: String,
    pub width: String,
    pub batch_number: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CabinetDraft {
    pub key: CabinetKey,
    pub quantity: String,
    pub height: String,
    pub width: String,
    pub kind: String,
    /// Only submitted when the screen's solution is `Module`
    pub module: ModuleDraft,
}

impl CabinetDraft {
    pub fn blank(key: CabinetKey) -> Self {
        Self {
            key,
            quantity: String::new(),
            height: String::new(),
            width: String::new(),
            kind: String::new(),
            module: ModuleDraft::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenDraft {
    pub name: String,
    pub screen_type: ScreenType,
    pub location: String,
    pub height: String,
    pub width: String,
    pub solution: Solution,
    pub screen_fan: String,
    pub power_supply: PartDraft,
    pub receiving_card: PartDraft,
    pub files: ScreenFiles,
    pub cabinets: Vec<CabinetDraft>,
    next_key: u32,
}

impl ScreenDraft {
    /// Empty draft holding one blank cabinet
    pub fn new() -> Self {
        let mut draft = Self {
            name: String::new(),
            screen_type: ScreenType::default(),
            location: String::new(),
            height: String::new(),
            width: String::new(),
            solution: Solution::default(),
            screen_fan: String::new(),
            power_supply: PartDraft::default(),
            receiving_card: PartDraft::default(),
            files: ScreenFiles::default(),
            cabinets: Vec::new(),
            next_key: 1,
        };
        draft.push_cabinet();
        draft
    }

    /// Append a blank cabinet under a fresh key
    pub fn push_cabinet(&mut self) -> CabinetKey {
        let key = CabinetKey(self.next_key);
        self.next_key += 1;
        self.cabinets.push(CabinetDraft::blank(key));
        key
    }

    pub fn cabinet_mut(&mut self, key: CabinetKey) -> Option<&mut CabinetDraft> {
        self.cabinets.iter_mut().find(|c| c.key == key)
    }

    pub fn set_field(&mut self, field: ScreenField, value: String) {
        let target = match field {
            ScreenField::Name => &mut self.name,
            ScreenField::Location => &mut self.location,
            ScreenField::Height => &mut self.height,
            ScreenField::Width => &mut self.width,
            ScreenField::ScreenFan => &mut self.screen_fan,
            ScreenField::PowerSupplyType => &mut self.power_supply.kind,
            ScreenField::PowerSupplyQty => &mut self.power_supply.qty,
            ScreenField::PowerSupplySpareQty => &mut self.power_supply.spare_qty,
            ScreenField::ReceivingCardType => &mut self.receiving_card.kind,
            ScreenField::ReceivingCardQty => &mut self.receiving_card.qty,
            ScreenField::ReceivingCardSpareQty => &mut self.receiving_card.spare_qty,
        };
        *target = value;
    }

    pub fn field(&self, field: ScreenField) -> &str {
        match field {
            ScreenField::Name => &self.name,
            ScreenField::Location => &self.location,
            ScreenField::Height => &self.height,
            ScreenField::Width => &self.width,
            ScreenField::ScreenFan => &self.screen_fan,
            ScreenField::PowerSupplyType => &self.power_supply.kind,
            ScreenField::PowerSupplyQty => &self.power_supply.qty,
            ScreenField::PowerSupplySpareQty => &self.power_supply.spare_qty,
            ScreenField::ReceivingCardType => &self.receiving_card.kind,
            ScreenField::ReceivingCardQty => &self.receiving_card.qty,
            ScreenField::ReceivingCardSpareQty => &self.receiving_card.spare_qty,
        }
    }
}

impl Default for ScreenDraft {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Field identifiers (also the error keys)
// ============================================================================

/// Free-text fields of steps 1 and 2
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenField {
    Name,
    Location,
    Height,
    Width,
    ScreenFan,
    PowerSupplyType,
    PowerSupplyQty,
    PowerSupplySpareQty,
    ReceivingCardType,
    ReceivingCardQty,
    ReceivingCardSpareQty,
}

impl ScreenField {
    pub fn key(&self) -> &'static str {
        match self {
            ScreenField::Name => "name",
            ScreenField::Location => "location",
            ScreenField::Height => "height",
            ScreenField::Width => "width",
            ScreenField::ScreenFan => "screen_fan",
            ScreenField::PowerSupplyType => "power_supply_type",
            ScreenField::PowerSupplyQty => "power_supply_qty",
            ScreenField::PowerSupplySpareQty => "power_supply_spare_qty",
            ScreenField::ReceivingCardType => "receiving_card_type",
            ScreenField::ReceivingCardQty => "receiving_card_qty",
            ScreenField::ReceivingCardSpareQty => "receiving_card_spare_qty",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CabinetField {
    Quantity,
    Height,
    Width,
    Kind,
}

impl CabinetField {
    pub const ALL: [CabinetField; 4] = [
        CabinetField::Quantity,
        CabinetField::Height,
        CabinetField::Width,
        CabinetField::Kind,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CabinetField::Quantity => "quantity",
            CabinetField::Height => "height",
            CabinetField::Width => "width",
            CabinetField::Kind => "type",
        }
    }

    pub fn key(&self, cabinet: CabinetKey) -> String {
        format!("{}{}", cabinet_prefix(cabinet), self.name())
    }

    pub fn get<'a>(&self, cabinet: &'a CabinetDraft) -> &'a str {
        match self {
            CabinetField::Quantity => &cabinet.quantity,
            CabinetField::Height => &cabinet.height,
            CabinetField::Width => &cabinet.width,
            CabinetField::Kind => &cabinet.kind,
        }
    }

    pub fn set(&self, cabinet: &mut CabinetDraft, value: String) {
        match self {
            CabinetField::Quantity => cabinet.quantity = value,
            CabinetField::Height => cabinet.height = value,
            CabinetField::Width => cabinet.width = value,
            CabinetField::Kind => cabinet.kind = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleField {
    Quantity,
    Height,
    Width,
    BatchNumber,
}

impl ModuleField {
    pub const ALL: [ModuleField; 4] = [
        ModuleField::Quantity,
        ModuleField::Height,
        ModuleField::Width,
        ModuleField::BatchNumber,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ModuleField::Quantity => "quantity",
            ModuleField::Height => "height",
            ModuleField::Width => "width",
            ModuleField::BatchNumber => "batch_number",
        }
    }

    pub fn key(&self, cabinet: CabinetKey) -> String {
        format!("{}{}", module_prefix(cabinet), self.name())
    }

    pub fn get<'a>(&self, module: &'a ModuleDraft) -> &'a str {
        match self {
            ModuleField::Quantity => &module.quantity,
            ModuleField::Height => &module.height,
            ModuleField::Width => &module.width,
            ModuleField::BatchNumber => &module.batch_number,
        }
    }

    pub fn set(&self, module: &mut ModuleDraft, value: String) {
        match self {
            ModuleField::Quantity => module.quantity = value,
            ModuleField::Height => module.height = value,
            ModuleField::Width => module.width = value,
            ModuleField::BatchNumber => module.batch_number = value,
        }
    }
}

pub fn cabinet_prefix(cabinet: CabinetKey) -> String {
    format!("cabinet_{}_", cabinet)
}

pub fn module_prefix(cabinet: CabinetKey) -> String {
    format!("module_{}_", cabinet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_draft_starts_with_one_blank_cabinet() {
        let draft = ScreenDraft::new();
        assert_eq!(draft.cabinets.len(), 1);
        assert_eq!(draft.cabinets[0], CabinetDraft::blank(CabinetKey(1)));
    }

    #[test]
    fn cabinet_keys_are_never_reused() {
        let mut draft = ScreenDraft::new();
        let second = draft.push_cabinet();
        draft.cabinets.retain(|c| c.key != second);
        let third = draft.push_cabinet();
        assert_ne!(second, third);
        assert_eq!(third, CabinetKey(3));
    }

    #[test]
    fn error_keys_embed_the_stable_key() {
        assert_eq!(CabinetField::Kind.key(CabinetKey(7)), "cabinet_7_type");
        assert_eq!(ModuleField::BatchNumber.key(CabinetKey(7)), "module_7_batch_number");
    }

    #[test]
    fn part_fields_route_to_nested_drafts() {
        let mut draft = ScreenDraft::new();
        draft.set_field(ScreenField::ReceivingCardSpareQty, "2".into());
        assert_eq!(draft.receiving_card.spare_qty, "2");
        assert_eq!(draft.field(ScreenField::ReceivingCardSpareQty), "2");
    }
}
