//! Campaign record documents.
//!
//! A campaign record is the one shared mutable document in the system:
//! currency, party state, the xp-per-level-up target, and the privileged
//! game-master identity all live here.

use std::fmt;

use serde::{Deserialize, Serialize};

use tally_foundation::{Error, Result, Value};

/// Opaque campaign document key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CampaignId(pub u64);

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "campaign-{}", self.0)
    }
}

/// A slot in the campaign record that an aspect reads and writes.
///
/// This is the closed, typed counterpart of the original storage-key
/// indirection: every registered aspect names exactly one slot, and the
/// record answers for all of them exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CampaignField {
    /// Accumulated party experience points.
    Xp,
    /// Currency quantity.
    Gold,
    /// Number of party members.
    PartySize,
    /// Experience points required for the next level.
    XpTarget,
    /// The campaign's display name.
    CampaignName,
}

/// Party currency.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// How much the party holds.
    pub quantity: i64,
    /// What the quantity is denominated in ("gold", "credits", ...).
    pub denomination: String,
}

/// Party state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Number of members.
    pub size: i64,
    /// Current level.
    pub level: i64,
    /// Accumulated experience points.
    pub xp: i64,
    /// Experience points required to level up.
    pub xp_for_level_up: i64,
}

/// A campaign document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignRecord {
    /// Document key.
    pub id: CampaignId,
    /// Campaign display name.
    pub name: String,
    /// The one caller identity allowed to run modifier commands.
    pub game_master: String,
    /// Party currency.
    pub currency: Currency,
    /// Party state.
    pub party: Party,
}

impl CampaignRecord {
    /// Creates a record with empty currency and a fresh level-1 party.
    #[must_use]
    pub fn new(
        id: CampaignId,
        name: impl Into<String>,
        game_master: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            game_master: game_master.into(),
            currency: Currency {
                quantity: 0,
                denomination: "gold".to_string(),
            },
            party: Party {
                size: 0,
                level: 1,
                xp: 0,
                xp_for_level_up: 500,
            },
        }
    }

    /// Sets the currency quantity.
    #[must_use]
    pub fn with_gold(mut self, quantity: i64) -> Self {
        self.currency.quantity = quantity;
        self
    }

    /// Sets the party size.
    #[must_use]
    pub fn with_party_size(mut self, size: i64) -> Self {
        self.party.size = size;
        self
    }

    /// Sets the party xp.
    #[must_use]
    pub fn with_xp(mut self, xp: i64) -> Self {
        self.party.xp = xp;
        self
    }

    /// Sets the xp-per-level-up target.
    #[must_use]
    pub fn with_xp_target(mut self, target: i64) -> Self {
        self.party.xp_for_level_up = target;
        self
    }

    /// Reads the value currently stored in a slot.
    #[must_use]
    pub fn value_of(&self, field: CampaignField) -> Value {
        match field {
            CampaignField::Xp => Value::Int(self.party.xp),
            CampaignField::Gold => Value::Int(self.currency.quantity),
            CampaignField::PartySize => Value::Int(self.party.size),
            CampaignField::XpTarget => Value::Int(self.party.xp_for_level_up),
            CampaignField::CampaignName => Value::Text(self.name.clone()),
        }
    }

    /// Overwrites a slot with a new value.
    ///
    /// # Errors
    ///
    /// Returns an internal error if an integer slot is handed a non-integer
    /// value; the invocation validator rules that out upstream.
    pub fn set_value(&mut self, field: CampaignField, value: &Value) -> Result<()> {
        if field == CampaignField::CampaignName {
            // The singleton slot takes whatever it is given, rendered as text.
            self.name = value.to_string();
            return Ok(());
        }
        let n = value
            .as_int()
            .ok_or_else(|| Error::internal(format!("non-integer value for {field:?}")))?;
        *self.int_slot(field)? = n;
        Ok(())
    }

    /// Adds a signed delta to an integer slot, returning the new value.
    ///
    /// # Errors
    ///
    /// Returns an internal error for the campaign-name slot, which cannot
    /// be incremented; the executor's singleton guard rules that out.
    pub fn apply_delta(&mut self, field: CampaignField, delta: i64) -> Result<i64> {
        let slot = self.int_slot(field)?;
        *slot += delta;
        Ok(*slot)
    }

    fn int_slot(&mut self, field: CampaignField) -> Result<&mut i64> {
        match field {
            CampaignField::Xp => Ok(&mut self.party.xp),
            CampaignField::Gold => Ok(&mut self.currency.quantity),
            CampaignField::PartySize => Ok(&mut self.party.size),
            CampaignField::XpTarget => Ok(&mut self.party.xp_for_level_up),
            CampaignField::CampaignName => {
                Err(Error::internal("campaign name is not an integer slot"))
            }
        }
    }
}
