//! In-memory campaign store.
//!
//! Backs the REPL and the test suites. The whole store serializes with
//! serde so the runtime can snapshot it to disk between sessions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use tally_foundation::{Error, Result};

use crate::campaign::{CampaignId, CampaignRecord};
use crate::CampaignStore;

/// An in-process [`CampaignStore`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    campaigns: HashMap<CampaignId, CampaignRecord>,
    active: Option<CampaignId>,
    next_id: u64,
}

impl MemoryStore {
    /// Creates an empty store with no active campaign.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a campaign, assigning it a fresh id.
    ///
    /// The first campaign inserted becomes the active one.
    pub fn add(&mut self, mut record: CampaignRecord) -> CampaignId {
        let id = CampaignId(self.next_id);
        self.next_id += 1;
        record.id = id;
        self.campaigns.insert(id, record);
        if self.active.is_none() {
            self.active = Some(id);
        }
        id
    }

    /// Returns the number of stored campaigns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    /// Returns true if the store holds no campaigns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }

    /// Returns the active campaign id, if one is set.
    #[must_use]
    pub const fn active_id(&self) -> Option<CampaignId> {
        self.active
    }
}

impl CampaignStore for MemoryStore {
    fn active(&self) -> Result<CampaignRecord> {
        let id = self.active.ok_or_else(Error::no_active_campaign)?;
        self.campaigns
            .get(&id)
            .cloned()
            .ok_or_else(Error::no_active_campaign)
    }

    fn find_by_name(&self, name: &str) -> Result<CampaignRecord> {
        let mut matches = self.campaigns.values().filter(|c| c.name == name);
        let found = matches
            .next()
            .ok_or_else(|| Error::campaign_not_found(name))?;
        if matches.next().is_some() {
            return Err(Error::duplicate_campaign(name));
        }
        Ok(found.clone())
    }

    fn update(&mut self, campaign: &CampaignRecord) -> Result<()> {
        if !self.campaigns.contains_key(&campaign.id) {
            return Err(Error::campaign_not_found(&campaign.name));
        }
        self.campaigns.insert(campaign.id, campaign.clone());
        Ok(())
    }

    fn set_active(&mut self, id: CampaignId) -> Result<()> {
        if !self.campaigns.contains_key(&id) {
            return Err(Error::campaign_not_found(format!("{id}")));
        }
        self.active = Some(id);
        Ok(())
    }
}
