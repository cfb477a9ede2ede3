//! Portfolio dataset model and ingest.
//!
//! A dataset is a list of customer records, each holding a list of funds.
//! Record shapes follow the upstream JSON convention: camelCase field
//! names, and optional members (`fundCode`, `holdings`, `sectors`,
//! `amount`) default to empty or zero so the engine can assume
//! fully-populated records.

use crate::core::error::DatasetError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::{fs, path::Path};
use tracing::debug;

/// A single fund held by a customer.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    #[serde(default)]
    pub fund_code: Option<String>,
    /// Monetary size of the position in the customer's currency.
    #[serde(default)]
    pub amount: f64,
    /// Security identifier to allocation weight.
    #[serde(default)]
    pub holdings: HashMap<String, f64>,
    /// Sector name to fractional exposure. Need not sum to 1.
    #[serde(default)]
    pub sectors: HashMap<String, f64>,
}

/// A customer record. `client_id` is the selection key; records without
/// one are tolerated in the dataset but cannot be selected.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub funds: Vec<Fund>,
}

/// An immutable collection of customer records, order preserved.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    customers: Vec<Customer>,
}

impl Dataset {
    pub fn new(customers: Vec<Customer>) -> Self {
        Dataset { customers }
    }

    /// Parses a dataset from a JSON string. The payload must be a
    /// non-empty JSON array of customer records.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let records = match value {
            serde_json::Value::Array(records) => records,
            _ => return Err(DatasetError::InvalidShape),
        };
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let customers = records
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<Customer>, _>>()?;
        debug!(count = customers.len(), "Parsed dataset");
        Ok(Dataset { customers })
    }

    /// Loads a dataset from a JSON file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let json = fs::read_to_string(path.as_ref()).map_err(|source| DatasetError::Io {
            path: path.as_ref().display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Selectable client ids, in dataset order. Records without a
    /// `clientId` are excluded.
    pub fn client_ids(&self) -> Vec<&str> {
        self.customers
            .iter()
            .filter_map(|c| c.client_id.as_deref())
            .collect()
    }

    /// Resolves a client id to its customer record. Returns the first
    /// match in dataset order when ids repeat.
    pub fn find_customer(&self, client_id: &str) -> Option<&Customer> {
        self.customers
            .iter()
            .find(|c| c.client_id.as_deref() == Some(client_id))
    }
}
