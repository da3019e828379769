use std::path::Path;

use serde::Deserialize;

use crate::account::{Account, Beneficiary};
use crate::errors::AccountsError;

pub trait AccountStore: Send + Sync {
    /// All accounts, in stable seed order. An empty store yields an
    /// empty vec.
    fn list_all(&self) -> Vec<Account>;

    fn find_by_id(&self, id: i64) -> Result<Account, AccountsError>;
}

/// Seed record without an id; the store assigns ids when it loads.
#[derive(Clone, Debug, Deserialize)]
pub struct AccountSeed {
    pub number: String,
    pub name: String,
    #[serde(default)]
    pub beneficiaries: Vec<Beneficiary>,
}

pub struct InMemoryAccountStore {
    accounts: Vec<Account>,
}

impl InMemoryAccountStore {
    pub fn new(seeds: Vec<AccountSeed>) -> Self {
        let accounts = seeds
            .into_iter()
            .enumerate()
            .map(|(id, seed)| Account {
                id: id as i64,
                number: seed.number,
                name: seed.name,
                beneficiaries: seed.beneficiaries,
            })
            .collect();
        Self { accounts }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AccountsError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|err| {
            tracing::error!("failed to read accounts file {}: {}", path.display(), err);
            AccountsError::DataReadError(format!("failed to read {}", path.display()))
        })?;
        let seeds: Vec<AccountSeed> = serde_json::from_str(&data).map_err(|err| {
            tracing::error!("failed to parse accounts file {}: {}", path.display(), err);
            AccountsError::DataReadError(format!("failed to parse {}", path.display()))
        })?;
        Ok(Self::new(seeds))
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn list_all(&self) -> Vec<Account> {
        self.accounts.clone()
    }

    fn find_by_id(&self, id: i64) -> Result<Account, AccountsError> {
        self.accounts
            .iter()
            .find(|account| account.id == id)
            .cloned()
            .ok_or(AccountsError::AccountNotFound)
    }
}
