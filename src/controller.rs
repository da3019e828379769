use std::sync::Arc;

use crate::account::store::AccountStore;
use crate::account::Beneficiary;
use crate::errors::AccountsError;
use crate::types::{AccountDetail, AccountList, View, ACCOUNT_DETAILS_VIEW, ACCOUNT_LIST_VIEW};

/// Read-only request handling over an account store. The store is
/// shared; other handlers may read it concurrently.
pub struct AccountController {
    store: Arc<dyn AccountStore>,
}

impl AccountController {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    pub fn account_list(&self) -> View<AccountList> {
        View {
            model: AccountList {
                accounts: self.store.list_all(),
            },
            name: ACCOUNT_LIST_VIEW,
        }
    }

    pub fn account_details(&self, id: i64) -> Result<View<AccountDetail>, AccountsError> {
        let account = self.store.find_by_id(id)?;
        Ok(View {
            model: AccountDetail { account },
            name: ACCOUNT_DETAILS_VIEW,
        })
    }

    pub fn beneficiary(&self, account_id: i64, name: &str) -> Result<Beneficiary, AccountsError> {
        let account = self.store.find_by_id(account_id)?;
        account
            .beneficiary(name)
            .cloned()
            .ok_or(AccountsError::BeneficiaryNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::money::Percentage;
    use crate::account::store::{AccountSeed, InMemoryAccountStore};

    fn single_account_controller() -> AccountController {
        let store = InMemoryAccountStore::new(vec![AccountSeed {
            number: "123456789".to_string(),
            name: "Keith and Keri Donald".to_string(),
            beneficiaries: vec![
                Beneficiary {
                    name: "Annabelle".to_string(),
                    allocation_percentage: "50%".parse().unwrap(),
                    savings: "4.00".parse().unwrap(),
                },
                Beneficiary {
                    name: "Corgan".to_string(),
                    allocation_percentage: "50%".parse().unwrap(),
                    savings: "4.00".parse().unwrap(),
                },
            ],
        }]);
        AccountController::new(Arc::new(store))
    }

    #[test]
    fn list_populates_accounts_and_selects_list_view() {
        let view = single_account_controller().account_list();
        assert_eq!(view.model.accounts.len(), 1);
        assert_eq!(view.model.accounts[0].id, 0);
        assert_eq!(view.name, "accountList");
    }

    #[test]
    fn list_of_empty_store_is_empty_with_same_view() {
        let controller = AccountController::new(Arc::new(InMemoryAccountStore::new(vec![])));
        let view = controller.account_list();
        assert!(view.model.accounts.is_empty());
        assert_eq!(view.name, "accountList");
    }

    #[test]
    fn details_populates_account_and_selects_details_view() {
        let view = single_account_controller().account_details(0).unwrap();
        assert_eq!(view.model.account.id, 0);
        assert_eq!(view.model.account.name, "Keith and Keri Donald");
        assert_eq!(view.name, "accountDetails");
    }

    #[test]
    fn details_of_missing_account_propagates_not_found() {
        let result = single_account_controller().account_details(99);
        assert_eq!(result.unwrap_err(), AccountsError::AccountNotFound);
    }

    #[test]
    fn beneficiary_by_account_and_name() {
        let beneficiary = single_account_controller().beneficiary(0, "Corgan").unwrap();
        assert_eq!(
            beneficiary.allocation_percentage,
            Percentage::new(5000).unwrap()
        );
    }

    #[test]
    fn beneficiary_misses_are_distinguished() {
        let controller = single_account_controller();
        assert_eq!(
            controller.beneficiary(99, "Corgan").unwrap_err(),
            AccountsError::AccountNotFound
        );
        assert_eq!(
            controller.beneficiary(0, "Nobody").unwrap_err(),
            AccountsError::BeneficiaryNotFound
        );
    }
}
