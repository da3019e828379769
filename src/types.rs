use serde::{Deserialize, Serialize};

use crate::account::Account;

pub const ACCOUNT_LIST_VIEW: &str = "accountList";
pub const ACCOUNT_DETAILS_VIEW: &str = "accountDetails";

/// A rendered model paired with the logical view it belongs to. The
/// view name selects the response shape; it carries no transport
/// detail.
#[derive(Clone, Debug, PartialEq)]
pub struct View<T> {
    pub model: T,
    pub name: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountList {
    pub accounts: Vec<Account>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountDetail {
    pub account: Account,
}
