use serde::{Deserialize, Serialize};

use self::money::{MonetaryAmount, Percentage};

pub mod money;
pub mod store;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub number: String,
    pub name: String,
    pub beneficiaries: Vec<Beneficiary>,
}

impl Account {
    pub fn beneficiary(&self, name: &str) -> Option<&Beneficiary> {
        self.beneficiaries.iter().find(|b| b.name == name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beneficiary {
    pub name: String,
    pub allocation_percentage: Percentage,
    pub savings: MonetaryAmount,
}
