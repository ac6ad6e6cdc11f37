use tripsplit_domain::{Money, Transfer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonBalance<'a> {
    pub name: &'a str,
    pub balance: Money,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettlementResult<'a> {
    pub balances: Vec<PersonBalance<'a>>,
    pub transfers: Vec<Transfer<'a>>,
}

impl SettlementResult<'_> {
    pub fn is_settled(&self) -> bool {
        self.transfers.is_empty()
    }
}

/// What one participant owes the payer for a single expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharePreview<'a> {
    pub debtor: &'a str,
    pub creditor: &'a str,
    pub amount: Money,
}
