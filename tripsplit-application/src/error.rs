use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,
    #[error("amount '{0}' is not a number")]
    Unparsable(String),
    #[error("amount must be greater than zero")]
    NotPositive,
    #[error("amount must not exceed {max}")]
    TooLarge { max: i64 },
    #[error("amount has more than {scale} decimal places")]
    TooPrecise { scale: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseValidationError {
    #[error("expense {expense_id} has no description")]
    MissingDescription { expense_id: String },
    #[error("expense {expense_id}: {source}")]
    InvalidAmount {
        expense_id: String,
        #[source]
        source: AmountError,
    },
    #[error("expense {expense_id} is not split among anyone")]
    EmptySplit { expense_id: String },
    #[error("expense {expense_id} was paid by '{name}', who is not a trip member")]
    UnknownPayer { expense_id: String, name: String },
    #[error("expense {expense_id} is split with '{name}', who is not a trip member")]
    UnknownParticipant { expense_id: String, name: String },
}

impl ExpenseValidationError {
    pub fn expense_id(&self) -> &str {
        match self {
            Self::MissingDescription { expense_id }
            | Self::InvalidAmount { expense_id, .. }
            | Self::EmptySplit { expense_id }
            | Self::UnknownPayer { expense_id, .. }
            | Self::UnknownParticipant { expense_id, .. } => expense_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripValidationError {
    #[error("trip name is empty")]
    MissingName,
    #[error("trip has no members")]
    NoMembers,
    #[error("member #{position} has an empty name")]
    BlankMember { position: usize },
    #[error(transparent)]
    Expense(#[from] ExpenseValidationError),
}

#[derive(Debug, Error)]
pub enum TripSourceError {
    #[error("trip {0} not found")]
    NotFound(String),
    #[error("failed to read trip data: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed trip data: {0}")]
    Malformed(String),
}
