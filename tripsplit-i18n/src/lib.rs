#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
pub mod strings {
    pub const TRIP: &str = "旅行";
    pub const MEMBERS: &str = "メンバー";
    pub const EXPENSES: &str = "支出";
    pub const NO_EXPENSES_YET: &str = "支出はまだありません";
    pub const SETTLEMENTS: &str = "清算";
    pub const ALL_SETTLED: &str = "清算済み";
    pub const BALANCES: &str = "収支";
    pub const SETTLEMENT_FAILED: &str = "清算の計算に失敗しました";
}

#[cfg(not(feature = "ja"))]
pub mod strings {
    pub const TRIP: &str = "Trip";
    pub const MEMBERS: &str = "Members";
    pub const EXPENSES: &str = "Expenses";
    pub const NO_EXPENSES_YET: &str = "No expenses yet";
    pub const SETTLEMENTS: &str = "Settlements";
    pub const ALL_SETTLED: &str = "All settled";
    pub const BALANCES: &str = "Balances";
    pub const SETTLEMENT_FAILED: &str = "Settlement calculation failed";
}

pub use strings::*;

#[cfg(feature = "ja")]
pub fn transfer_line(
    debtor: impl std::fmt::Display,
    creditor: impl std::fmt::Display,
    amount: impl std::fmt::Display,
) -> String {
    format!("{debtor} → {creditor}: {amount}")
}

#[cfg(not(feature = "ja"))]
pub fn transfer_line(
    debtor: impl std::fmt::Display,
    creditor: impl std::fmt::Display,
    amount: impl std::fmt::Display,
) -> String {
    format!("{debtor} pays {amount} to {creditor}")
}

#[cfg(feature = "ja")]
pub fn share_line(
    debtor: impl std::fmt::Display,
    creditor: impl std::fmt::Display,
    amount: impl std::fmt::Display,
) -> String {
    format!("{debtor} は {creditor} に {amount} の借り")
}

#[cfg(not(feature = "ja"))]
pub fn share_line(
    debtor: impl std::fmt::Display,
    creditor: impl std::fmt::Display,
    amount: impl std::fmt::Display,
) -> String {
    format!("{debtor} owes {creditor} {amount}")
}

#[cfg(feature = "ja")]
pub fn expense_line(
    description: impl std::fmt::Display,
    amount: impl std::fmt::Display,
    payer: impl std::fmt::Display,
    split: impl std::fmt::Display,
) -> String {
    format!("{description} - {amount}（支払: {payer}、割り勘: {split}）")
}

#[cfg(not(feature = "ja"))]
pub fn expense_line(
    description: impl std::fmt::Display,
    amount: impl std::fmt::Display,
    payer: impl std::fmt::Display,
    split: impl std::fmt::Display,
) -> String {
    format!("{description} - {amount} paid by {payer} (Split: {split})")
}

#[cfg(feature = "ja")]
pub fn missing_trip_name() -> &'static str {
    "旅行名を入力してください"
}

#[cfg(not(feature = "ja"))]
pub fn missing_trip_name() -> &'static str {
    "Please enter a trip name"
}

#[cfg(feature = "ja")]
pub fn no_members() -> &'static str {
    "メンバーを1人以上追加してください"
}

#[cfg(not(feature = "ja"))]
pub fn no_members() -> &'static str {
    "Add at least one person"
}

#[cfg(feature = "ja")]
pub fn blank_member(position: usize) -> String {
    format!("{position} 番目のメンバー名が空です")
}

#[cfg(not(feature = "ja"))]
pub fn blank_member(position: usize) -> String {
    format!("Member #{position} has no name")
}

#[cfg(feature = "ja")]
pub fn missing_description(expense_id: impl std::fmt::Display) -> String {
    format!("支出 {expense_id} の内容を入力してください")
}

#[cfg(not(feature = "ja"))]
pub fn missing_description(expense_id: impl std::fmt::Display) -> String {
    format!("Please enter a description for expense {expense_id}")
}

#[cfg(feature = "ja")]
pub fn invalid_amount(
    expense_id: impl std::fmt::Display,
    detail: impl std::fmt::Display,
) -> String {
    format!("支出 {expense_id} の金額が不正です: {detail}")
}

#[cfg(not(feature = "ja"))]
pub fn invalid_amount(
    expense_id: impl std::fmt::Display,
    detail: impl std::fmt::Display,
) -> String {
    format!("Expense {expense_id} has an invalid amount: {detail}")
}

#[cfg(feature = "ja")]
pub fn empty_split(expense_id: impl std::fmt::Display) -> String {
    format!("支出 {expense_id} の割り勘メンバーを1人以上選択してください")
}

#[cfg(not(feature = "ja"))]
pub fn empty_split(expense_id: impl std::fmt::Display) -> String {
    format!("Select at least one member to split expense {expense_id}")
}

#[cfg(feature = "ja")]
pub fn unknown_member(expense_id: impl std::fmt::Display, name: impl std::fmt::Display) -> String {
    format!("支出 {expense_id} のメンバー '{name}' は旅行に参加していません")
}

#[cfg(not(feature = "ja"))]
pub fn unknown_member(expense_id: impl std::fmt::Display, name: impl std::fmt::Display) -> String {
    format!("Expense {expense_id} refers to '{name}', who is not on this trip")
}
