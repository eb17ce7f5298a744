use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: &'static str,
    pub email: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Cash,
    Bank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Account {
    pub id: i64,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: AccountKind,
    pub balance: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: i64,
    pub description: &'static str,
}

pub static USERS: [User; 2] = [
    User {
        id: 1,
        name: "Alice",
        email: "alice@example.com",
    },
    User {
        id: 2,
        name: "Bob",
        email: "bob@example.com",
    },
];

pub static ACCOUNTS: [Account; 2] = [
    Account {
        id: 1,
        name: "現金",
        kind: AccountKind::Cash,
        balance: 10_000,
    },
    Account {
        id: 2,
        name: "銀行",
        kind: AccountKind::Bank,
        balance: 50_000,
    },
];

pub static TRANSACTIONS: [Transaction; 2] = [
    Transaction {
        id: 1,
        kind: TransactionKind::Expense,
        amount: 500,
        description: "午餐",
    },
    Transaction {
        id: 2,
        kind: TransactionKind::Income,
        amount: 30_000,
        description: "薪水",
    },
];
