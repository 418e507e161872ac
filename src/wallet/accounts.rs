use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Address of the first seeded participant (the local user)
pub const PRIMARY_ADDRESS: &str = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa";
/// Address of the second seeded participant
pub const SECONDARY_ADDRESS: &str = "18h23j0dye2e082y3dfhd383h03hof323w";

/// An address and the balance it starts the run with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedAccount {
    pub label: String,
    pub address: String,
    pub balance: Decimal,
}

impl SeedAccount {
    pub fn new(label: &str, address: &str, balance: Decimal) -> SeedAccount {
        SeedAccount {
            label: label.to_string(),
            address: address.to_string(),
            balance,
        }
    }
}

/// The two participants every fresh ledger starts with.
pub fn default_seed_accounts() -> Vec<SeedAccount> {
    vec![
        SeedAccount::new("You", PRIMARY_ADDRESS, Decimal::from(6931)),
        SeedAccount::new("User 2", SECONDARY_ADDRESS, Decimal::ZERO),
    ]
}
