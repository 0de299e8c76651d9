//! Security classification and raw source tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Instrument classification for derived metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecurityType {
    /// Government of Ghana note or bond.
    GogBond,
    /// Government of Ghana treasury bill.
    Tbill,
    /// Corporate bond.
    Corporate,
}

impl SecurityType {
    /// Returns the canonical string form used in persisted records.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityType::GogBond => "GOG_BOND",
            SecurityType::Tbill => "TBILL",
            SecurityType::Corporate => "CORPORATE",
        }
    }

    /// Whether this type contributes to the government benchmark curve.
    #[must_use]
    pub fn is_government(&self) -> bool {
        matches!(self, SecurityType::GogBond | SecurityType::Tbill)
    }
}

impl fmt::Display for SecurityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The raw daily trade tables a run reads.
///
/// The variant order is the fixed processing order of a run; both GOG
/// tables classify as [`SecurityType::GogBond`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceTable {
    /// Newly issued GOG notes and bonds.
    NewGogNotesAndBonds,
    /// Previously issued GOG notes and bonds.
    OldGogNotesAndBonds,
    /// Treasury bills.
    TreasuryBills,
    /// Corporate bonds.
    Corporate,
}

impl SourceTable {
    /// All source tables in processing order.
    pub const ALL: [SourceTable; 4] = [
        SourceTable::NewGogNotesAndBonds,
        SourceTable::OldGogNotesAndBonds,
        SourceTable::TreasuryBills,
        SourceTable::Corporate,
    ];

    /// The government tables feeding the benchmark curve, in order.
    pub const GOVERNMENT: [SourceTable; 3] = [
        SourceTable::NewGogNotesAndBonds,
        SourceTable::OldGogNotesAndBonds,
        SourceTable::TreasuryBills,
    ];

    /// Returns the storage name of the table.
    #[must_use]
    pub fn table_name(&self) -> &'static str {
        match self {
            SourceTable::NewGogNotesAndBonds => "new_gog_notes_and_bonds",
            SourceTable::OldGogNotesAndBonds => "old_gog_notes_and_bonds",
            SourceTable::TreasuryBills => "treasury_bills",
            SourceTable::Corporate => "corporate_bonds",
        }
    }

    /// Returns the security type this table's rows classify as.
    #[must_use]
    pub fn security_type(&self) -> SecurityType {
        match self {
            SourceTable::NewGogNotesAndBonds | SourceTable::OldGogNotesAndBonds => {
                SecurityType::GogBond
            }
            SourceTable::TreasuryBills => SecurityType::Tbill,
            SourceTable::Corporate => SecurityType::Corporate,
        }
    }
}

impl fmt::Display for SourceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}
