//! Shell commands and their replies.
//!
//! Field order in the command structs is the order serialized into `args`,
//! and therefore the order covered by the signature.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use sharefinder_core::Symbol;

/// Column index of the shares-held figure in a `holdings` reply.
pub const SHARES_COLUMN: u32 = 14;

/// `fund --ticker=SYM`: resolve a ticker to a filer id.
#[derive(Debug, Serialize)]
pub struct FundCommand {
    command: String,
}

impl FundCommand {
    pub fn new(symbol: &Symbol) -> Self {
        Self {
            command: format!("fund --ticker={symbol}"),
        }
    }
}

/// `holdings` for one filer, restricted to [`SHARES_COLUMN`].
#[derive(Debug, Serialize)]
pub struct HoldingsCommand {
    command: &'static str,
    filer_ids: [FilerId; 1],
    columns: [u32; 1],
}

impl HoldingsCommand {
    pub fn new(filer_id: FilerId) -> Self {
        Self {
            command: "holdings",
            filer_ids: [filer_id],
            columns: [SHARES_COLUMN],
        }
    }
}

/// Filer identifier as the shell returned it; echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilerId {
    Number(u64),
    Text(String),
}

impl FilerId {
    /// Zero and blank ids mean the ticker is unknown to the shell.
    fn is_usable(&self) -> bool {
        match self {
            Self::Number(n) => *n > 0,
            Self::Text(s) => !s.trim().is_empty(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FundReply {
    #[serde(default)]
    filer_id: Option<Value>,
}

impl FundReply {
    /// The filer id, if present, well-typed and non-empty.
    pub fn filer_id(self) -> Option<FilerId> {
        self.filer_id
            .and_then(|v| serde_json::from_value::<FilerId>(v).ok())
            .filter(FilerId::is_usable)
    }
}

/// First cell of the first row of a `holdings` reply.
pub fn first_cell(body: &Value) -> Option<&Value> {
    body.as_array()?.first()?.as_array()?.first()
}
