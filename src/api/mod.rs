//! REST API module.
//!
//! Contains the diagnostic routes and the generic collection handlers.

mod diagnostics;
mod documents;

pub use diagnostics::*;
pub use documents::*;

use serde::{Deserialize, Serialize};

/// Response body of a successful create.
#[derive(Debug, Serialize, Deserialize)]
pub struct InsertedId {
    pub inserted_id: String,
}
