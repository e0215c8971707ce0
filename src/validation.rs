//! Input checks applied before a request reaches the car park.
//!
//! The car park trusts its callers to hand it non-blank names and well-formed
//! slot ids. [`CarParkClient`](crate::service::CarParkClient) runs these checks
//! on every request so that bad input is rejected without touching the actor.

use crate::domain::{SlotCategory, SlotId};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref STAFF_SLOT_ID: Regex = Regex::new(r"^S\d{2}$").unwrap();
    static ref VISITOR_SLOT_ID: Regex = Regex::new(r"^V\d{2}$").unwrap();
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Blank { field: &'static str },

    #[error("Invalid {category} slot ID {id:?}: expected {prefix} followed by two digits")]
    SlotIdPattern {
        id: String,
        category: SlotCategory,
        prefix: char,
    },

    #[error("Unknown slot type: {0}")]
    UnknownCategory(String),
}

/// Returns `value` trimmed, or an error naming `field` if nothing is left.
pub fn non_blank(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Blank { field });
    }
    Ok(trimmed.to_string())
}

/// Accepts `S00`..`S99` for staff slots and `V00`..`V99` for visitor slots.
pub fn slot_id_for(category: SlotCategory, id: &str) -> Result<SlotId, ValidationError> {
    let id = non_blank("Slot ID", id)?;
    let pattern = match category {
        SlotCategory::Staff => &*STAFF_SLOT_ID,
        SlotCategory::Visitor => &*VISITOR_SLOT_ID,
    };
    if !pattern.is_match(&id) {
        return Err(ValidationError::SlotIdPattern {
            id,
            category,
            prefix: category.prefix(),
        });
    }
    Ok(SlotId(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank_trims() {
        assert_eq!(non_blank("Owner name", "  Alice ").unwrap(), "Alice");
    }

    #[test]
    fn test_non_blank_rejects_whitespace() {
        assert_eq!(
            non_blank("Registration number", " \t "),
            Err(ValidationError::Blank {
                field: "Registration number"
            })
        );
    }

    #[test]
    fn test_slot_id_matches_category() {
        assert_eq!(slot_id_for(SlotCategory::Staff, "S01").unwrap().as_str(), "S01");
        assert_eq!(slot_id_for(SlotCategory::Visitor, " V42 ").unwrap().as_str(), "V42");
    }

    #[test]
    fn test_slot_id_rejects_wrong_shape() {
        for (category, id) in [
            (SlotCategory::Staff, "V01"),
            (SlotCategory::Staff, "S1"),
            (SlotCategory::Staff, "S001"),
            (SlotCategory::Visitor, "v01"),
            (SlotCategory::Visitor, "VAB"),
        ] {
            assert!(
                matches!(
                    slot_id_for(category, id),
                    Err(ValidationError::SlotIdPattern { .. })
                ),
                "{id} should be rejected for {category}"
            );
        }
    }

    #[test]
    fn test_slot_id_rejects_blank() {
        assert!(matches!(
            slot_id_for(SlotCategory::Staff, ""),
            Err(ValidationError::Blank { .. })
        ));
    }
}
