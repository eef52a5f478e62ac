//! Toys shared by every user's puppies.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::{text_field, FieldErrors};

/// Maximum length of a toy name.
pub const TOY_NAME_MAX: usize = 50;
/// Maximum length of a toy colour.
pub const TOY_COLOR_MAX: usize = 20;

/// Database identifier for a toy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct ToyId(pub i64);

impl fmt::Display for ToyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A toy that can be given to any number of puppies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Toy {
    #[schema(value_type = i64, example = 4)]
    pub id: ToyId,
    #[schema(example = "Ball")]
    pub name: String,
    #[schema(example = "red")]
    pub color: String,
}

/// Validated toy fields, used for both creation and update.
///
/// # Examples
/// ```
/// use puppy_collector::domain::ToyDraft;
///
/// let draft = ToyDraft::try_from_parts(" Ball ", "red").unwrap();
/// assert_eq!(draft.name, "Ball");
///
/// let errors = ToyDraft::try_from_parts("", "red").unwrap_err();
/// assert!(errors.get("name").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToyDraft {
    pub name: String,
    pub color: String,
}

impl ToyDraft {
    /// Validate raw form text into a draft.
    pub fn try_from_parts(name: &str, color: &str) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();
        let name = text_field(&mut errors, "name", name, 1, TOY_NAME_MAX);
        let color = text_field(&mut errors, "color", color, 1, TOY_COLOR_MAX);
        errors.finish(|| Self { name, color })
    }
}
