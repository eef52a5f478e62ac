//! Puppy records owned by a single user.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::feeding::Feeding;
use super::toy::Toy;
use super::user::UserId;
use super::validation::{integer_field, text_field, FieldErrors};

/// Maximum length of a puppy name or breed.
pub const PUPPY_NAME_MAX: usize = 100;
/// Maximum length of a puppy description.
pub const PUPPY_DESCRIPTION_MAX: usize = 250;
/// Oldest age accepted by the puppy forms.
pub const PUPPY_AGE_MAX: i32 = 100;

/// Database identifier for a puppy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct PuppyId(pub i64);

impl fmt::Display for PuppyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A puppy and its owner.
///
/// ## Invariants
/// - `owner` is fixed at creation and never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Puppy {
    #[schema(value_type = i64, example = 7)]
    pub id: PuppyId,
    #[serde(skip)]
    pub owner: UserId,
    #[schema(example = "Rex")]
    pub name: String,
    #[schema(example = "Labrador")]
    pub breed: String,
    pub description: String,
    #[schema(example = 2)]
    pub age: i32,
}

/// Validated fields for a new puppy.
///
/// # Examples
/// ```
/// use puppy_collector::domain::PuppyDraft;
///
/// let draft = PuppyDraft::try_from_parts("Rex", "Labrador", "", "2").unwrap();
/// assert_eq!(draft.age, 2);
///
/// let errors = PuppyDraft::try_from_parts("", "Labrador", "", "old").unwrap_err();
/// assert!(errors.get("name").is_some());
/// assert!(errors.get("age").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuppyDraft {
    pub name: String,
    pub breed: String,
    pub description: String,
    pub age: i32,
}

impl PuppyDraft {
    /// Validate raw form text into a draft.
    pub fn try_from_parts(
        name: &str,
        breed: &str,
        description: &str,
        age: &str,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();
        let name = text_field(&mut errors, "name", name, 1, PUPPY_NAME_MAX);
        let PuppyChanges {
            breed,
            description,
            age,
        } = changes(&mut errors, breed, description, age);
        errors.finish(|| Self {
            name,
            breed,
            description,
            age,
        })
    }
}

/// Validated fields accepted when editing a puppy; the name is not editable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuppyChanges {
    pub breed: String,
    pub description: String,
    pub age: i32,
}

impl PuppyChanges {
    /// Validate raw edit-form text; the name is not editable.
    pub fn try_from_parts(breed: &str, description: &str, age: &str) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();
        let value = changes(&mut errors, breed, description, age);
        errors.finish(|| value)
    }
}

fn changes(errors: &mut FieldErrors, breed: &str, description: &str, age: &str) -> PuppyChanges {
    PuppyChanges {
        breed: text_field(errors, "breed", breed, 1, PUPPY_NAME_MAX),
        description: text_field(errors, "description", description, 0, PUPPY_DESCRIPTION_MAX),
        age: integer_field(errors, "age", age, 0, PUPPY_AGE_MAX),
    }
}

/// Everything the detail page shows about one puppy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuppyDetail {
    pub puppy: Puppy,
    /// Newest first.
    pub feedings: Vec<Feeding>,
    pub toys: Vec<Toy>,
    /// Toys not yet given to this puppy.
    pub available_toys: Vec<Toy>,
    pub fed_for_today: bool,
}
