//! URL-encoded form payloads.
//!
//! Every field arrives as a raw string and defaults to empty so a missing
//! field reaches domain validation as "required" instead of failing
//! extraction. Conversion into domain drafts happens here so handlers only
//! branch on the validation outcome.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    FeedingDraft, FieldErrors, Puppy, PuppyChanges, PuppyDraft, Toy, ToyDraft,
};

/// `POST /puppies/new/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct PuppyForm {
    #[schema(example = "Rex")]
    pub name: String,
    #[schema(example = "Labrador")]
    pub breed: String,
    pub description: String,
    #[schema(example = "2")]
    pub age: String,
}

impl PuppyForm {
    /// Convert into a draft or per-field errors.
    pub fn validate(&self) -> Result<PuppyDraft, FieldErrors> {
        PuppyDraft::try_from_parts(&self.name, &self.breed, &self.description, &self.age)
    }
}

/// `POST /puppies/{id}/edit/`. The name is fixed once created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct PuppyEditForm {
    pub breed: String,
    pub description: String,
    pub age: String,
}

impl PuppyEditForm {
    /// Convert into changes or per-field errors.
    pub fn validate(&self) -> Result<PuppyChanges, FieldErrors> {
        PuppyChanges::try_from_parts(&self.breed, &self.description, &self.age)
    }
}

impl From<&Puppy> for PuppyEditForm {
    fn from(puppy: &Puppy) -> Self {
        Self {
            breed: puppy.breed.clone(),
            description: puppy.description.clone(),
            age: puppy.age.to_string(),
        }
    }
}

/// `POST /toys/new/` and `POST /toys/{id}/edit/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct ToyForm {
    #[schema(example = "Ball")]
    pub name: String,
    #[schema(example = "Red")]
    pub color: String,
}

impl ToyForm {
    /// Convert into a draft or per-field errors.
    pub fn validate(&self) -> Result<ToyDraft, FieldErrors> {
        ToyDraft::try_from_parts(&self.name, &self.color)
    }
}

impl From<&Toy> for ToyForm {
    fn from(toy: &Toy) -> Self {
        Self {
            name: toy.name.clone(),
            color: toy.color.clone(),
        }
    }
}

/// `POST /puppies/{id}/add_feeding/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct FeedingForm {
    #[schema(example = "2024-03-14")]
    pub date: String,
    #[schema(example = "B")]
    pub meal: String,
}

impl FeedingForm {
    /// Convert into a draft; callers drop invalid feedings.
    pub fn validate(&self) -> Result<FeedingDraft, FieldErrors> {
        FeedingDraft::try_from_parts(&self.date, &self.meal)
    }
}

/// `POST /accounts/signup/`.
#[derive(Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SignupForm {
    pub username: String,
    #[schema(format = Password)]
    pub password1: String,
    #[schema(format = Password)]
    pub password2: String,
}

/// `POST /accounts/login/`.
#[derive(Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    #[schema(format = Password)]
    pub password: String,
    /// Local path to continue to after logging in.
    pub next: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Meal, PuppyId, UserId};
    use rstest::rstest;

    fn decode<T: for<'de> Deserialize<'de>>(body: &str) -> T {
        serde_urlencoded::from_str(body).expect("decode form")
    }

    #[rstest]
    fn missing_fields_decode_as_empty_and_fail_validation() {
        let form: PuppyForm = decode("name=Rex");
        assert_eq!(form.breed, "");

        let errors = form.validate().expect_err("breed and age are required");
        assert!(errors.get("breed").is_some());
        assert!(errors.get("age").is_some());
        assert!(errors.get("name").is_none());
    }

    #[rstest]
    fn feeding_form_yields_draft() {
        let form: FeedingForm = decode("date=2024-03-14&meal=S");
        let draft = form.validate().expect("valid feeding");
        assert_eq!(draft.meal, Meal::Snack);
    }

    #[rstest]
    fn edit_form_prefills_from_puppy() {
        let puppy = Puppy {
            id: PuppyId(4),
            owner: UserId::random(),
            name: "Rex".to_owned(),
            breed: "Labrador".to_owned(),
            description: "Good boy".to_owned(),
            age: 2,
        };
        let form = PuppyEditForm::from(&puppy);
        assert_eq!(form.age, "2");
        assert_eq!(form.validate().expect("prefill is valid").breed, "Labrador");
    }

    #[rstest]
    fn login_next_is_optional() {
        let form: LoginForm = decode("username=ada&password=pw");
        assert!(form.next.is_none());
        let form: LoginForm = decode("username=ada&password=pw&next=%2Ftoys%2F");
        assert_eq!(form.next.as_deref(), Some("/toys/"));
    }
}
