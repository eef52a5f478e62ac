//! Feeding log entries recorded against a puppy.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::puppy::PuppyId;
use super::validation::{FieldErrors, REQUIRED};

/// Accepted input formats for a feeding date, tried in order.
///
/// Two-digit years are tried before four-digit ones because `%Y` would
/// otherwise read `24` as the year 24.
pub const FEEDING_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y"];

/// Meal categories with their single-letter storage codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Meal {
    /// Stored as `B`.
    #[serde(rename = "B")]
    Breakfast,
    /// Stored as `L`.
    #[serde(rename = "L")]
    Lunch,
    /// Stored as `D`.
    #[serde(rename = "D")]
    Dinner,
    /// Stored as `S`; not counted towards `fed_for_today`.
    #[serde(rename = "S")]
    Snack,
}

impl Meal {
    /// Every meal in display order.
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Meals a puppy is expected to receive each day.
    pub const REGULAR: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// Single-letter storage code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Breakfast => "B",
            Self::Lunch => "L",
            Self::Dinner => "D",
            Self::Snack => "S",
        }
    }

    /// Human-readable name shown in meal pickers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        }
    }

    /// Parse a storage code.
    ///
    /// # Examples
    /// ```
    /// use puppy_collector::domain::Meal;
    ///
    /// assert_eq!(Meal::from_code("D"), Some(Meal::Dinner));
    /// assert_eq!(Meal::from_code("X"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|meal| meal.code() == code)
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Database identifier for a feeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FeedingId(pub i64);

/// A single recorded meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Feeding {
    #[schema(value_type = i64)]
    pub id: FeedingId,
    #[schema(value_type = i64)]
    pub puppy_id: PuppyId,
    #[schema(value_type = String, format = Date, example = "2024-03-14")]
    pub date: NaiveDate,
    pub meal: Meal,
}

/// Validated feeding fields; the puppy comes from the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedingDraft {
    pub date: NaiveDate,
    pub meal: Meal,
}

impl FeedingDraft {
    /// Validate the raw `date` and `meal` fields.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use puppy_collector::domain::{FeedingDraft, Meal};
    ///
    /// let draft = FeedingDraft::try_from_parts("03/14/24", "B").unwrap();
    /// assert_eq!(draft.date, NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
    /// assert_eq!(draft.meal, Meal::Breakfast);
    /// assert!(FeedingDraft::try_from_parts("2024-03-14", "X").is_err());
    /// ```
    pub fn try_from_parts(date: &str, meal: &str) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();
        let date = parse_date(&mut errors, date.trim());
        let meal = parse_meal(&mut errors, meal.trim());
        match (date, meal) {
            (Some(date), Some(meal)) if errors.is_empty() => Ok(Self { date, meal }),
            _ => Err(errors),
        }
    }
}

fn parse_date(errors: &mut FieldErrors, raw: &str) -> Option<NaiveDate> {
    if raw.is_empty() {
        errors.push("date", REQUIRED);
        return None;
    }
    let parsed = FEEDING_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok());
    if parsed.is_none() {
        errors.push("date", "Enter a valid date.");
    }
    parsed
}

fn parse_meal(errors: &mut FieldErrors, raw: &str) -> Option<Meal> {
    if raw.is_empty() {
        errors.push("meal", REQUIRED);
        return None;
    }
    let meal = Meal::from_code(raw);
    if meal.is_none() {
        errors.push(
            "meal",
            format!("Select a valid choice. {raw} is not one of the available choices."),
        );
    }
    meal
}

/// True once `feedings` holds at least one entry per regular meal for `today`.
pub fn fed_for_day(feedings: &[Feeding], today: NaiveDate) -> bool {
    feedings.iter().filter(|f| f.date == today).count() >= Meal::REGULAR.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[rstest]
    #[case("2024-03-14", day(2024, 3, 14))]
    #[case("03/14/2024", day(2024, 3, 14))]
    #[case("03/14/24", day(2024, 3, 14))]
    #[case(" 12/31/99 ", day(1999, 12, 31))]
    fn accepts_supported_date_formats(#[case] raw: &str, #[case] expected: NaiveDate) {
        let draft = FeedingDraft::try_from_parts(raw, "L").expect("valid feeding");
        assert_eq!(draft.date, expected);
    }

    #[rstest]
    #[case("", "B", "date")]
    #[case("14/03/2024", "B", "date")]
    #[case("2024-03-14", "X", "meal")]
    #[case("2024-03-14", "", "meal")]
    fn rejects_invalid_fields(#[case] date: &str, #[case] meal: &str, #[case] field: &str) {
        let errors = FeedingDraft::try_from_parts(date, meal).expect_err("invalid feeding");
        assert!(errors.get(field).is_some());
    }

    fn feeding(id: i64, date: NaiveDate, meal: Meal) -> Feeding {
        Feeding {
            id: FeedingId(id),
            puppy_id: PuppyId(1),
            date,
            meal,
        }
    }

    #[rstest]
    fn fed_for_day_counts_only_today() {
        let today = day(2024, 3, 14);
        let yesterday = day(2024, 3, 13);
        let mut feedings = vec![
            feeding(1, today, Meal::Breakfast),
            feeding(2, today, Meal::Lunch),
            feeding(3, yesterday, Meal::Dinner),
        ];
        assert!(!fed_for_day(&feedings, today));
        feedings.push(feeding(4, today, Meal::Snack));
        assert!(fed_for_day(&feedings, today));
    }

    #[rstest]
    fn meal_serialises_as_its_code() {
        let value = serde_json::to_value(Meal::Dinner).expect("serialise");
        assert_eq!(value, serde_json::json!("D"));
    }
}
