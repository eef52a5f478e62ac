//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{feedings, puppies, puppies_toys, toys, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub username: &'a str,
    pub password_hash: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = puppies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PuppyRow {
    pub id: i64,
    pub user_id: Uuid,
    pub name: String,
    pub breed: String,
    pub description: String,
    pub age: i32,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = puppies)]
pub(crate) struct NewPuppyRow<'a> {
    pub user_id: Uuid,
    pub name: &'a str,
    pub breed: &'a str,
    pub description: &'a str,
    pub age: i32,
}

/// Editable puppy columns; name and owner are fixed after creation.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = puppies)]
pub(crate) struct PuppyUpdate<'a> {
    pub breed: &'a str,
    pub description: &'a str,
    pub age: i32,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = toys)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ToyRow {
    pub id: i64,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = toys)]
pub(crate) struct ToyValues<'a> {
    pub name: &'a str,
    pub color: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = feedings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FeedingRow {
    pub id: i64,
    pub puppy_id: i64,
    pub date: NaiveDate,
    pub meal: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = feedings)]
pub(crate) struct NewFeedingRow<'a> {
    pub puppy_id: i64,
    pub date: NaiveDate,
    pub meal: &'a str,
}

#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = puppies_toys)]
pub(crate) struct PuppyToyRow {
    pub puppy_id: i64,
    pub toy_id: i64,
}
