//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly.

diesel::table! {
    /// Registered accounts.
    users (id) {
        id -> Uuid,
        /// Unique login name (max 150 characters).
        username -> Varchar,
        /// PHC-format Argon2 hash.
        password_hash -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Puppies, each owned by exactly one user.
    puppies (id) {
        id -> Int8,
        user_id -> Uuid,
        name -> Varchar,
        breed -> Varchar,
        description -> Varchar,
        age -> Int4,
    }
}

diesel::table! {
    /// Toys shared across all users.
    toys (id) {
        id -> Int8,
        name -> Varchar,
        color -> Varchar,
    }
}

diesel::table! {
    /// Feeding log; `meal` holds a single-letter code.
    feedings (id) {
        id -> Int8,
        puppy_id -> Int8,
        date -> Date,
        meal -> Varchar,
    }
}

diesel::table! {
    /// Puppy to toy relation with a composite primary key.
    puppies_toys (puppy_id, toy_id) {
        puppy_id -> Int8,
        toy_id -> Int8,
    }
}

diesel::joinable!(puppies -> users (user_id));
diesel::joinable!(feedings -> puppies (puppy_id));
diesel::joinable!(puppies_toys -> puppies (puppy_id));
diesel::joinable!(puppies_toys -> toys (toy_id));

diesel::allow_tables_to_appear_in_same_query!(users, puppies, toys, feedings, puppies_toys);
