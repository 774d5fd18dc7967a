//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the migrations exactly; `diesel
//! print-schema` can regenerate them from a live database.

diesel::table! {
    /// User accounts.
    users (id) {
        /// Primary key, supplied by the caller.
        id -> Integer,
        first_name -> Text,
        last_name -> Text,
        age -> Integer,
        email -> Text,
        role -> Text,
        phone -> Text,
    }
}

diesel::table! {
    /// Work orders placed by customers.
    orders (id) {
        /// Primary key, store-assigned when omitted on insert.
        id -> Integer,
        name -> Text,
        description -> Text,
        start_date -> Date,
        end_date -> Date,
        address -> Text,
        price -> Integer,
        /// Reference to `users.id`; enforcement is a deployment choice.
        customer_id -> Integer,
        /// Reference to `users.id`; enforcement is a deployment choice.
        executor_id -> Integer,
    }
}

diesel::table! {
    /// Executor offers against orders.
    offers (id) {
        /// Primary key, supplied by the caller.
        id -> Integer,
        /// Reference to `orders.id`; enforcement is a deployment choice.
        order_id -> Integer,
        /// Reference to `users.id`; enforcement is a deployment choice.
        executor_id -> Integer,
    }
}
