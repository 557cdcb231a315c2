//! Diesel schema for task persistence.

diesel::table! {
    /// Task records with server-assigned identity.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Free-form title.
        title -> Text,
        /// Free-form description.
        description -> Text,
        /// Free-form status label.
        status -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
