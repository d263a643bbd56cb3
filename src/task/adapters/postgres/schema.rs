//! Diesel schema for task persistence.

diesel::table! {
    /// Task records with their stored classification snapshot.
    tasks (id) {
        /// Internal task identifier.
        id -> Uuid,
        /// Owning user, if any.
        owner_id -> Nullable<Uuid>,
        /// Task title.
        #[max_length = 100]
        title -> Varchar,
        /// Optional description.
        #[max_length = 500]
        description -> Nullable<Varchar>,
        /// Importance declared by the owner.
        is_important -> Bool,
        /// Urgency at the last classification.
        is_urgent -> Bool,
        /// Quadrant label `Q1`..`Q4`.
        #[max_length = 2]
        quadrant -> Varchar,
        /// Completion flag.
        completed -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Completion timestamp.
        completed_at -> Nullable<Timestamptz>,
        /// Optional deadline.
        deadline_at -> Nullable<Timestamptz>,
    }
}
