//! Diesel schema for board persistence.

diesel::table! {
    /// Stage columns on project kanban boards.
    project_stages (id) {
        /// Stage identifier.
        id -> Uuid,
        /// Owning project identifier.
        project_id -> Uuid,
        /// Stage display name.
        #[max_length = 100]
        name -> Varchar,
        /// Zero-based column position within the project.
        position -> Int4,
    }
}

diesel::table! {
    /// Task cards owned by board stages.
    project_tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning project identifier.
        project_id -> Uuid,
        /// Owning stage identifier.
        stage_id -> Uuid,
        /// Task title.
        #[max_length = 200]
        title -> Varchar,
        /// Optional long-form description.
        description -> Nullable<Text>,
        /// Zero-based position within the owning stage.
        position -> Int4,
        /// Priority level.
        #[max_length = 20]
        priority -> Varchar,
        /// Optional due date (date-only).
        due_date -> Nullable<Date>,
        /// Blocked flag.
        is_blocked -> Bool,
        /// Optional blocked reason.
        blocked_reason -> Nullable<Text>,
        /// Client-portal visibility flag.
        visible_to_client -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(project_stages, project_tasks);
