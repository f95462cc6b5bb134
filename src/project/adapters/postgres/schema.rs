//! Diesel schema for project and template persistence.

diesel::table! {
    /// Client project records.
    projects (id) {
        /// Project identifier.
        id -> Uuid,
        /// Owning client identifier.
        client_id -> Uuid,
        /// Source template, when the project was cloned from one.
        template_id -> Nullable<Uuid>,
        /// Project display name.
        #[max_length = 200]
        name -> Varchar,
        /// Work category.
        #[max_length = 50]
        kind -> Varchar,
        /// Lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Optional start date.
        start_date -> Nullable<Date>,
        /// Optional target date.
        target_date -> Nullable<Date>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Workflow template blueprints.
    workflow_templates (id) {
        /// Template identifier.
        id -> Uuid,
        /// Template display name.
        #[max_length = 100]
        name -> Varchar,
        /// Optional template description.
        description -> Nullable<Text>,
    }
}

diesel::table! {
    /// Stage columns within workflow templates.
    template_stages (id) {
        /// Template stage identifier.
        id -> Uuid,
        /// Owning template identifier.
        template_id -> Uuid,
        /// Stage display name.
        #[max_length = 100]
        name -> Varchar,
        /// Zero-based column position within the template.
        position -> Int4,
    }
}

diesel::table! {
    /// Task blueprints within template stages.
    template_tasks (id) {
        /// Template task identifier.
        id -> Uuid,
        /// Owning template stage identifier.
        stage_id -> Uuid,
        /// Task title.
        #[max_length = 200]
        title -> Varchar,
        /// Zero-based position within the owning stage.
        position -> Int4,
        /// Priority level.
        #[max_length = 20]
        priority -> Varchar,
    }
}

diesel::allow_tables_to_appear_in_same_query!(workflow_templates, template_stages, template_tasks);
