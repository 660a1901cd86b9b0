use thiserror::Error;

/// Result type alias using PublisherError
pub type Result<T> = std::result::Result<T, PublisherError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable code for programmatic handling and for the
/// `err_code` field of `log_op_error!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Lookup
    NotFound,
    AlreadyExists,

    // Validation
    InvalidInput,
    InvalidTitle,
    InvalidSlug,
    MissingExternalId,
    TypeMismatch,

    // Versioning
    VersionConflict,
    Superseded,
    EmptyHistory,

    // Structural integrity
    IntegrityViolation,

    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidTitle => "ERR_INVALID_TITLE",
            ExErrorKind::InvalidSlug => "ERR_INVALID_SLUG",
            ExErrorKind::MissingExternalId => "ERR_MISSING_EXTERNAL_ID",
            ExErrorKind::TypeMismatch => "ERR_TYPE_MISMATCH",
            ExErrorKind::VersionConflict => "ERR_VERSION_CONFLICT",
            ExErrorKind::Superseded => "ERR_SUPERSEDED",
            ExErrorKind::EmptyHistory => "ERR_EMPTY_HISTORY",
            ExErrorKind::IntegrityViolation => "ERR_INTEGRITY_VIOLATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus whatever context was known where the
/// error surfaced. Built from a [`PublisherError`] via `From`.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    edition_id: Option<String>,
    version: Option<u32>,
    message: String,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            edition_id: None,
            version: None,
            message: String::new(),
        }
    }

    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Content item, user, authority or service id
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    pub fn with_edition_id(mut self, id: impl Into<String>) -> Self {
        self.edition_id = Some(id.into());
        self
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn edition_id(&self) -> Option<&str> {
        self.edition_id.as_deref()
    }

    pub fn version(&self) -> Option<u32> {
        self.version
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(edition_id) = &self.edition_id {
            write!(f, " (edition_id: {})", edition_id)?;
        }
        if let Some(version) = self.version {
            write!(f, " (version: {})", version)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for publisher operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PublisherError {
    // ===== Lookup Errors =====
    #[error("Content item not found: {content_item_id}")]
    ContentItemNotFound { content_item_id: String },

    #[error("No content item with slug: {slug}")]
    SlugNotFound { slug: String },

    #[error("Edition not found: {edition_id}")]
    EditionNotFound { edition_id: String },

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: String },

    #[error("Local authority not found: {snac}")]
    LocalAuthorityNotFound { snac: String },

    #[error("Local service not found for LGSL code {lgsl_code}")]
    LocalServiceNotFound { lgsl_code: u32 },

    /// Entity already exists (duplicate id, SNAC or LGSL code)
    #[error("Entity already exists: {entity_id}")]
    AlreadyExists { entity_id: String },

    #[error("Slug already in use: {slug}")]
    SlugAlreadyExists { slug: String },

    // ===== Validation Errors =====
    /// The owning content item has no panopticon id, so none of its
    /// editions may be persisted
    #[error("Content item {slug} has no panopticon id")]
    MissingPanopticonId { slug: String },

    #[error("Invalid title: {reason}")]
    InvalidTitle { reason: String },

    #[error("Invalid slug: {reason}")]
    InvalidSlug { reason: String },

    #[error("Invalid part {part_id} in edition {edition_id}: {reason}")]
    InvalidPart {
        edition_id: String,
        part_id: String,
        reason: String,
    },

    #[error("Duplicate part slug {slug} in edition {edition_id}")]
    DuplicatePartSlug { edition_id: String, slug: String },

    #[error("Edition {edition_id} belongs to {edition_item_id}, not {content_item_id}")]
    EditionItemMismatch {
        edition_id: String,
        edition_item_id: String,
        content_item_id: String,
    },

    #[error("Edition {edition_id} is a {edition_kind} but its item is a {item_kind}")]
    DetailsKindMismatch {
        edition_id: String,
        edition_kind: String,
        item_kind: String,
    },

    // ===== Versioning Errors =====
    #[error(
        "Version {version_number} of content item {content_item_id} must be greater than {latest_version}"
    )]
    VersionNotMonotonic {
        content_item_id: String,
        version_number: u32,
        latest_version: u32,
    },

    /// A newer edition of the same item exists
    #[error("Edition {edition_id} has been superseded by version {latest_version}")]
    EditionSuperseded {
        edition_id: String,
        latest_version: u32,
    },

    #[error("Content item {content_item_id} has no editions")]
    NoEditions { content_item_id: String },

    // ===== Integrity Errors =====
    #[error("Content item {content_item_id} edition_ids contains unknown edition: {edition_id}")]
    EditionListContainsUnknownId {
        content_item_id: String,
        edition_id: String,
    },

    #[error("Edition {edition_id} has content_item_id={edition_item_id} but is listed by {owner_item_id}")]
    MembershipInconsistent {
        edition_id: String,
        edition_item_id: String,
        owner_item_id: String,
    },

    // ===== Generic Errors =====
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PublisherError {
    /// Whether the error describes an edition that fails validation, as
    /// opposed to a lookup or storage failure
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PublisherError::MissingPanopticonId { .. }
                | PublisherError::InvalidTitle { .. }
                | PublisherError::InvalidSlug { .. }
                | PublisherError::InvalidPart { .. }
                | PublisherError::DuplicatePartSlug { .. }
                | PublisherError::EditionItemMismatch { .. }
                | PublisherError::DetailsKindMismatch { .. }
        )
    }
}

impl From<PublisherError> for ExError {
    fn from(err: PublisherError) -> Self {
        let message = err.to_string();
        match err {
            PublisherError::ContentItemNotFound { content_item_id } => {
                ExError::new(ExErrorKind::NotFound).with_entity_id(content_item_id)
            }
            PublisherError::SlugNotFound { slug } => {
                ExError::new(ExErrorKind::NotFound).with_entity_id(slug)
            }
            PublisherError::EditionNotFound { edition_id } => {
                ExError::new(ExErrorKind::NotFound).with_edition_id(edition_id)
            }
            PublisherError::UserNotFound { user_id } => {
                ExError::new(ExErrorKind::NotFound).with_entity_id(user_id)
            }
            PublisherError::LocalAuthorityNotFound { snac } => {
                ExError::new(ExErrorKind::NotFound).with_entity_id(snac)
            }
            PublisherError::LocalServiceNotFound { lgsl_code } => {
                ExError::new(ExErrorKind::NotFound).with_entity_id(lgsl_code.to_string())
            }
            PublisherError::AlreadyExists { entity_id } => {
                ExError::new(ExErrorKind::AlreadyExists).with_entity_id(entity_id)
            }
            PublisherError::SlugAlreadyExists { slug } => {
                ExError::new(ExErrorKind::AlreadyExists).with_entity_id(slug)
            }
            PublisherError::MissingPanopticonId { slug } => {
                ExError::new(ExErrorKind::MissingExternalId).with_entity_id(slug)
            }
            PublisherError::InvalidTitle { .. } => ExError::new(ExErrorKind::InvalidTitle),
            PublisherError::InvalidSlug { .. } => ExError::new(ExErrorKind::InvalidSlug),
            PublisherError::InvalidPart {
                edition_id,
                part_id,
                ..
            } => ExError::new(ExErrorKind::InvalidInput)
                .with_edition_id(edition_id)
                .with_entity_id(part_id),
            PublisherError::DuplicatePartSlug { edition_id, .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_edition_id(edition_id)
            }
            PublisherError::EditionItemMismatch {
                edition_id,
                content_item_id,
                ..
            } => ExError::new(ExErrorKind::IntegrityViolation)
                .with_edition_id(edition_id)
                .with_entity_id(content_item_id),
            PublisherError::DetailsKindMismatch { edition_id, .. } => {
                ExError::new(ExErrorKind::TypeMismatch).with_edition_id(edition_id)
            }
            PublisherError::VersionNotMonotonic {
                content_item_id,
                version_number,
                ..
            } => ExError::new(ExErrorKind::VersionConflict)
                .with_entity_id(content_item_id)
                .with_version(version_number),
            PublisherError::EditionSuperseded {
                edition_id,
                latest_version,
            } => ExError::new(ExErrorKind::Superseded)
                .with_edition_id(edition_id)
                .with_version(latest_version),
            PublisherError::NoEditions { content_item_id } => {
                ExError::new(ExErrorKind::EmptyHistory).with_entity_id(content_item_id)
            }
            PublisherError::EditionListContainsUnknownId {
                content_item_id,
                edition_id,
            } => ExError::new(ExErrorKind::IntegrityViolation)
                .with_entity_id(content_item_id)
                .with_edition_id(edition_id),
            PublisherError::MembershipInconsistent {
                edition_id,
                owner_item_id,
                ..
            } => ExError::new(ExErrorKind::IntegrityViolation)
                .with_entity_id(owner_item_id)
                .with_edition_id(edition_id),
            PublisherError::Internal { .. } => ExError::new(ExErrorKind::Internal),
        }
        .with_message(message)
    }
}
