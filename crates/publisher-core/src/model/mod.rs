pub mod action;
pub mod content_item;
pub mod edition;
pub mod local_service;
pub mod part;
pub mod user;

pub use action::{Action, ActionKind, ActionTrail};
pub use content_item::{ContentItem, ContentKind};
pub use edition::{
    AnswerDetails, Edition, EditionDetails, GuideDetails, LocalTransactionDetails,
    TransactionDetails, WorkflowState,
};
pub use local_service::{AuthorityTier, LocalAuthority, LocalService};
pub use part::Part;
pub use user::User;
