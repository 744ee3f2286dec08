use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

// Write rejections reported back to the caller, plus the wrapped database
// error for everything else.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("amount cannot be less than 1")]
    AmountTooSmall,
    #[error("cooking time cannot be less than 1")]
    CookingTimeTooSmall,
    #[error("email is required")]
    EmailMissing,
    #[error("a user with email {0} already exists")]
    EmailTaken(String),
    #[error("subscribing to yourself is not allowed")]
    SelfSubscription,
    #[error("recipe is already in favorites")]
    AlreadyFavorited,
    #[error("recipe is already in the shopping cart")]
    AlreadyInCart,
    #[error("already subscribed to this author")]
    AlreadySubscribed,
    #[error("no {entity} with id {id}")]
    NotFound { entity: &'static str, id: i32 },
    #[error("no tag with slug {0}")]
    UnknownTagSlug(String),
    #[error(transparent)]
    Database(#[from] diesel::result::Error),
}
