use super::error::{StoreError, StoreResult};

// Which (user, target) relation a uniqueness check is guarding.
pub enum Conflict {
    Favorite,
    CartEntry,
    Subscription,
}

pub fn validate_amount(amount: i32) -> StoreResult<()> {
    if amount < 1 {
        return Err(StoreError::AmountTooSmall);
    }
    Ok(())
}

pub fn validate_cooking_time(cooking_time: i32) -> StoreResult<()> {
    if cooking_time < 1 {
        return Err(StoreError::CookingTimeTooSmall);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> StoreResult<()> {
    if email.trim().is_empty() {
        return Err(StoreError::EmailMissing);
    }
    Ok(())
}

pub fn validate_subscription(user: i32, author: i32) -> StoreResult<()> {
    if user == author {
        return Err(StoreError::SelfSubscription);
    }
    Ok(())
}

pub fn validate_unique(existing_rows: i64, conflict: Conflict) -> StoreResult<()> {
    if existing_rows > 0 {
        return Err(match conflict {
            Conflict::Favorite => StoreError::AlreadyFavorited,
            Conflict::CartEntry => StoreError::AlreadyInCart,
            Conflict::Subscription => StoreError::AlreadySubscribed,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_below_one_is_rejected() {
        assert!(matches!(validate_amount(0), Err(StoreError::AmountTooSmall)));
        assert!(matches!(validate_amount(-3), Err(StoreError::AmountTooSmall)));
        assert!(validate_amount(1).is_ok());
    }

    #[test]
    fn cooking_time_below_one_is_rejected() {
        assert!(matches!(
            validate_cooking_time(0),
            Err(StoreError::CookingTimeTooSmall)
        ));
        assert!(validate_cooking_time(45).is_ok());
    }

    #[test]
    fn empty_email_is_rejected() {
        assert!(matches!(validate_email(""), Err(StoreError::EmailMissing)));
        assert!(matches!(validate_email("   "), Err(StoreError::EmailMissing)));
        assert!(validate_email("cook@example.com").is_ok());
    }

    #[test]
    fn self_subscription_is_rejected() {
        assert!(matches!(
            validate_subscription(7, 7),
            Err(StoreError::SelfSubscription)
        ));
        assert!(validate_subscription(7, 8).is_ok());
    }

    #[test]
    fn second_identical_pair_is_rejected() {
        assert!(validate_unique(0, Conflict::Favorite).is_ok());
        assert!(matches!(
            validate_unique(1, Conflict::Favorite),
            Err(StoreError::AlreadyFavorited)
        ));
        assert!(matches!(
            validate_unique(1, Conflict::CartEntry),
            Err(StoreError::AlreadyInCart)
        ));
        assert!(matches!(
            validate_unique(1, Conflict::Subscription),
            Err(StoreError::AlreadySubscribed)
        ));
    }

    #[test]
    fn rejections_carry_descriptive_messages() {
        assert_eq!(
            StoreError::AmountTooSmall.to_string(),
            "amount cannot be less than 1"
        );
        assert_eq!(
            StoreError::SelfSubscription.to_string(),
            "subscribing to yourself is not allowed"
        );
        assert_eq!(
            StoreError::NotFound {
                entity: "recipe",
                id: 12
            }
            .to_string(),
            "no recipe with id 12"
        );
    }
}
