//! Owner account service

use villadesk_common::VilladeskError;
use villadesk_persistence::entity::users;
use villadesk_persistence::sea_orm::*;

use crate::model::Account;

pub async fn find_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> anyhow::Result<Option<Account>> {
    let account = users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(db)
        .await
        .map_err(|err| VilladeskError::Storage(err.to_string()))?
        .map(Account::from);

    Ok(account)
}

/// Verify a plaintext password against an account's bcrypt hash.
pub fn verify_password(account: &Account, password: &str) -> anyhow::Result<bool> {
    bcrypt::verify(password, &account.password)
        .map_err(|e| anyhow::anyhow!("Failed to verify password: {}", e))
}

/// Create an owner account with a bcrypt-hashed password.
pub async fn create(db: &DatabaseConnection, email: &str, password: &str) -> anyhow::Result<String> {
    if find_by_email(db, email).await?.is_some() {
        return Err(VilladeskError::Conflict(email.to_string()).into());
    }

    let hashed_password = bcrypt::hash(password, 10u32)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;
    let id = uuid::Uuid::new_v4().to_string();
    let entity = users::ActiveModel {
        id: Set(id.clone()),
        email: Set(email.to_string()),
        password: Set(hashed_password),
        created_at: Set(chrono::Utc::now()),
    };

    users::Entity::insert(entity)
        .exec_without_returning(db)
        .await
        .map_err(|err| VilladeskError::Storage(err.to_string()))?;

    Ok(id)
}
