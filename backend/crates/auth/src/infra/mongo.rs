//! MongoDB Repository Implementation

use bson::oid::ObjectId;
use bson::doc;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;
use platform::password::HashedPassword;

const USERS_COLLECTION: &str = "users";

/// MongoDB-backed user repository
#[derive(Clone)]
pub struct MongoUserRepository {
    db: Database,
}

impl MongoUserRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn users(&self) -> Collection<UserDocument> {
        self.db.collection(USERS_COLLECTION)
    }
}

impl UserRepository for MongoUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        self.users().insert_one(UserDocument::from_user(user)).await?;
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> AuthResult<Option<User>> {
        let document = self
            .users()
            .find_one(doc! { "username": username })
            .await?;

        document.map(|d| d.into_user()).transpose()
    }

    async fn exists_by_username(&self, username: &str) -> AuthResult<bool> {
        let count = self
            .users()
            .count_documents(doc! { "username": username })
            .await?;

        Ok(count > 0)
    }
}

// ============================================================================
// Document mapping
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    username: String,
    #[serde(rename = "passwordHash")]
    password_hash: String,
    #[serde(rename = "createdAt")]
    created_at: bson::DateTime,
}

impl UserDocument {
    fn from_user(user: &User) -> Self {
        Self {
            id: *user.user_id.as_object_id(),
            username: user.username.clone(),
            password_hash: user.password_hash.as_phc_string().to_string(),
            created_at: bson::DateTime::from_chrono(user.created_at),
        }
    }

    fn into_user(self) -> AuthResult<User> {
        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Corrupt credential record: {}", e)))?;

        Ok(User {
            user_id: UserId::from_object_id(self.id),
            username: self.username,
            password_hash,
            created_at: self.created_at.to_chrono(),
        })
    }
}
