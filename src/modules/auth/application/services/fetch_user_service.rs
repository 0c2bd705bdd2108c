use async_trait::async_trait;

use crate::auth::application::domain::entities::{PublicUser, UserId};
use crate::auth::application::ports::incoming::use_cases::{FetchUserError, FetchUserUseCase};
use crate::auth::application::ports::outgoing::UserQuery;

pub struct FetchUserService<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> FetchUserService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> FetchUserUseCase for FetchUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<PublicUser, FetchUserError> {
        self.query
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchUserError::QueryError(e.to_string()))?
            .map(|user| user.to_public())
            .ok_or(FetchUserError::UserNotFound)
    }
}
