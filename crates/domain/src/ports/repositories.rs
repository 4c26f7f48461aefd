use async_trait::async_trait;
use yourroute_errors::YourRouteResult;

use crate::profile::{Profile, UserType};

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get_by_user_type(&self, user_type: UserType) -> YourRouteResult<Option<Profile>>;
}
