use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::{doc, Bson, Document};
use mongodb::{Collection, Database};
use serde_json::json;
use tracing::{debug, warn};

use yourroute_domain::ports::ProfileRepository;
use yourroute_domain::profile::{Profile, UserType};
use yourroute_errors::{YourRouteError, YourRouteResult};

/// 资料集合名
pub const PROFILES_COLLECTION: &str = "profiles";

/// 内存资料仓储
pub struct InMemoryProfileRepository {
    profiles: HashMap<UserType, Profile>,
}

impl InMemoryProfileRepository {
    pub fn new(profiles: impl IntoIterator<Item = Profile>) -> Self {
        Self {
            profiles: profiles
                .into_iter()
                .map(|profile| (profile.user_type, profile))
                .collect(),
        }
    }

    /// 三种账号类型各一份演示资料
    pub fn with_default_profiles() -> Self {
        Self::new(default_profiles())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get_by_user_type(&self, user_type: UserType) -> YourRouteResult<Option<Profile>> {
        Ok(self.profiles.get(&user_type).cloned())
    }
}

fn default_profiles() -> Vec<Profile> {
    vec![
        Profile {
            user_type: UserType::General,
            document: json!({
                "userType": "general",
                "name": "Aarav Sharma",
                "email": "aarav.sharma@example.com",
                "phone": "+91-98100-00001",
                "emergencyContacts": [
                    { "name": "Priya Sharma", "relation": "Sister", "phone": "+91-98100-00002" }
                ],
                "stats": {
                    "tripsCompleted": 27,
                    "alertsRaised": 1
                }
            }),
        },
        Profile {
            user_type: UserType::Corporate,
            document: json!({
                "userType": "corporate",
                "companyName": "Your Route Logistics Pvt. Ltd.",
                "contactEmail": "fleet@yourroute.example.com",
                "headquarters": "Bengaluru",
                "stats": {
                    "activeEmployees": 12,
                    "vehiclesTracked": 8,
                    "openIncidents": 0
                }
            }),
        },
        Profile {
            user_type: UserType::Employee,
            document: json!({
                "userType": "employee",
                "name": "Neha Verma",
                "employeeId": "EMP-0042",
                "company": "Your Route Logistics Pvt. Ltd.",
                "shift": "night",
                "stats": {
                    "tripsCompleted": 143,
                    "alertsRaised": 2
                }
            }),
        },
    ]
}

/// MongoDB 资料仓储，按 `userType` 字段查找
///
/// 集合中没有对应文档或查询失败时转交给后备仓储。
pub struct MongoProfileRepository {
    collection: Collection<Document>,
    fallback: Option<Arc<dyn ProfileRepository>>,
}

impl MongoProfileRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(PROFILES_COLLECTION),
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: Arc<dyn ProfileRepository>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    async fn find(&self, user_type: UserType) -> YourRouteResult<Option<Profile>> {
        let found = self
            .collection
            .find_one(doc! { "userType": user_type.as_str() })
            .await
            .map_err(|e| YourRouteError::Database(format!("查询用户资料失败: {e}")))?;

        Ok(found.map(|document| Profile {
            user_type,
            document: document_to_json(document),
        }))
    }
}

#[async_trait]
impl ProfileRepository for MongoProfileRepository {
    async fn get_by_user_type(&self, user_type: UserType) -> YourRouteResult<Option<Profile>> {
        let result = self.find(user_type).await;

        let Some(fallback) = &self.fallback else {
            return result;
        };

        match result {
            Ok(Some(profile)) => Ok(Some(profile)),
            Ok(None) => {
                debug!(user_type = %user_type, "数据库中没有该类型资料，使用后备仓储");
                fallback.get_by_user_type(user_type).await
            }
            Err(e) => {
                warn!(user_type = %user_type, error = %e, "数据库查询失败，使用后备仓储");
                fallback.get_by_user_type(user_type).await
            }
        }
    }
}

/// 去掉 `_id` 后转成宽松扩展 JSON
fn document_to_json(mut document: Document) -> serde_json::Value {
    document.remove("_id");
    Bson::Document(document).into_relaxed_extjson()
}
