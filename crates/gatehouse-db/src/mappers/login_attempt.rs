//! Login attempt entity <-> model mapper

use gatehouse_core::entities::LoginAttempt;

use crate::models::LoginAttemptModel;

impl From<LoginAttemptModel> for LoginAttempt {
    fn from(model: LoginAttemptModel) -> Self {
        LoginAttempt {
            id: model.id,
            username: model.username,
            source_address: model.source_address,
            success: model.success,
            attempted_at: model.attempted_at,
        }
    }
}
