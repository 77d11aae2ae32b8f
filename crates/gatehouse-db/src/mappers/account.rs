//! Account entity <-> model mapper

use gatehouse_core::entities::Account;

use crate::models::AccountModel;

impl From<AccountModel> for Account {
    fn from(model: AccountModel) -> Self {
        Account {
            id: model.id,
            username: model.username,
            email: model.email,
            password_hash: model.password_hash,
            created_at: model.created_at,
            last_login: model.last_login,
            failed_login_attempts: model.failed_login_attempts,
            account_locked_until: model.account_locked_until,
        }
    }
}
