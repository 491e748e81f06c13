use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, session::SessionId,
    taste_profile::entities::TasteProfile,
};

#[cfg_attr(test, mockall::automock)]
pub trait TasteProfileService: Send + Sync {
    fn get_taste_profile(
        &self,
        session_id: SessionId,
    ) -> impl Future<Output = Result<TasteProfile, CoreError>> + Send;
}
