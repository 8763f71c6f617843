//! Admin user management and self-service account operations.

use std::sync::Arc;

use hd_core::entities::User;
use hd_core::forms::NewUser;
use hd_core::permissions::{Capability, Viewer};
use hd_core::updates::{ProfileUpdate, UserUpdate};

use crate::api::HelpdeskApi;
use crate::error::StoreError;
use crate::notice::{Notify, announce};
use crate::tickets::Confirmation;

pub struct UserDirectory<A> {
    api: A,
    notify: Arc<dyn Notify>,
}

impl<A: HelpdeskApi> UserDirectory<A> {
    pub fn new(api: A, notify: Arc<dyn Notify>) -> Self {
        Self { api, notify }
    }

    /// The backend this store talks to.
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// # Errors
    ///
    /// `Forbidden` for non-admins, or the client error.
    pub async fn list(&self, viewer: &Viewer) -> Result<Vec<User>, StoreError> {
        viewer.require(Capability::ManageUsers)?;
        Ok(self.api.list_users().await?)
    }

    /// # Errors
    ///
    /// `Forbidden` for non-admins, or the client error.
    pub async fn get(&self, viewer: &Viewer, id: &str) -> Result<User, StoreError> {
        viewer.require(Capability::ManageUsers)?;
        Ok(self.api.get_user(id).await?)
    }

    /// Admin-side account creation.
    ///
    /// # Errors
    ///
    /// `Forbidden`, `Validation` before any request, or the client error.
    pub async fn create(&self, viewer: &Viewer, user: &NewUser) -> Result<Option<User>, StoreError> {
        viewer.require(Capability::ManageUsers)?;
        user.validate()?;
        let result = self.api.create_user(&user.normalized()).await.map_err(StoreError::from);
        self.announce(result, |_| format!("User {} created", user.email.trim()))
    }

    /// Self-registration; no session needed.
    ///
    /// # Errors
    ///
    /// `Validation` before any request, or the client error.
    pub async fn register(&self, user: &NewUser) -> Result<Option<User>, StoreError> {
        user.validate()?;
        let result = self.api.create_user(&user.normalized()).await.map_err(StoreError::from);
        self.announce(result, |_| "Account created, you can log in now".to_string())
    }

    /// # Errors
    ///
    /// `Forbidden`, `Validation`, or the client error.
    pub async fn update(
        &self,
        viewer: &Viewer,
        id: &str,
        update: &UserUpdate,
    ) -> Result<Option<User>, StoreError> {
        viewer.require(Capability::ManageUsers)?;
        update.validate()?;
        let result = self.api.update_user(id, update).await.map_err(StoreError::from);
        self.announce(result, |_| format!("User {id} updated"))
    }

    /// The viewer's own profile. The caller merges the result into the
    /// session.
    ///
    /// # Errors
    ///
    /// `Validation` for an empty update, or the client error.
    pub async fn update_profile(
        &self,
        viewer: &Viewer,
        update: &ProfileUpdate,
    ) -> Result<Option<User>, StoreError> {
        if update.is_empty() {
            let mut errors = hd_core::errors::ValidationErrors::new();
            errors.push("profile", "at least one field must be set");
            errors.into_result()?;
        }
        let result = self
            .api
            .update_profile(&viewer.user_id, update)
            .await
            .map_err(StoreError::from);
        self.announce(result, |_| "Profile updated".to_string())
    }

    /// # Errors
    ///
    /// `Forbidden`, `NotConfirmed`, or the client error.
    pub async fn delete(
        &self,
        viewer: &Viewer,
        id: &str,
        confirmation: Confirmation,
    ) -> Result<(), StoreError> {
        viewer.require(Capability::ManageUsers)?;
        if confirmation != Confirmation::Confirmed {
            return Err(StoreError::not_confirmed("user deletion"));
        }
        let result = self.api.delete_user(id).await.map_err(StoreError::from);
        self.announce(result, |_| format!("User {id} deleted"))
    }

    fn announce<T>(
        &self,
        result: Result<T, StoreError>,
        success: impl FnOnce(&T) -> String,
    ) -> Result<T, StoreError> {
        announce(self.notify.as_ref(), result, success)
    }
}
