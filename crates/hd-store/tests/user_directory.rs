mod common;

use std::sync::Arc;

use common::{FakeApi, admin_viewer, user_viewer};
use hd_core::enums::Role;
use hd_core::errors::CoreError;
use hd_core::forms::NewUser;
use hd_core::updates::ProfileUpdateBuilder;
use hd_store::{Confirmation, NoticeLevel, RecordingNotify, StoreError, UserDirectory};

fn directory() -> (UserDirectory<FakeApi>, Arc<RecordingNotify>) {
    let notices = Arc::new(RecordingNotify::new());
    let api = FakeApi {
        echo: true,
        ..FakeApi::default()
    };
    (UserDirectory::new(api, notices.clone()), notices)
}

fn new_user() -> NewUser {
    NewUser {
        name: "Caio Lima".into(),
        email: "caio@example.com".into(),
        password: "segredo".into(),
        password_confirmation: Some("segredo".into()),
        cpf: "123.456.789-01".into(),
        phone: "(21) 99876-5432".into(),
        department: "Suporte".into(),
        role_title: "Tecnico".into(),
        role: Role::User,
    }
}

#[tokio::test]
async fn user_management_is_admin_only() {
    let (directory, _) = directory();
    let user = user_viewer();
    for err in [
        directory.list(&user).await.unwrap_err(),
        directory.get(&user, "1").await.unwrap_err(),
        directory.create(&user, &new_user()).await.unwrap_err(),
        directory
            .delete(&user, "1", Confirmation::Confirmed)
            .await
            .unwrap_err(),
    ] {
        assert!(matches!(err, StoreError::Core(CoreError::Forbidden { .. })));
    }
    assert!(directory.api().calls().is_empty());
}

#[tokio::test]
async fn register_sends_digits_only() {
    let (directory, notices) = directory();
    let created = directory.register(&new_user()).await.unwrap().unwrap();
    assert_eq!(created.cpf.as_deref(), Some("12345678901"));
    assert_eq!(created.phone.as_deref(), Some("21998765432"));
    assert_eq!(notices.notices()[0].level, NoticeLevel::Success);
}

#[tokio::test]
async fn invalid_registration_is_rejected_locally() {
    let (directory, _) = directory();
    let user = NewUser {
        password_confirmation: Some("outra".into()),
        ..new_user()
    };
    let err = directory.register(&user).await.unwrap_err();
    assert!(matches!(err, StoreError::Core(CoreError::Validation(_))));
    assert!(directory.api().calls().is_empty());
}

#[tokio::test]
async fn admin_creates_and_deletes() {
    let (directory, _) = directory();
    let admin = admin_viewer();
    directory.create(&admin, &new_user()).await.unwrap();
    assert_eq!(directory.list(&admin).await.unwrap().len(), 1);

    let err = directory
        .delete(&admin, "1", Confirmation::NotConfirmed)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotConfirmed { .. }));

    directory.delete(&admin, "1", Confirmation::Confirmed).await.unwrap();
    assert!(directory.list(&admin).await.unwrap().is_empty());
}

#[tokio::test]
async fn profile_update_targets_the_viewer() {
    let (directory, _) = directory();
    let update = ProfileUpdateBuilder::new().name("Bia S.").build();
    directory.update_profile(&user_viewer(), &update).await.unwrap();
    assert_eq!(directory.api().calls(), vec!["PUT /api/users/42"]);

    let empty = ProfileUpdateBuilder::new().build();
    assert!(directory.update_profile(&user_viewer(), &empty).await.is_err());
}
