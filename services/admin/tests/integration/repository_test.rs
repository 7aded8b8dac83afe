use testify_admin::domain::repository::CrudRepository;
use testify_admin::domain::types::{AppUser, UserRole};
use testify_admin::error::AdminServiceError;
use testify_admin::infra::db::{DbAppUserRepository, DbUserRoleRepository};

use crate::helpers::migrated_db;

fn role(id: Option<i32>, name: &str) -> UserRole {
    UserRole {
        id,
        name: name.to_owned(),
    }
}

#[tokio::test]
async fn should_report_storage_unique_violation_as_conflict() {
    let repo = DbUserRoleRepository { db: migrated_db().await };
    repo.save(role(None, "Admin")).await.unwrap();

    // Bypasses the use-case pre-check, as a concurrent writer would.
    let err = repo.save(role(None, "Admin")).await.unwrap_err();
    match err {
        AdminServiceError::AlreadyExists(message) => {
            assert_eq!(message, "User role with name Admin already exists")
        }
        other => panic!("expected AlreadyExists, got {other:?}"),
    }
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn should_report_renaming_onto_taken_name_as_conflict() {
    let repo = DbUserRoleRepository { db: migrated_db().await };
    repo.save(role(None, "Admin")).await.unwrap();
    let teacher = repo.save(role(None, "Teacher")).await.unwrap();

    let err = repo.save(role(teacher.id, "Admin")).await.unwrap_err();
    assert!(matches!(err, AdminServiceError::AlreadyExists(_)));
    assert_eq!(
        repo.find_by_id(2).await.unwrap(),
        Some(role(Some(2), "Teacher"))
    );
}

#[tokio::test]
async fn should_report_dangling_reference_on_save_as_not_found() {
    let repo = DbAppUserRepository { db: migrated_db().await };
    let user = AppUser {
        id: None,
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        user_role_id: 42,
    };

    let err = repo.save(user).await.unwrap_err();
    match err {
        AdminServiceError::NotFound(message) => {
            assert_eq!(message, "User references a missing record")
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn should_report_deleting_referenced_row_as_in_use() {
    let db = migrated_db().await;
    let roles = DbUserRoleRepository { db: db.clone() };
    let users = DbAppUserRepository { db };
    let admin = roles.save(role(None, "Admin")).await.unwrap();
    users
        .save(AppUser {
            id: None,
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: "grace@example.com".into(),
            user_role_id: 1,
        })
        .await
        .unwrap();

    let err = roles.delete(&admin).await.unwrap_err();
    match err {
        AdminServiceError::InUse(message) => {
            assert_eq!(message, "User role with id 1 is still referenced")
        }
        other => panic!("expected InUse, got {other:?}"),
    }
    assert!(roles.exists_by_id(1).await.unwrap());
}

#[tokio::test]
async fn should_report_update_of_missing_row_as_not_found() {
    let repo = DbUserRoleRepository { db: migrated_db().await };

    let err = repo.save(role(Some(999), "Ghost")).await.unwrap_err();
    match err {
        AdminServiceError::NotFound(message) => assert_eq!(message, "No user role with id: 999"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}
