//! Integration tests for `InMemoryBackend`.

use std::path::PathBuf;

use chrono::{DateTime, TimeZone, Utc};
use fashionhub_client::{
    Backend, ClientError, Credentials, InMemoryBackend, SentNotification, SignupRequest,
    UserQuery,
};
use fashionhub_core::{
    load_directory, AdminActionType, AdminTargetType, Brief, BriefFilters, BriefStatus,
    BriefVisibility, ContactMessage, CoreError, DigestFrequency, NewAdminAction, NewBrief,
    NewProfile, NewResponse, OnboardingDraft, ProductCategory, Profile, ProfileFilters,
    SortKey, Tag, User, UserRole, UserStatus,
};

fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, day, 10, 0, 0).unwrap()
}

fn user(id: &str, email: &str, role: UserRole, status: UserStatus) -> User {
    User {
        id: id.to_string(),
        email: email.to_string(),
        role,
        status,
        created_date: at(1),
        approved_date: None,
        last_login: None,
    }
}

fn brief(id: &str, owner: &str, title: &str, tags: &[Tag], day: u32) -> Brief {
    NewBrief {
        user_id: owner.to_string(),
        title: title.to_string(),
        description: format!("{title} for the winter range."),
        product_category: vec![ProductCategory::Knits],
        tags: tags.to_vec(),
        ..NewBrief::default()
    }
    .build(id.to_string(), at(day))
    .unwrap()
}

fn seeded_profiles() -> Vec<Profile> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config/directory.yaml");
    load_directory(&path)
        .expect("seed directory should load")
        .profiles
}

#[tokio::test]
async fn login_issues_token_that_resolves_to_user() {
    let backend = InMemoryBackend::new().with_users(vec![user(
        "u1",
        "ava@label.example",
        UserRole::Brand,
        UserStatus::Approved,
    )]);

    let response = backend
        .auth()
        .login(&Credentials::email_only("AVA@label.example"))
        .await
        .unwrap();
    assert_eq!(response.user.id, "u1");
    assert!(response.user.last_login.is_some());

    let current = backend
        .auth()
        .get_current_user(&response.token)
        .await
        .unwrap()
        .expect("token should resolve");
    assert_eq!(current.id, "u1");

    backend.auth().logout(&response.token).await.unwrap();
    let err = backend
        .auth()
        .get_current_user(&response.token)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::NotAuthenticated));
}

#[tokio::test]
async fn login_unknown_or_banned_account_fails() {
    let backend = InMemoryBackend::new().with_users(vec![user(
        "u2",
        "spam@example.com",
        UserRole::Supplier,
        UserStatus::Banned,
    )]);

    let err = backend
        .auth()
        .login(&Credentials::email_only("nobody@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::NotFound { .. }));

    let err = backend
        .auth()
        .login(&Credentials::email_only("spam@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Rejected(_)));
}

#[tokio::test]
async fn signup_creates_pending_account_and_rejects_duplicates() {
    let backend = InMemoryBackend::new();
    let request = SignupRequest {
        email: "mill@example.com".to_string(),
        password: "hunter2".to_string(),
        role: UserRole::Supplier,
        company_name: Some("Mill".to_string()),
        name: None,
    };

    let response = backend.auth().signup(&request).await.unwrap();
    assert_eq!(response.user.status, UserStatus::Pending);

    let pending = backend
        .users()
        .list(UserQuery {
            status: Some(UserStatus::Pending),
            ..UserQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);

    let err = backend.auth().signup(&request).await.unwrap_err();
    assert!(matches!(err, ClientError::Rejected(_)));
}

#[tokio::test]
async fn approve_and_ban_update_status() {
    let backend = InMemoryBackend::new().with_users(vec![user(
        "u3",
        "new@example.com",
        UserRole::Expert,
        UserStatus::Pending,
    )]);

    let approved = backend.users().approve("u3").await.unwrap();
    assert_eq!(approved.status, UserStatus::Approved);
    assert!(approved.approved_date.is_some());

    let token = backend
        .auth()
        .login(&Credentials::email_only("new@example.com"))
        .await
        .unwrap()
        .token;
    let banned = backend.users().ban("u3", Some("spam")).await.unwrap();
    assert_eq!(banned.status, UserStatus::Banned);

    let err = backend.auth().get_current_user(&token).await.unwrap_err();
    assert!(matches!(err, ClientError::NotAuthenticated));
}

#[tokio::test]
async fn brief_status_follows_lifecycle() {
    let backend = InMemoryBackend::new().with_briefs(vec![brief("b1", "u1", "Merino", &[], 2)]);

    let reviewed = backend
        .briefs()
        .update_status("b1", BriefStatus::UnderReview)
        .await
        .unwrap();
    assert_eq!(reviewed.status, BriefStatus::UnderReview);

    let filled = backend
        .briefs()
        .update_status("b1", BriefStatus::Filled)
        .await
        .unwrap();
    assert_eq!(filled.status, BriefStatus::Filled);

    let err = backend
        .briefs()
        .update_status("b1", BriefStatus::Open)
        .await
        .unwrap_err();
    match err {
        ClientError::Rejected(msg) => assert!(msg.contains("filled"), "message: {msg}"),
        other => panic!("expected Rejected, got {other:?}"),
    }
    assert_eq!(
        backend.briefs().get("b1").await.unwrap().status,
        BriefStatus::Filled
    );
}

#[tokio::test]
async fn open_brief_cannot_skip_review() {
    let backend = InMemoryBackend::new().with_briefs(vec![brief("b1", "u1", "Merino", &[], 2)]);
    let err = backend
        .briefs()
        .update_status("b1", BriefStatus::Closed)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Rejected(_)));
}

#[tokio::test]
async fn list_filters_and_sorts() {
    let backend = InMemoryBackend::new().with_briefs(vec![
        brief("b1", "u1", "Bamboo jersey", &[], 2),
        brief("b2", "u1", "Alpaca knit", &[Tag::Sustainable], 5),
        brief("b3", "u2", "Cotton twill", &[Tag::Sustainable], 3),
    ]);

    let newest = backend
        .briefs()
        .list(None, Some(SortKey::NEWEST_FIRST))
        .await
        .unwrap();
    let ids: Vec<&str> = newest.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["b2", "b3", "b1"]);

    let by_title: SortKey = "title".parse().unwrap();
    let sustainable = backend
        .briefs()
        .list(
            Some(&BriefFilters {
                tags: vec![Tag::Sustainable],
                ..BriefFilters::default()
            }),
            Some(by_title),
        )
        .await
        .unwrap();
    let titles: Vec<&str> = sustainable.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpaca knit", "Cotton twill"]);
}

#[tokio::test]
async fn delete_brief_keeps_its_responses() {
    let backend = InMemoryBackend::new().with_briefs(vec![brief("b1", "u1", "Merino", &[], 2)]);
    backend
        .responses()
        .create(&NewResponse {
            brief_id: "b1".to_string(),
            user_id: "u9".to_string(),
            message: "We spin merino locally.".to_string(),
            ..NewResponse::default()
        })
        .await
        .unwrap();

    backend.briefs().delete("b1").await.unwrap();

    assert!(backend.briefs().get("b1").await.is_err());
    let orphaned = backend.responses().list(Some("b1"), None).await.unwrap();
    assert_eq!(orphaned.len(), 1);

    let err = backend.briefs().delete("b1").await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound { .. }));
}

#[tokio::test]
async fn response_requires_existing_brief() {
    let backend = InMemoryBackend::new();
    let err = backend
        .responses()
        .create(&NewResponse {
            brief_id: "missing".to_string(),
            user_id: "u9".to_string(),
            message: "Hello".to_string(),
            ..NewResponse::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::NotFound { .. }));
}

#[tokio::test]
async fn matching_briefs_share_a_profile_tag() {
    let profiles = seeded_profiles();
    // Melbourne Textile Co. is tagged sustainable, ethical_certified, low_moq.
    let backend = InMemoryBackend::new()
        .with_profiles(profiles)
        .with_briefs(vec![
            brief("b1", "2", "Organic jersey", &[Tag::Sustainable], 2),
            brief("b2", "2", "Small batch denim", &[Tag::LowMoq], 4),
            brief("b3", "2", "Rush sampling", &[Tag::FastTurnaround], 5),
            brief("b4", "1", "Own brief", &[Tag::Sustainable], 6),
        ]);

    backend
        .briefs()
        .update_status("b2", BriefStatus::UnderReview)
        .await
        .unwrap();

    let mut hidden = brief("b5", "2", "Private knit", &[Tag::Sustainable], 7);
    hidden.visibility = BriefVisibility::ClientTeamOnly;
    let backend = backend.with_briefs(vec![hidden]);

    let matching = backend.briefs().get_matching("1").await.unwrap();
    let ids: Vec<&str> = matching.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["b1"]);

    assert!(backend
        .briefs()
        .get_matching("no-profile")
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn search_combines_filters_and_text() {
    let backend = InMemoryBackend::new().with_profiles(seeded_profiles());

    let suppliers = backend
        .profiles()
        .search(
            &ProfileFilters {
                role: vec![UserRole::Supplier],
                ..ProfileFilters::default()
            },
            None,
        )
        .await
        .unwrap();
    assert_eq!(suppliers.len(), 5);

    let melbourne = backend
        .profiles()
        .search(&ProfileFilters::default(), Some("Melbourne"))
        .await
        .unwrap();
    assert!(!melbourne.is_empty());
    assert!(melbourne
        .iter()
        .all(|p| p.searchable_text().contains("melbourne")));
}

#[tokio::test]
async fn profile_create_then_update_keeps_identity() {
    let backend = InMemoryBackend::new();
    let mut details = OnboardingDraft::for_role(UserRole::Expert);
    if let OnboardingDraft::Expert(draft) = &mut details {
        draft.name = "Nina Patel".to_string();
        draft.toggle_skill("Grading");
        draft.toggle_region("AU");
    }
    let payload = NewProfile {
        user_id: "u5".to_string(),
        details,
    };

    let created = backend.profiles().create(&payload).await.unwrap();
    assert_eq!(created.role(), UserRole::Expert);
    assert_eq!(created.user_id(), "u5");

    let err = backend.profiles().create(&payload).await.unwrap_err();
    assert!(matches!(err, ClientError::Rejected(_)));

    let mut edited = created.clone();
    if let Profile::Expert(expert) = &mut edited {
        expert.bio = Some("Grading and fit specialist.".to_string());
        expert.id = "spoofed".to_string();
    }
    let updated = backend.profiles().update("u5", &edited).await.unwrap();
    assert_eq!(updated.id(), created.id());
    assert_eq!(updated.created_date(), created.created_date());
    assert_eq!(updated.bio(), Some("Grading and fit specialist."));

    let stored = backend.profiles().get("u5").await.unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn profile_update_rejects_role_change() {
    let profiles = seeded_profiles();
    let brand = profiles
        .iter()
        .find(|p| p.role() == UserRole::Brand)
        .cloned()
        .unwrap();
    let supplier = profiles
        .iter()
        .find(|p| p.role() == UserRole::Supplier)
        .cloned()
        .unwrap();
    let backend = InMemoryBackend::new().with_profiles(vec![brand.clone()]);

    let err = backend
        .profiles()
        .update(brand.user_id(), &supplier)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ClientError::Core(CoreError::RoleMismatch {
            expected: UserRole::Brand,
            found: UserRole::Supplier,
        })
    ));
}

#[tokio::test]
async fn feature_profile_toggles_flag() {
    let backend = InMemoryBackend::new().with_profiles(seeded_profiles());
    backend.profiles().feature("1", true).await.unwrap();
    assert!(backend.is_profile_featured("1").await);
    backend.profiles().feature("1", false).await.unwrap();
    assert!(!backend.is_profile_featured("1").await);

    assert!(backend.profiles().feature("404", true).await.is_err());
}

#[tokio::test]
async fn admin_actions_are_recorded_with_target_type() {
    let backend = InMemoryBackend::new();
    let recorded = backend
        .admin()
        .create_action(
            &NewAdminAction::new("admin-1", AdminActionType::FeatureProfile, "p1")
                .with_reason("Great portfolio"),
        )
        .await
        .unwrap();
    assert_eq!(recorded.target_type, AdminTargetType::Profile);
    assert_eq!(recorded.reason.as_deref(), Some("Great portfolio"));

    let actions = backend.admin().get_actions().await.unwrap();
    assert_eq!(actions, vec![recorded]);
}

#[tokio::test]
async fn notifications_land_in_outbox() {
    let backend = InMemoryBackend::new();
    backend
        .notifications()
        .send_brief_digest("u1", DigestFrequency::Daily)
        .await
        .unwrap();

    let mut message = ContactMessage::for_brief("owner@label.example", "Merino");
    let err = backend
        .notifications()
        .send_contact_message(&message)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Core(CoreError::Validation(_))));

    message.sender_name = "Jo".to_string();
    message.sender_email = "jo@mill.example".to_string();
    message.message = "We can help.".to_string();
    backend
        .notifications()
        .send_contact_message(&message)
        .await
        .unwrap();

    assert_eq!(
        backend.sent().await,
        vec![
            SentNotification::Digest {
                user_id: "u1".to_string(),
                frequency: DigestFrequency::Daily,
            },
            SentNotification::Contact(message),
        ]
    );
}
