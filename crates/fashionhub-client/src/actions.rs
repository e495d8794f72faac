//! Caller-side flows that combine the session, a backend and the domain
//! rules. Drafts are borrowed so a failed submission leaves them intact.

use fashionhub_core::{
    sort_records, BoardQuery, Brief, BriefResponse, ContactMessage, DirectoryCriteria,
    DirectoryStats, DirectoryView, NewBrief, NewResponse, OnboardingFlow, Profile,
    ProfileDirectoryFilter, ProfileFilters, SortKey,
};

use crate::api::Backend;
use crate::error::ClientError;
use crate::session::Session;

/// Fetch profiles for `criteria` and filter them client-side.
///
/// Role, region and the text query go to the search collaborator and are
/// applied again locally, so a backend that ignores them still yields the
/// right view.
///
/// # Errors
///
/// Propagates the search failure.
pub async fn load_directory(
    backend: &dyn Backend,
    criteria: &DirectoryCriteria,
    filter: &ProfileDirectoryFilter,
) -> Result<DirectoryView, ClientError> {
    let fetched = backend
        .profiles()
        .search(&criteria.to_profile_filters(), criteria.query_text())
        .await?;
    let view = filter.apply(&fetched, criteria);
    tracing::debug!(
        fetched = fetched.len(),
        shown = view.len(),
        featured = view.featured().len(),
        "directory filtered"
    );
    Ok(view)
}

/// Per-role counts over the whole directory.
///
/// # Errors
///
/// Propagates the search failure.
pub async fn directory_stats(backend: &dyn Backend) -> Result<DirectoryStats, ClientError> {
    let all = backend
        .profiles()
        .search(&ProfileFilters::default(), None)
        .await?;
    Ok(DirectoryStats::from_profiles(&all))
}

/// Post a brief owned by the signed-in user.
///
/// # Errors
///
/// [`ClientError::NotAuthenticated`] without a user, a validation error for an
/// incomplete draft, or the backend failure.
pub async fn submit_brief(session: &Session, draft: &NewBrief) -> Result<Brief, ClientError> {
    let user = session.require_user()?;
    let mut owned = draft.clone();
    owned.user_id.clone_from(&user.id);
    owned.validate()?;
    let brief = session.backend().briefs().create(&owned).await?;
    tracing::info!(brief_id = %brief.id, user_id = %user.id, "brief submitted");
    Ok(brief)
}

/// Reply to a brief as the signed-in user.
///
/// # Errors
///
/// [`ClientError::NotAuthenticated`] without a user, a validation error for an
/// empty message, or the backend failure.
pub async fn respond_to_brief(
    session: &Session,
    draft: &NewResponse,
) -> Result<BriefResponse, ClientError> {
    let user = session.require_user()?;
    let mut owned = draft.clone();
    owned.user_id.clone_from(&user.id);
    owned.validate()?;
    session.backend().responses().create(&owned).await
}

/// Create the signed-in user's profile from the onboarding wizard.
///
/// # Errors
///
/// [`ClientError::NotAuthenticated`] without a user, a domain error when the
/// draft is incomplete or for another role, or the backend failure.
pub async fn complete_onboarding(
    session: &Session,
    flow: &OnboardingFlow,
) -> Result<Profile, ClientError> {
    let user = session.require_user()?;
    let payload = flow.submission(user)?;
    let profile = session.backend().profiles().create(&payload).await?;
    tracing::info!(profile_id = %profile.id(), role = %profile.role(), "onboarding complete");
    Ok(profile)
}

/// # Errors
///
/// A validation error for an incomplete message, or the backend failure.
pub async fn send_contact_message(
    backend: &dyn Backend,
    message: &ContactMessage,
) -> Result<(), ClientError> {
    message.validate()?;
    backend.notifications().send_contact_message(message).await
}

/// Listed briefs narrowed by the board search and ordered by `sort`.
///
/// # Errors
///
/// Propagates the listing failure.
pub async fn board(
    backend: &dyn Backend,
    query: &BoardQuery,
    sort: SortKey,
) -> Result<Vec<Brief>, ClientError> {
    let listed = backend.briefs().list(None, Some(sort)).await?;
    let mut shown = query.apply(&listed);
    sort_records(&mut shown, sort);
    Ok(shown)
}
