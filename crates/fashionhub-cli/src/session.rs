//! Sign-in commands. The session token lives in the file named by
//! `FASHIONHUB_TOKEN_PATH` so it survives between invocations.

use std::sync::Arc;

use fashionhub_client::{Credentials, FileTokenStore, Session, StubBackend};
use fashionhub_core::{AppConfig, User};

/// Open a session against the stub backend and restore any stored token.
///
/// # Errors
///
/// Returns an error if the token file exists but cannot be read.
pub(crate) async fn open_session(config: &AppConfig) -> anyhow::Result<Session> {
    if config.api_url.is_some() {
        tracing::warn!("FASHIONHUB_API_URL is set but only the stub backend is available");
    }
    let tokens = FileTokenStore::new(&config.token_path);
    let mut session = Session::new(Arc::new(StubBackend::new()), Box::new(tokens));
    session.restore().await?;
    Ok(session)
}

fn describe(user: &User) -> String {
    format!("{} ({}, {})", user.email, user.role, user.status)
}

/// # Errors
///
/// Returns an error if the backend rejects the credentials or the token
/// cannot be stored.
pub(crate) async fn run_login(config: &AppConfig, email: &str) -> anyhow::Result<()> {
    let mut session = open_session(config).await?;
    let user = session.login(&Credentials::email_only(email)).await?;
    println!("signed in as {}", describe(user));
    Ok(())
}

/// # Errors
///
/// Returns an error if the stored token cannot be removed.
pub(crate) async fn run_logout(config: &AppConfig) -> anyhow::Result<()> {
    let mut session = open_session(config).await?;
    session.logout().await?;
    println!("signed out");
    Ok(())
}

/// # Errors
///
/// Returns an error if the token file cannot be read.
pub(crate) async fn run_whoami(config: &AppConfig) -> anyhow::Result<()> {
    let session = open_session(config).await?;
    match session.user() {
        Some(user) => println!("{}", describe(user)),
        None => println!("not signed in"),
    }
    Ok(())
}
