use crate::state::AppState;

use super::{
    dto::UserDataRequest,
    error::IngestError,
    repo::{self, UserData},
};

/// Opens a session for this request and stores one record with it.
/// The connection goes back to the pool when it drops, on every path.
pub async fn ingest_user_data(
    st: &AppState,
    data: &UserDataRequest,
) -> Result<UserData, IngestError> {
    let mut session = st.db.acquire().await.map_err(IngestError::Session)?;
    repo::save_user_data(&mut session, data)
        .await
        .map_err(IngestError::Persist)
}
