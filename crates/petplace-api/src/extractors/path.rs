//! Path parameter extractors
//!
//! Typed path structs for numeric resource IDs. Axum rejects non-numeric
//! values during deserialization; the wrapper maps that rejection onto the
//! API error envelope.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::response::ApiError;

macro_rules! id_path {
    ($(#[$doc:meta])* $name:ident, $field:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Deserialize)]
        pub struct $name {
            pub $field: i64,
        }

        #[async_trait]
        impl<S> FromRequestParts<S> for $name
        where
            S: Send + Sync,
        {
            type Rejection = ApiError;

            async fn from_request_parts(
                parts: &mut Parts,
                state: &S,
            ) -> Result<Self, Self::Rejection> {
                extract_path(parts, state).await
            }
        }
    };
}

async fn extract_path<S, T>(parts: &mut Parts, state: &S) -> Result<T, ApiError>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    let Path(inner) = Path::<T>::from_request_parts(parts, state)
        .await
        .map_err(|e| ApiError::invalid_path(e.to_string()))?;
    Ok(inner)
}

id_path!(
    /// Path parameter with a user ID
    UserIdPath,
    user_id
);
id_path!(
    /// Path parameter with a pet ID
    PetIdPath,
    pet_id
);
id_path!(
    /// Path parameter with a feed ID
    FeedIdPath,
    feed_id
);
id_path!(
    /// Path parameter with a comment ID
    CommentIdPath,
    comment_id
);
id_path!(
    /// Path parameter with a chat room ID
    RoomIdPath,
    room_id
);
id_path!(
    /// Path parameter with a hotel ID
    HotelIdPath,
    hotel_id
);
id_path!(
    /// Path parameter with a reservation ID
    ReservationIdPath,
    reservation_id
);
id_path!(
    /// Path parameter with a notification ID
    NotificationIdPath,
    notification_id
);
