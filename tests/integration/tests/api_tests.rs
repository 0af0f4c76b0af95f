//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, seed_hotel, test_pool, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

async fn signup(server: &TestServer) -> (SignupRequest, AuthResponse) {
    let request = SignupRequest::unique();
    let response = server
        .post("/api/v1/auth/signup", &request)
        .await
        .expect("signup request failed");
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, auth)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_signup() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = signup(&server).await;

    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.user.nickname, request.nickname);
    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_signup_duplicate_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = signup(&server).await;

    let response = server.post("/api/v1/auth/signup", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_signup_weak_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = SignupRequest::unique();
    request.password = "short".to_string();

    let response = server.post("/api/v1/auth/signup", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = signup(&server).await;

    let login_req = LoginRequest::from_signup(&request);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.username, request.username);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        username: "nonexistentuser".to_string(),
        password: "WrongPass123!".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_refresh_token_rotation() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let response = server
        .post(
            "/api/v1/auth/refresh",
            &json!({ "refresh_token": auth.refresh_token }),
        )
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!refreshed.access_token.is_empty());

    // The old refresh token was rotated out and no longer works
    let response = server
        .post(
            "/api/v1/auth/refresh",
            &json!({ "refresh_token": auth.refresh_token }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_logout_revokes_refresh_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let response = server
        .post_auth_empty("/api/v1/auth/logout", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .post(
            "/api/v1/auth/refresh",
            &json!({ "refresh_token": auth.refresh_token }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/users/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_get_me() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = signup(&server).await;

    let response = server
        .get_auth("/api/v1/users/me", &auth.access_token)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, auth.user.id);
    assert_eq!(user.username, request.username);
}

#[tokio::test]
async fn test_update_profile() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let new_nickname = format!("renamed{}", unique_suffix());
    let response = server
        .patch_auth(
            "/api/v1/users/me",
            &auth.access_token,
            &json!({ "nickname": new_nickname }),
        )
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.nickname, new_nickname);
}

#[tokio::test]
async fn test_update_profile_duplicate_nickname() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (first, _) = signup(&server).await;
    let (_, auth) = signup(&server).await;

    let response = server
        .patch_auth(
            "/api/v1/users/me",
            &auth.access_token,
            &json!({ "nickname": first.nickname }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_update_profile_accepts_own_current_values() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = signup(&server).await;

    // Resubmitting the caller's current nickname and phone number must
    // not read as a conflict with their own row
    let response = server
        .patch_auth(
            "/api/v1/users/me",
            &auth.access_token,
            &json!({
                "nickname": request.nickname,
                "phone_number": request.phone_number,
            }),
        )
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.nickname, request.nickname);
}

#[tokio::test]
async fn test_change_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = signup(&server).await;

    let new_password = "FreshPass456!";
    let response = server
        .put_auth(
            "/api/v1/users/me/password",
            &auth.access_token,
            &json!({
                "current_password": request.password,
                "new_password": new_password,
            }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Old password no longer works
    let response = server
        .post(
            "/api/v1/auth/login",
            &LoginRequest::from_signup(&request),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();

    // New password does
    let response = server
        .post(
            "/api/v1/auth/login",
            &json!({ "username": request.username, "password": new_password }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_get_public_profile() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (other_req, other) = signup(&server).await;
    let (_, auth) = signup(&server).await;

    let response = server
        .get_auth(
            &format!("/api/v1/users/{}", other.user.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    let profile: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(profile["nickname"], other_req.nickname);
    // Public profiles never expose the phone number
    assert!(profile.get("phone_number").is_none());
}

#[tokio::test]
async fn test_delete_account() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = signup(&server).await;

    let response = server
        .delete_auth("/api/v1/users/me", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Soft-deleted accounts cannot log in
    let response = server
        .post("/api/v1/auth/login", &LoginRequest::from_signup(&request))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_username_availability_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = signup(&server).await;

    // The name just registered is reported as taken
    let response = server
        .get(&format!(
            "/api/v1/users/check-username/{}",
            request.username
        ))
        .await
        .unwrap();
    let check: AvailabilityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(check.duplicate);

    let response = server
        .get(&format!("/api/v1/users/check-username/free{}", unique_suffix()))
        .await
        .unwrap();
    let check: AvailabilityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!check.duplicate);

    let response = server
        .get(&format!(
            "/api/v1/users/check-nickname/{}",
            request.nickname
        ))
        .await
        .unwrap();
    let check: AvailabilityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(check.duplicate);
}

// ============================================================================
// Pet Tests
// ============================================================================

#[tokio::test]
async fn test_pet_crud() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    // Create
    let request = CreatePetRequest::unique();
    let response = server
        .post_auth("/api/v1/pets", &auth.access_token, &request)
        .await
        .unwrap();
    let pet: PetResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(pet.name, request.name);
    assert_eq!(pet.animal, "DOG");

    // List
    let response = server
        .get_auth("/api/v1/pets", &auth.access_token)
        .await
        .unwrap();
    let pets: Vec<PetResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(pets.len(), 1);

    // Update
    let response = server
        .patch_auth(
            &format!("/api/v1/pets/{}", pet.id),
            &auth.access_token,
            &json!({ "breed": "Poodle" }),
        )
        .await
        .unwrap();
    let updated: PetResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.breed.as_deref(), Some("Poodle"));

    // Delete
    let response = server
        .delete_auth(&format!("/api/v1/pets/{}", pet.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/pets/{}", pet.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_pet_update_requires_ownership() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = signup(&server).await;
    let (_, intruder) = signup(&server).await;

    let response = server
        .post_auth(
            "/api/v1/pets",
            &owner.access_token,
            &CreatePetRequest::unique(),
        )
        .await
        .unwrap();
    let pet: PetResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .patch_auth(
            &format!("/api/v1/pets/{}", pet.id),
            &intruder.access_token,
            &json!({ "name": "stolen" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_pet_invalid_animal() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let mut request = CreatePetRequest::unique();
    request.animal = "DRAGON".to_string();

    let response = server
        .post_auth("/api/v1/pets", &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Feed Tests
// ============================================================================

#[tokio::test]
async fn test_feed_crud() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    // Create
    let request = CreateFeedRequest::unique();
    let response = server
        .post_auth("/api/v1/feeds", &auth.access_token, &request)
        .await
        .unwrap();
    let feed: FeedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(feed.content, request.content);
    assert_eq!(feed.like_count, 0);

    // Get (counts the view)
    let response = server
        .get_auth(&format!("/api/v1/feeds/{}", feed.id), &auth.access_token)
        .await
        .unwrap();
    let fetched: FeedResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.view_count, feed.view_count + 1);

    // Update
    let response = server
        .patch_auth(
            &format!("/api/v1/feeds/{}", feed.id),
            &auth.access_token,
            &json!({ "content": "edited content" }),
        )
        .await
        .unwrap();
    let updated: FeedResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.content, "edited content");

    // Delete
    let response = server
        .delete_auth(&format!("/api/v1/feeds/{}", feed.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/feeds/{}", feed.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_feed_pagination() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    for _ in 0..3 {
        server
            .post_auth(
                "/api/v1/feeds",
                &auth.access_token,
                &CreateFeedRequest::unique(),
            )
            .await
            .unwrap();
    }

    let response = server
        .get_auth(
            &format!("/api/v1/users/{}/feeds?page=0&size=2", auth.user.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    let page: PageResponse<FeedResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.len(), 2);
    assert!(page.has_more);
}

#[tokio::test]
async fn test_feed_update_requires_authorship() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, author) = signup(&server).await;
    let (_, intruder) = signup(&server).await;

    let response = server
        .post_auth(
            "/api/v1/feeds",
            &author.access_token,
            &CreateFeedRequest::unique(),
        )
        .await
        .unwrap();
    let feed: FeedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .patch_auth(
            &format!("/api/v1/feeds/{}", feed.id),
            &intruder.access_token,
            &json!({ "content": "hijacked" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comments_and_replies() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let response = server
        .post_auth(
            "/api/v1/feeds",
            &auth.access_token,
            &CreateFeedRequest::unique(),
        )
        .await
        .unwrap();
    let feed: FeedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Top-level comment
    let response = server
        .post_auth(
            &format!("/api/v1/feeds/{}/comments", feed.id),
            &auth.access_token,
            &json!({ "content": "first!" }),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(comment.parent_id.is_none());

    // Reply
    let response = server
        .post_auth(
            &format!("/api/v1/feeds/{}/comments", feed.id),
            &auth.access_token,
            &json!({ "content": "a reply", "parent_id": comment.id }),
        )
        .await
        .unwrap();
    let reply: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(reply.parent_id, Some(comment.id));

    // Replies to replies are rejected
    let response = server
        .post_auth(
            &format!("/api/v1/feeds/{}/comments", feed.id),
            &auth.access_token,
            &json!({ "content": "too deep", "parent_id": reply.id }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Listing returns both
    let response = server
        .get_auth(
            &format!("/api/v1/feeds/{}/comments", feed.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments.len(), 2);

    // Edit
    let response = server
        .patch_auth(
            &format!("/api/v1/comments/{}", comment.id),
            &auth.access_token,
            &json!({ "content": "edited comment" }),
        )
        .await
        .unwrap();
    let edited: CommentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(edited.content, "edited comment");

    // Delete
    let response = server
        .delete_auth(
            &format!("/api/v1/comments/{}", reply.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Like Tests
// ============================================================================

#[tokio::test]
async fn test_like_toggle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, author) = signup(&server).await;
    let (_, liker) = signup(&server).await;

    let response = server
        .post_auth(
            "/api/v1/feeds",
            &author.access_token,
            &CreateFeedRequest::unique(),
        )
        .await
        .unwrap();
    let feed: FeedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // First toggle likes
    let response = server
        .post_auth_empty(
            &format!("/api/v1/feeds/{}/likes", feed.id),
            &liker.access_token,
        )
        .await
        .unwrap();
    let toggled: LikeToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(toggled.liked);
    assert_eq!(toggled.like_count, 1);

    // Second toggle unlikes
    let response = server
        .post_auth_empty(
            &format!("/api/v1/feeds/{}/likes", feed.id),
            &liker.access_token,
        )
        .await
        .unwrap();
    let toggled: LikeToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!toggled.liked);
    assert_eq!(toggled.like_count, 0);
}

#[tokio::test]
async fn test_liked_feeds_listing() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, author) = signup(&server).await;
    let (_, liker) = signup(&server).await;

    let response = server
        .post_auth(
            "/api/v1/feeds",
            &author.access_token,
            &CreateFeedRequest::unique(),
        )
        .await
        .unwrap();
    let feed: FeedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    server
        .post_auth_empty(
            &format!("/api/v1/feeds/{}/likes", feed.id),
            &liker.access_token,
        )
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/feeds/liked", &liker.access_token)
        .await
        .unwrap();
    let page: PageResponse<FeedResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.data.iter().any(|f| f.id == feed.id));

    // Unliking removes the feed from the listing
    server
        .post_auth_empty(
            &format!("/api/v1/feeds/{}/likes", feed.id),
            &liker.access_token,
        )
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/feeds/liked", &liker.access_token)
        .await
        .unwrap();
    let page: PageResponse<FeedResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.data.iter().all(|f| f.id != feed.id));
}

#[tokio::test]
async fn test_my_comments_listing() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let response = server
        .post_auth(
            "/api/v1/feeds",
            &auth.access_token,
            &CreateFeedRequest::unique(),
        )
        .await
        .unwrap();
    let feed: FeedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    server
        .post_auth(
            &format!("/api/v1/feeds/{}/comments", feed.id),
            &auth.access_token,
            &json!({ "content": "my own comment" }),
        )
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/comments/me", &auth.access_token)
        .await
        .unwrap();
    let page: PageResponse<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].content, "my own comment");
}

// ============================================================================
// Chat Tests
// ============================================================================

#[tokio::test]
async fn test_chat_room_and_messages() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = signup(&server).await;
    let (_, bob) = signup(&server).await;

    // Open a room
    let response = server
        .post_auth(
            "/api/v1/chat/rooms",
            &alice.access_token,
            &json!({ "other_user_id": bob.user.id }),
        )
        .await
        .unwrap();
    let room: ChatRoomResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(room.other_user_id, bob.user.id);

    // Opening again returns the same room
    let response = server
        .post_auth(
            "/api/v1/chat/rooms",
            &bob.access_token,
            &json!({ "other_user_id": alice.user.id }),
        )
        .await
        .unwrap();
    let same_room: ChatRoomResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(same_room.id, room.id);
    assert_eq!(same_room.other_user_id, alice.user.id);

    // Send and list messages
    let response = server
        .post_auth(
            &format!("/api/v1/chat/rooms/{}/messages", room.id),
            &alice.access_token,
            &json!({ "content": "hello bob" }),
        )
        .await
        .unwrap();
    let message: ChatMessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(message.sender_id, alice.user.id);

    let response = server
        .get_auth(
            &format!("/api/v1/chat/rooms/{}/messages", room.id),
            &bob.access_token,
        )
        .await
        .unwrap();
    let page: PageResponse<ChatMessageResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].content, "hello bob");
}

#[tokio::test]
async fn test_chat_room_with_self_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let response = server
        .post_auth(
            "/api/v1/chat/rooms",
            &auth.access_token,
            &json!({ "other_user_id": auth.user.id }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_chat_messages_require_participation() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = signup(&server).await;
    let (_, bob) = signup(&server).await;
    let (_, eve) = signup(&server).await;

    let response = server
        .post_auth(
            "/api/v1/chat/rooms",
            &alice.access_token,
            &json!({ "other_user_id": bob.user.id }),
        )
        .await
        .unwrap();
    let room: ChatRoomResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth(
            &format!("/api/v1/chat/rooms/{}/messages", room.id),
            &eve.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Hotel and Reservation Tests
// ============================================================================

#[tokio::test]
async fn test_unknown_hotel_returns_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let response = server
        .get_auth("/api/v1/hotels/999999999", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_reservation_unknown_hotel() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let response = server
        .post_auth(
            "/api/v1/reservations",
            &auth.access_token,
            &json!({
                "hotel_id": 999_999_999,
                "check_in": "2026-10-01",
                "check_out": "2026-10-03",
            }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_reservation_invalid_date_range() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    // check_out before check_in never reaches the hotel lookup
    let response = server
        .post_auth(
            "/api/v1/reservations",
            &auth.access_token,
            &json!({
                "hotel_id": 1,
                "check_in": "2026-10-03",
                "check_out": "2026-10-01",
            }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_reservation_date_conflict_and_release() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.expect("Failed to connect to database");

    let check_in = chrono::Utc::now().date_naive() + chrono::Days::new(30);
    let night_two = check_in + chrono::Days::new(1);
    let check_out = check_in + chrono::Days::new(2);
    let hotel_id = seed_hotel(&pool, &[check_in, night_two])
        .await
        .expect("Failed to seed hotel");

    let (_, first_guest) = signup(&server).await;
    let (_, second_guest) = signup(&server).await;

    let body = json!({
        "hotel_id": hotel_id,
        "check_in": check_in,
        "check_out": check_out,
    });

    let response = server
        .post_auth("/api/v1/reservations", &first_guest.access_token, &body)
        .await
        .unwrap();
    let reservation: serde_json::Value =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    let reservation_id = reservation["id"].as_i64().unwrap();

    // The same dates are now booked and a second guest bounces off them
    let response = server
        .post_auth("/api/v1/reservations", &second_guest.access_token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Cancelling releases the dates for rebooking
    let response = server
        .delete_auth(
            &format!("/api/v1/reservations/{reservation_id}"),
            &first_guest.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth("/api/v1/reservations", &second_guest.access_token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_payment_unknown_merchant_uid() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let response = server
        .post_auth(
            "/api/v1/payments/complete",
            &auth.access_token,
            &json!({ "imp_uid": "imp_000", "merchant_uid": "HOTEL_0_nonexistent" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_payment_lookup_unknown_merchant_uid() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let response = server
        .get_auth("/api/v1/payments/HOTEL_0_nonexistent", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Notification Tests
// ============================================================================

#[tokio::test]
async fn test_comment_creates_notification() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, author) = signup(&server).await;
    let (_, commenter) = signup(&server).await;

    let response = server
        .post_auth(
            "/api/v1/feeds",
            &author.access_token,
            &CreateFeedRequest::unique(),
        )
        .await
        .unwrap();
    let feed: FeedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    server
        .post_auth(
            &format!("/api/v1/feeds/{}/comments", feed.id),
            &commenter.access_token,
            &json!({ "content": "nice pet!" }),
        )
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/notifications/unread-count", &author.access_token)
        .await
        .unwrap();
    let unread: UnreadCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unread.count, 1);

    // Mark everything read
    let response = server
        .patch_auth_empty("/api/v1/notifications/read-all", &author.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth("/api/v1/notifications/unread-count", &author.access_token)
        .await
        .unwrap();
    let unread: UnreadCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unread.count, 0);
}

#[tokio::test]
async fn test_delete_notification() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, author) = signup(&server).await;
    let (_, commenter) = signup(&server).await;

    let response = server
        .post_auth(
            "/api/v1/feeds",
            &author.access_token,
            &CreateFeedRequest::unique(),
        )
        .await
        .unwrap();
    let feed: FeedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    server
        .post_auth(
            &format!("/api/v1/feeds/{}/comments", feed.id),
            &commenter.access_token,
            &json!({ "content": "hello" }),
        )
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/notifications", &author.access_token)
        .await
        .unwrap();
    let page: PageResponse<NotificationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.len(), 1);
    let notification_id = page.data[0].id;

    // Only the recipient may delete it
    let response = server
        .delete_auth(
            &format!("/api/v1/notifications/{notification_id}"),
            &commenter.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/v1/notifications/{notification_id}"),
            &author.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth("/api/v1/notifications", &author.access_token)
        .await
        .unwrap();
    let page: PageResponse<NotificationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.data.is_empty());
}

#[tokio::test]
async fn test_device_token_registration() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let token = format!("device-token-{}", unique_suffix());
    let response = server
        .post_auth(
            "/api/v1/notifications/devices",
            &auth.access_token,
            &json!({ "token": token }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .delete_auth_json(
            "/api/v1/notifications/devices",
            &auth.access_token,
            &json!({ "token": token }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Email Verification Tests
// ============================================================================

#[tokio::test]
async fn test_email_verification_flow() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let email = format!("verify{}@example.com", unique_suffix());

    // Without MAIL_API_BASE_URL the code is logged instead of sent,
    // so issuing a code always succeeds in the test environment
    let response = server
        .post("/api/v1/email/verification", &json!({ "email": email }))
        .await
        .unwrap();
    let sent: VerificationSentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(sent.email, email);

    // A wrong code is rejected
    let response = server
        .post(
            "/api/v1/email/verification/confirm",
            &json!({ "email": email, "code": "000000" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
