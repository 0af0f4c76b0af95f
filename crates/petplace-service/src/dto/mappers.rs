//! Entity to response DTO conversions

use petplace_core::entities::{
    AvailableDate, ChatMessage, ChatRoom, Comment, EmailVerification, Feed, Hotel, Notification,
    Payment, Pet, Reservation, User,
};

use super::responses::{
    AvailableDateResponse, ChatMessageResponse, ChatRoomResponse, CommentResponse, FeedResponse,
    HotelResponse, NotificationResponse, PaymentResponse, PetResponse, PublicUserResponse,
    ReservationResponse, UserResponse, VerificationSentResponse,
};

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            nickname: user.nickname,
            phone_number: user.phone_number,
            profile_image: user.profile_image,
            created_at: user.created_at,
        }
    }
}

impl From<User> for PublicUserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            nickname: user.nickname,
            profile_image: user.profile_image,
        }
    }
}

impl From<Pet> for PetResponse {
    fn from(pet: Pet) -> Self {
        Self {
            id: pet.id,
            user_id: pet.user_id,
            name: pet.name,
            animal: pet.animal.as_str().to_string(),
            breed: pet.breed,
            sex: pet.sex.as_str().to_string(),
            birth_date: pet.birth_date,
            weight_kg: pet.weight_kg,
            profile_image: pet.profile_image,
            created_at: pet.created_at,
        }
    }
}

impl From<Feed> for FeedResponse {
    fn from(feed: Feed) -> Self {
        Self {
            id: feed.id,
            user_id: feed.user_id,
            content: feed.content,
            image_url: feed.image_url,
            view_count: feed.view_count,
            like_count: feed.like_count,
            created_at: feed.created_at,
            updated_at: feed.updated_at,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            feed_id: comment.feed_id,
            user_id: comment.user_id,
            parent_id: comment.parent_id,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}

impl ChatRoomResponse {
    /// Shape a room from one participant's point of view
    pub fn for_viewer(room: ChatRoom, viewer_id: i64) -> Self {
        let other_user_id = room.other_participant(viewer_id).unwrap_or(room.user_high_id);
        Self {
            id: room.id,
            other_user_id,
            last_message: room.last_message,
            last_message_at: room.last_message_at,
            created_at: room.created_at,
        }
    }
}

impl From<ChatMessage> for ChatMessageResponse {
    fn from(message: ChatMessage) -> Self {
        Self {
            id: message.id,
            room_id: message.room_id,
            sender_id: message.sender_id,
            content: message.content,
            created_at: message.created_at,
        }
    }
}

impl From<Hotel> for HotelResponse {
    fn from(hotel: Hotel) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name,
            address: hotel.address,
            description: hotel.description,
            price_per_night: hotel.price_per_night,
            image_url: hotel.image_url,
        }
    }
}

impl From<AvailableDate> for AvailableDateResponse {
    fn from(date: AvailableDate) -> Self {
        Self {
            date: date.date,
            is_booked: date.is_booked,
        }
    }
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        Self {
            id: reservation.id,
            user_id: reservation.user_id,
            hotel_id: reservation.hotel_id,
            check_in: reservation.check_in,
            check_out: reservation.check_out,
            total_price: reservation.total_price,
            status: reservation.status.as_str().to_string(),
            merchant_uid: reservation.merchant_uid,
            created_at: reservation.created_at,
        }
    }
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id,
            reservation_id: payment.reservation_id,
            merchant_uid: payment.merchant_uid,
            imp_uid: payment.imp_uid,
            amount: payment.amount,
            method: payment.method.as_str().to_string(),
            status: payment.status.as_str().to_string(),
            paid_at: payment.paid_at,
        }
    }
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id,
            notification_type: notification.notification_type.as_str().to_string(),
            ref_type: notification.ref_type.as_str().to_string(),
            ref_id: notification.ref_id,
            message: notification.message,
            data: notification.data,
            is_read: notification.is_read,
            created_at: notification.created_at,
        }
    }
}

impl From<EmailVerification> for VerificationSentResponse {
    fn from(verification: EmailVerification) -> Self {
        Self {
            email: verification.email,
            expires_at: verification.expires_at,
        }
    }
}
