//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ChatRepository, CommentRepository, DeviceTokenRepository, EmailVerificationRepository,
    FeedRepository, FeedUpdate, HotelRepository, LikeRepository, NewComment, NewFeed,
    NewNotification, NewPayment, NewPet, NewReservation, NewUser, NotificationRepository,
    PageQuery, PaymentRepository, PetRepository, PetUpdate, RefreshTokenRepository, RepoResult,
    ReservationRepository, UserRepository, UserUpdate,
};
