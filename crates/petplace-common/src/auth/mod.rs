//! Authentication utilities

mod code;
mod jwt;
mod password;

pub use code::{generate_verification_code, VERIFICATION_CODE_LEN};
pub use jwt::{Claims, JwtService, TokenPair, TokenType};
pub use password::{
    hash_password, validate_password_strength, verify_password, PasswordService,
};
