pub mod jwt;
pub mod validate;

pub use self::jwt::identity_middleware;
pub use self::validate::SimpleValidatedJson;
