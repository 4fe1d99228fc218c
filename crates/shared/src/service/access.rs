use crate::{domain::requests::AuthContext, errors::ServiceError};

/// Denial message for catalog mutations, kept verbatim from the public API.
pub const MSG_NOT_ADMIN: &str = "You are not an admin!";
/// Denial message for order endpoints hit without a logged-in caller.
pub const MSG_NOT_LOGGED_IN: &str = "Nincs bejelentkezve!";
/// Denial message for order endpoints hit by a non-admin caller.
pub const MSG_OPERATION_DENIED: &str = "Művelet megtagadva";

/// Gate for product catalog mutations: every non-admin caller gets the same
/// fixed message, anonymous callers are reported as unauthenticated so the
/// HTTP layer can answer 401 instead of 403.
pub fn require_catalog_admin(identity: Option<&AuthContext>) -> Result<(), ServiceError> {
    match identity {
        None => Err(ServiceError::Unauthenticated(MSG_NOT_ADMIN.to_string())),
        Some(ctx) if !ctx.is_admin => Err(ServiceError::Forbidden(MSG_NOT_ADMIN.to_string())),
        Some(_) => Ok(()),
    }
}

/// Two-tier gate for order endpoints: anonymous and non-admin callers are
/// distinguished by message.
pub fn require_order_admin(identity: Option<&AuthContext>) -> Result<(), ServiceError> {
    match identity {
        None => Err(ServiceError::Unauthenticated(MSG_NOT_LOGGED_IN.to_string())),
        Some(ctx) if !ctx.is_admin => {
            Err(ServiceError::Forbidden(MSG_OPERATION_DENIED.to_string()))
        }
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> AuthContext {
        AuthContext {
            user_id: 1,
            is_admin: true,
        }
    }

    fn customer() -> AuthContext {
        AuthContext {
            user_id: 2,
            is_admin: false,
        }
    }

    #[test]
    fn catalog_gate_lets_admins_through() {
        assert!(require_catalog_admin(Some(&admin())).is_ok());
    }

    #[test]
    fn catalog_gate_uses_one_message_for_everyone_else() {
        match require_catalog_admin(None) {
            Err(ServiceError::Unauthenticated(msg)) => assert_eq!(msg, MSG_NOT_ADMIN),
            other => panic!("unexpected: {other:?}"),
        }
        match require_catalog_admin(Some(&customer())) {
            Err(ServiceError::Forbidden(msg)) => assert_eq!(msg, MSG_NOT_ADMIN),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn order_gate_distinguishes_anonymous_from_non_admin() {
        match require_order_admin(None) {
            Err(ServiceError::Unauthenticated(msg)) => assert_eq!(msg, MSG_NOT_LOGGED_IN),
            other => panic!("unexpected: {other:?}"),
        }
        match require_order_admin(Some(&customer())) {
            Err(ServiceError::Forbidden(msg)) => assert_eq!(msg, MSG_OPERATION_DENIED),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(require_order_admin(Some(&admin())).is_ok());
    }
}
