mod claims;
mod password;

use bank_core::{UserProfile, UserRecord};

const ISSUER_PRIVATE_PEM: &str = include_str!("../../../../test-keys/issuer_private.pem");
const ISSUER_PUBLIC_PEM: &str = include_str!("../../../../test-keys/issuer_public.pem");
const OTHER_PUBLIC_PEM: &str = include_str!("../../../../test-keys/other_public.pem");

fn test_user() -> UserRecord {
    UserRecord {
        account_id: "1234567890".to_string(),
        username: "alice".to_string(),
        password_hash: "unused".to_string(),
        profile: UserProfile {
            first_name: "Alice".to_string(),
            last_name: "Liddell".to_string(),
            birthday: "1990-01-01".to_string(),
            timezone: "UTC".to_string(),
            address: "1 Rabbit Hole".to_string(),
            state: "CA".to_string(),
            zip: "94000".to_string(),
            tax_id: "000-00-0000".to_string(),
        },
    }
}
