//! Mock identity helpers for integration tests.
//!
//! Services behind the gateway receive `x-media-user-id` + `x-media-user-level`
//! headers. `MockAuth` produces the same headers so tests need no gateway.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

use media_auth_types::identity::{USER_ID_HEADER, USER_LEVEL_HEADER};
use media_domain::user::UserLevel;

/// Identity injected into test requests.
#[derive(Debug, Clone, Copy)]
pub struct MockAuth {
    pub user_id: i32,
    pub user_level: UserLevel,
}

impl MockAuth {
    pub fn new(user_id: i32, user_level: UserLevel) -> Self {
        Self {
            user_id,
            user_level,
        }
    }

    pub fn user(user_id: i32) -> Self {
        Self::new(user_id, UserLevel::User)
    }

    pub fn admin(user_id: i32) -> Self {
        Self::new(user_id, UserLevel::Admin)
    }

    /// Headers as if the gateway injected them.
    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in self.header_pairs() {
            map.insert(name, value);
        }
        map
    }

    /// Same headers as owned pairs, for request builders that add one header at a time.
    pub fn header_pairs(&self) -> [(HeaderName, HeaderValue); 2] {
        [
            (
                HeaderName::from_static(USER_ID_HEADER),
                HeaderValue::from(self.user_id),
            ),
            (
                HeaderName::from_static(USER_LEVEL_HEADER),
                HeaderValue::from_static(self.user_level.as_str()),
            ),
        ]
    }
}
