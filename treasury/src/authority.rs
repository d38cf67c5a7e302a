//! Caller identity as an explicit capability token.

use crate::context::OpContext;
use mintage_types::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of an authority, used as the registry key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AuthorityId(ObjectId);

impl AuthorityId {
    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl fmt::Display for AuthorityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// An unforgeable caller identity.
///
/// Anyone may create a token; it confers nothing by itself. Power comes
/// from a treasury admin registering the token's id with a
/// [`Role`](crate::Role). The id field is private and every constructor
/// allocates a fresh identifier, so a token carrying a chosen id cannot be
/// built: presenting a token proves the caller holds the one object that
/// was (possibly) registered.
///
/// The type is move-only. Presenting it by reference is how it is used.
#[derive(Serialize, Deserialize)]
pub struct AuthorityToken {
    id: AuthorityId,
}

impl AuthorityToken {
    pub fn new(ctx: &mut OpContext) -> Self {
        Self {
            id: AuthorityId(ctx.fresh_id()),
        }
    }

    pub fn id(&self) -> AuthorityId {
        self.id
    }
}

impl fmt::Debug for AuthorityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthorityToken({})", self.id)
    }
}
