// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use fs_token_store::FsTokenStore;
pub use in_memory_token_store::InMemoryTokenStore;
pub use oauth_token_record::OAuthTokenRecord;

mod fs_token_store;
mod in_memory_token_store;
mod oauth_service;
mod oauth_token_record;
