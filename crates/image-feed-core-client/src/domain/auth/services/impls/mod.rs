// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use auth_domain_service::{AuthDomainService, AuthDomainServiceDependencies};

mod auth_domain_service;
