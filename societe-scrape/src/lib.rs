//! Company profile scraping for societe.com.
//!
//! A profile URL is resolved to its slug ([`profile`]), a browser session is
//! opened on it and every field of the [`schema`] table is read by the
//! [`extract::FieldExtractor`]. The [`assemble`] step turns those readings
//! into one immutable [`record::CompanyRecord`]; [`fetch::ProfileFetcher`]
//! drives the whole thing for a list of URLs.
//!
//! Fields come in two tiers. A required field that cannot be read is kept in
//! the record as [`record::Required::NotFound`] and rendered as
//! `"Data not found for selector: <locator>"` when exported. An optional
//! field that cannot be read is simply `None`.
pub mod assemble;
pub mod extract;
pub mod fetch;
pub mod profile;
pub mod record;
pub mod schema;

pub use extract::FieldExtractor;
pub use fetch::ProfileFetcher;
pub use profile::profile_name;
pub use record::{CompanyRecord, Required};
