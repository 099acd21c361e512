//! URI components.
//!
//! Every component keeps its raw value and knows two string forms: the
//! plain form (`Display`, no delimiter) and the URI form (`to_uri_string`,
//! with its delimiter and percent-encoded).

mod authority;
mod fragment;
mod host;
mod parameters;
mod path;
mod port;
mod query;
mod scheme;
mod user_info;

pub use self::authority::Authority;
pub use self::fragment::Fragment;
pub use self::host::{Host, HostKind};
pub use self::parameters::{Parameters, Value};
pub use self::path::{Path, Segment, SegmentsList};
pub use self::port::Port;
pub use self::query::Query;
pub use self::scheme::Scheme;
pub use self::user_info::UserInfo;
