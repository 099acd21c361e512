//! URL value objects with [RFC 3986] parsing, reference resolution and
//! rule-based normalization.
//!
//! [RFC 3986]: https://tools.ietf.org/html/rfc3986
//!
//! # Overview
//!
//! * [`Url`] is an immutable URL string. Any string is accepted: irregular
//!   input is handled on a best-effort basis instead of being rejected.
//! * [`Url::parse`] splits it into typed components ([`Parsed`]), and
//!   [`Components`] is their mutable counterpart.
//! * [`resolve::Base`] resolves relative references against an absolute URL.
//! * [`normalize::Rules`] rewrites a URL with a sequence of
//!   [`normalize::Rule`]s, such as removing default ports or sorting query
//!   parameters.
//! * [`config`] holds the default ports and directory index names used by
//!   some rules, either builtin or loaded from files.
//!
//! ```
//! use urlnorm::normalize::Rules;
//! use urlnorm::resolve::Base;
//! use urlnorm::Url;
//!
//! let base = Base::new(Url::new("http://www.pac.pt:80/a/b/c?d=1"))?;
//! let url = base.to_absolute(&Url::new("../index.php?y=2&x=1"))?;
//! assert_eq!(url.as_str(), "http://www.pac.pt:80/a/index.php?y=2&x=1");
//! assert_eq!(Rules::basic().apply(&url)?.as_str(), "http://pac.pt/a/?x=1&y=2");
//! # Ok::<_, urlnorm::Error>(())
//! ```
//!
//! # Serialization
//!
//! Components are written in a canonical form: the scheme and registered
//! names are lowercased, names are converted to punycode, IP literals are
//! written canonically, and every part is percent-decoded then encoded
//! again, so already-encoded input is never encoded twice.
//!
//! # Features
//!
//! * `serde`: implements `Serialize` and `Deserialize` for [`Url`], as a
//!   plain string.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod component;
mod components;
pub mod config;
mod error;
pub mod normalize;
mod parsed;
mod parser;
mod percent_encoding;
pub mod resolve;
pub mod server;
mod url;

pub use self::components::Components;
pub use self::error::{Error, ErrorKind};
pub use self::parsed::Parsed;
pub use self::url::Url;
