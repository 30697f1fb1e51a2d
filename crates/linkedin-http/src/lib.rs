//! The HTTP client may vary depending on which one the user configures. This
//! module contains the required logic to use different clients interchangeably.
//!
//! Exactly one backend is compiled in: `client-reqwest` (async, the default)
//! or `client-ureq` (blocking).

// Disable all modules when both client features are enabled or when none are.
// This way only the compile error below gets shown instead of a whole list of
// confusing errors..
#[cfg(all(feature = "client-reqwest", feature = "client-ureq"))]
compile_error!(
    "`client-reqwest` and `client-ureq` features cannot both be enabled at \
    the same time, if you want to use `client-ureq` you need to set \
    `default-features = false`"
);

#[cfg(not(any(feature = "client-reqwest", feature = "client-ureq")))]
compile_error!(
    "You have to enable at least one of the available clients with the \
    `client-reqwest` or `client-ureq` features."
);

mod common;
#[cfg(feature = "client-reqwest")]
mod reqwest;
#[cfg(feature = "client-ureq")]
mod ureq;

#[cfg(feature = "client-reqwest")]
pub use self::reqwest::{ReqwestClient as HttpClient, ReqwestError as HttpError};
#[cfg(feature = "client-ureq")]
pub use self::ureq::{UreqClient as HttpClient, UreqError as HttpError};

pub use common::{without_query, BaseHttpClient, ErrorKind, Form, Headers, Query};
