//! Reading and writing boundary condition configuration.
//!
//! Configuration records use the dictionary format described in
//! [`dictionary`]: ordered `keyword value;` entries with optional nested
//! `{ ... }` blocks. A boundary condition is constructed from such a record
//! and can describe itself back into one, so a written record reloads to
//! bit-identical parameters.
//!
//! # Example
//!
//! ```
//! use parabolic_velocity::io::{parse_dictionary, ConfigurationError};
//!
//! let dict = parse_dictionary("inlet { peakMagnitude 2; }").unwrap();
//! let inlet = dict.lookup_dict("inlet").unwrap();
//!
//! assert_eq!(inlet.lookup_scalar("peakMagnitude").unwrap(), 2.0);
//! assert!(matches!(
//!     inlet.lookup_vector("flowDirection"),
//!     Err(ConfigurationError::MissingEntry { .. })
//! ));
//! ```

pub mod dictionary;

pub use dictionary::{
    parse_dictionary, read_dictionary_file, write_dictionary_file, ConfigurationError, Dictionary,
    DictionaryError, Entry, FieldValue,
};
