//! dynjson - schema-less accessors over parsed JSON.
//!
//! Navigate and mutate JSON objects and arrays without declaring types up
//! front. Every typed lookup is total: a missing key or a kind mismatch gives
//! `None`, a caller-supplied default, or the zero value of the requested
//! type, depending on which accessor tier is used. Only parsing text and
//! encoding back to text can fail.
//!
//! ```
//! let object = dynjson::parse_object(r#"{"outer": {"inner": 5}, "pi": 3.14159265358979}"#)?;
//! assert_eq!(object.object("outer").int("inner"), 5);
//! assert_eq!(object.int("pi"), 3);
//! assert_eq!(object.string_default("name", "anonymous"), "anonymous");
//!
//! let list = dynjson::List::new();
//! list.append([4, 5]);
//! list.prepend([0, 1, 2, 3]);
//! assert_eq!(list.to_json()?, "[0,1,2,3,4,5]");
//! # Ok::<(), dynjson::DynJsonError>(())
//! ```
//!
//! [`Object`] and [`List`] are reference-counted handles: cloning one, or
//! fetching a nested container from a parent, yields a view onto the same
//! storage. Handles are `!Send`; convert to text or `serde_json::Value` to
//! move a document across threads.

mod codec;
mod conversion;
mod error;
mod guard;
mod list;
mod object;
mod value;

pub use error::{DynJsonError, Result};
pub use list::{Item, Items, List};
pub use object::Object;
pub use value::{Kind, Value};

/// Parse JSON text whose root is an object.
pub fn parse_object(text: &str) -> Result<Object> {
    Object::parse(text)
}

/// Parse JSON text whose root is an array.
pub fn parse_list(text: &str) -> Result<List> {
    List::parse(text)
}
