mod validate;

pub use self::validate::{SimpleValidatedJson, ValidatedQuery};
