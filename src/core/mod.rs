// Core modules implementing document I/O, path helpers, and error modeling.
pub(crate) mod document;
pub(crate) mod error;
pub(crate) mod paths;
