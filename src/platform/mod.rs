pub(crate) mod path;
