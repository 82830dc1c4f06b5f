//! Internal algorithm implementations shared by the public polygon functions.
pub(crate) mod ray_cast;
