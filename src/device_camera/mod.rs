pub mod impl_fake;
pub mod impl_still;
pub mod interface;
pub mod session;
