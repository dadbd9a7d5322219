pub mod payment;
pub mod user;
pub mod video;

pub use payment::Payment;
pub use user::User;
pub use video::Video;
