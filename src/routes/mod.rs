mod contact;
mod health_check;
mod page;

pub use contact::send_message;
pub use health_check::health_check;
pub use page::home;
