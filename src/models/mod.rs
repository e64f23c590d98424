mod user;
mod professional;
mod rating;
mod service_request;

pub use user::{Address, NewUser, User, UserType};
pub use professional::Professional;
pub use rating::Rating;
pub use service_request::{NewServiceRequest, RequestStatus, ServiceRequest, Urgency};
