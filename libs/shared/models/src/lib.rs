pub mod appointment;
pub mod error;
pub mod schedule;
pub mod time;
pub mod waitlist;

pub use appointment::{Appointment, AppointmentStatus};
pub use error::AppError;
pub use schedule::ScheduleTemplate;
pub use waitlist::{WaitlistEntry, WaitlistStatus};
