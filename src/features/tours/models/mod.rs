mod pickup_time;
mod tour;
mod tour_day;
mod tour_option;

pub use pickup_time::PickupTime;
pub use tour::Tour;
pub use tour_day::TourDay;
pub use tour_option::TourOption;
