mod area;
mod region;
mod tour_list_entry;

pub use area::Area;
pub use region::RegionAreaRow;
pub use tour_list_entry::TourListEntry;
