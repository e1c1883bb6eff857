mod tour_dto;

pub use tour_dto::{
    encode_week, PickupTimeDto, PickupTimeResponseDto, PickupTimeSpec, SaveToursDto,
    SaveToursResponseDto, TourDetailDto, TourEntryDto, TourMainDto, TourMainResponseDto,
    TourOptionDto, TourOptionResponseDto, TourOptionSpec,
};
