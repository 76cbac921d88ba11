pub mod overview;
pub mod time_slice;
pub mod time_slice_type;
pub mod work_day;

pub use overview::WorkDayOverview;
pub use time_slice::TimeSlice;
pub use time_slice_type::TimeSliceType;
pub use work_day::WorkDay;
