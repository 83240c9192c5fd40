pub mod calculate_workers_for_rows;
pub mod hsv_to_rgb;
